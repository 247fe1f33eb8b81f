//! The order store - sole owner of the order book.
//!
//! Owns the order and worker payment collections, applies every mutation,
//! and snapshots both collections through the persistence adapter before
//! each mutating call returns. There is exactly one logical thread of
//! control: the host serializes user actions, so no locking is needed and
//! operations observe each other in dispatch order.
//!
//! Mutations referencing an absent id are logged no-ops, never errors: a
//! stale edit against a deleted record is an expected situation for a
//! single-operator tool, not a fault.

use crate::config::workshop::WorkshopConfig;
use crate::core::clock::Clock;
use crate::core::order::{Order, OrderDraft};
use crate::core::payment::{PaymentDraft, WorkerPayment};
use crate::core::schedule::compute_work_on_date;
use crate::errors::Result;
use crate::persistence::SnapshotStore;
use tracing::{debug, warn};
use uuid::Uuid;

/// In-memory order book with snapshot-on-mutation persistence.
#[derive(Debug)]
pub struct OrderStore {
    orders: Vec<Order>,
    worker_payments: Vec<WorkerPayment>,
    snapshots: SnapshotStore,
    config: WorkshopConfig,
    clock: Clock,
}

impl OrderStore {
    /// Opens the store, loading both collections from the snapshot store.
    ///
    /// Loading fails open: missing or unreadable snapshots start the
    /// matching collection empty.
    pub async fn open(
        snapshots: SnapshotStore,
        config: WorkshopConfig,
        clock: Clock,
    ) -> Result<Self> {
        let (orders, worker_payments) = snapshots.load().await?;
        debug!(
            "Order store opened with {} order(s) and {} worker payment(s).",
            orders.len(),
            worker_payments.len()
        );

        Ok(Self {
            orders,
            worker_payments,
            snapshots,
            config,
            clock,
        })
    }

    /// All orders, in insertion order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All worker payments, in insertion order.
    #[must_use]
    pub fn worker_payments(&self) -> &[WorkerPayment] {
        &self.worker_payments
    }

    /// Replaces the time source. Hosts use this to pin "today" in tests.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// Records a new order.
    ///
    /// Assigns a fresh id, stamps `created_date` with today and computes
    /// the immutable `work_on_date` from it. No duplicate detection - two
    /// identical submissions create two orders.
    pub async fn create_order(&mut self, draft: OrderDraft) -> Result<Order> {
        let created_date = self.clock.today();
        let order = Order {
            id: Uuid::new_v4(),
            client_name: draft.client_name,
            phone_number: draft.phone_number,
            measurements: draft.measurements,
            pricing: draft.pricing,
            prepayment: draft.prepayment,
            total: draft.total,
            created_date,
            work_on_date: compute_work_on_date(created_date, self.config.skip_day),
            due_date: draft.due_date,
            status: draft.status,
        };

        self.orders.push(order.clone());
        self.persist().await?;
        Ok(order)
    }

    /// Replaces the mutable fields of an existing order.
    ///
    /// `created_date` and `work_on_date` are carried over unchanged from
    /// the stored record - edits never reschedule. Returns `Ok(None)` when
    /// no order has the id (logged no-op).
    pub async fn update_order(&mut self, id: Uuid, draft: OrderDraft) -> Result<Option<Order>> {
        let Some(existing) = self.orders.iter_mut().find(|o| o.id == id) else {
            warn!("Ignoring update for unknown order {id}.");
            return Ok(None);
        };

        *existing = Order {
            id,
            client_name: draft.client_name,
            phone_number: draft.phone_number,
            measurements: draft.measurements,
            pricing: draft.pricing,
            prepayment: draft.prepayment,
            total: draft.total,
            created_date: existing.created_date,
            work_on_date: existing.work_on_date,
            due_date: draft.due_date,
            status: draft.status,
        };
        let updated = existing.clone();

        self.persist().await?;
        Ok(Some(updated))
    }

    /// Removes an order. No-op when absent.
    ///
    /// Worker payments referencing the order are left untouched; their
    /// `dress_id` dangles from here on.
    pub async fn delete_order(&mut self, id: Uuid) -> Result<()> {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        if self.orders.len() == before {
            warn!("Ignoring delete for unknown order {id}.");
            return Ok(());
        }

        self.persist().await
    }

    /// Logs a new worker payment.
    ///
    /// Stamps `logged_date` with today; a payment logged as already paid
    /// gets today as `date_paid`.
    pub async fn create_worker_payment(&mut self, draft: PaymentDraft) -> Result<WorkerPayment> {
        let today = self.clock.today();
        let payment = WorkerPayment {
            id: Uuid::new_v4(),
            dress_id: draft.dress_id,
            worker_name: draft.worker_name,
            payment_amount: draft.payment_amount,
            logged_date: today,
            is_paid: draft.is_paid,
            date_paid: draft.is_paid.then_some(today),
        };

        self.worker_payments.push(payment.clone());
        self.persist().await?;
        Ok(payment)
    }

    /// Removes a worker payment. No-op when absent.
    pub async fn delete_worker_payment(&mut self, id: Uuid) -> Result<()> {
        let before = self.worker_payments.len();
        self.worker_payments.retain(|p| p.id != id);
        if self.worker_payments.len() == before {
            warn!("Ignoring delete for unknown worker payment {id}.");
            return Ok(());
        }

        self.persist().await
    }

    /// Marks a worker payment as paid, stamping `date_paid` with today.
    ///
    /// Idempotent on `is_paid`; marking an already-paid payment refreshes
    /// `date_paid` to today (kept from the reference system). Returns
    /// `Ok(None)` when no payment has the id.
    pub async fn mark_payment_paid(&mut self, id: Uuid) -> Result<Option<WorkerPayment>> {
        let today = self.clock.today();
        let Some(payment) = self.worker_payments.iter_mut().find(|p| p.id == id) else {
            warn!("Ignoring mark-paid for unknown worker payment {id}.");
            return Ok(None);
        };

        payment.is_paid = true;
        payment.date_paid = Some(today);
        let updated = payment.clone();

        self.persist().await?;
        Ok(Some(updated))
    }

    /// Adopts pre-built orders when the store is empty, in one snapshot.
    ///
    /// Used for first-run sample data; a store that already holds orders
    /// is left untouched. Returns whether seeding happened.
    pub async fn seed_if_empty(&mut self, orders: Vec<Order>) -> Result<bool> {
        if !self.orders.is_empty() {
            return Ok(false);
        }

        self.orders = orders;
        self.persist().await?;
        Ok(true)
    }

    /// Snapshots both collections; called by every mutation before it
    /// returns.
    async fn persist(&self) -> Result<()> {
        self.snapshots
            .save(&self.orders, &self.worker_payments)
            .await
    }
}
