//! Shared test utilities for `AtelierBuddy`.
//!
//! This module provides common helper functions for setting up in-memory
//! snapshot databases, fixed-clock stores and sample records with sensible
//! defaults.

use crate::config::workshop::WorkshopConfig;
use crate::core::clock::Clock;
use crate::core::order::{Measurements, Order, OrderDraft, OrderStatus, Pricing};
use crate::core::payment::{PaymentDraft, WorkerPayment};
use crate::core::store::OrderStore;
use crate::errors::Result;
use crate::persistence::SnapshotStore;
use chrono::{Days, NaiveDate};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// The pinned "today" used throughout the tests: Monday 2024-06-03.
/// A Monday keeps simple creations away from the Friday skip day.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date")
}

/// Creates an in-memory `SQLite` database with the snapshot table
/// initialized. This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Opens an order store over the given database with default workshop
/// settings (Friday off, capacity 3) and the clock pinned to
/// [`test_today`].
pub async fn setup_test_store_on(db: DatabaseConnection) -> Result<OrderStore> {
    OrderStore::open(
        SnapshotStore::new(db),
        WorkshopConfig::default(),
        Clock::Fixed(test_today()),
    )
    .await
}

/// Opens a fresh fixed-clock order store over its own in-memory database.
pub async fn setup_test_store() -> Result<OrderStore> {
    setup_test_store_on(setup_test_db().await?).await
}

/// Builds an order draft with sensible defaults.
///
/// # Defaults
/// * `phone_number`: "555-0100"
/// * `pricing`: embroidery 50 + sewing 80, total 130, prepayment 100
/// * `due_date`: a week after [`test_today`]
/// * `status`: `Cutting`
pub fn sample_draft(client_name: &str) -> OrderDraft {
    let pricing = Pricing {
        embroidery: 50.0,
        sewing: 80.0,
        ..Pricing::default()
    };
    OrderDraft {
        client_name: client_name.to_string(),
        phone_number: "555-0100".to_string(),
        measurements: Measurements {
            bust: Some(90.0),
            waist: Some(70.0),
            height: Some(165.0),
        },
        pricing,
        prepayment: 100.0,
        total: pricing.total(),
        due_date: test_today() + Days::new(7),
        status: OrderStatus::Cutting,
    }
}

/// Builds a fully-formed order without going through a store, for tests of
/// the pure view and persistence layers.
pub fn sample_order(client_name: &str, phone_number: &str, status: OrderStatus) -> Order {
    let draft = sample_draft(client_name);
    Order {
        id: Uuid::new_v4(),
        client_name: client_name.to_string(),
        phone_number: phone_number.to_string(),
        measurements: draft.measurements,
        pricing: draft.pricing,
        prepayment: draft.prepayment,
        total: draft.total,
        created_date: test_today(),
        work_on_date: test_today() + Days::new(1),
        due_date: draft.due_date,
        status,
    }
}

/// Builds an unpaid payment draft against the given order.
pub fn sample_payment_draft(dress_id: Uuid) -> PaymentDraft {
    PaymentDraft {
        dress_id,
        worker_name: "Fatima".to_string(),
        payment_amount: 40.0,
        is_paid: false,
    }
}

/// Builds a fully-formed unpaid worker payment, for tests of the pure
/// persistence layer.
pub fn sample_payment(dress_id: Uuid, worker_name: &str) -> WorkerPayment {
    WorkerPayment {
        id: Uuid::new_v4(),
        dress_id,
        worker_name: worker_name.to_string(),
        payment_amount: 40.0,
        logged_date: test_today(),
        is_paid: false,
        date_paid: None,
    }
}
