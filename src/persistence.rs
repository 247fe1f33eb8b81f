//! Key-value snapshot persistence for the order book.
//!
//! Full-snapshot model, not an append log: every save rewrites each
//! collection wholesale as one JSON string under its fixed key. Acceptable
//! because the data volume is a single workshop's live order book and there
//! are no concurrent writers. There is no schema version tag and no
//! compaction.
//!
//! Loading fails open: an absent key or an unparsable payload yields an
//! empty collection rather than aborting startup. Only database-level I/O
//! failures propagate.

use crate::core::order::Order;
use crate::core::payment::WorkerPayment;
use crate::entities::{Snapshot, snapshot};
use crate::errors::Result;
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Snapshot key for the order collection.
pub const ORDERS_KEY: &str = "orders";
/// Snapshot key for the worker payment collection.
pub const WORKER_PAYMENTS_KEY: &str = "workerPayments";

/// Writes and reads full snapshots of both collections against the
/// `snapshots` key-value table.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    db: DatabaseConnection,
}

impl SnapshotStore {
    /// Wraps an open database connection. The table must already exist
    /// (see [`crate::config::database::create_tables`]).
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Serializes both collections and writes each under its fixed key.
    pub async fn save(&self, orders: &[Order], payments: &[WorkerPayment]) -> Result<()> {
        self.write_key(ORDERS_KEY, serde_json::to_string(orders)?)
            .await?;
        self.write_key(WORKER_PAYMENTS_KEY, serde_json::to_string(payments)?)
            .await?;
        Ok(())
    }

    /// Reads both collections back.
    ///
    /// A key that is absent or fails to parse loads as an empty collection
    /// (logged at warn); each key fails open independently.
    pub async fn load(&self) -> Result<(Vec<Order>, Vec<WorkerPayment>)> {
        let orders = self.read_collection(ORDERS_KEY).await?;
        let payments = self.read_collection(WORKER_PAYMENTS_KEY).await?;
        Ok((orders, payments))
    }

    async fn write_key(&self, key: &str, value: String) -> Result<()> {
        let now = Utc::now().naive_utc();

        // Check if the key exists
        let existing = Snapshot::find()
            .filter(snapshot::Column::Key.eq(key))
            .one(&self.db)
            .await?;

        if let Some(state) = existing {
            // Update existing record
            let mut active_model: snapshot::ActiveModel = state.into();
            active_model.value = Set(value);
            active_model.updated_at = Set(now);
            active_model.update(&self.db).await?;
        } else {
            // Insert new record
            let new_state = snapshot::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value),
                updated_at: Set(now),
                ..Default::default()
            };
            new_state.insert(&self.db).await?;
        }

        Ok(())
    }

    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let row = Snapshot::find()
            .filter(snapshot::Column::Key.eq(key))
            .one(&self.db)
            .await?;

        Ok(match row {
            Some(row) => match serde_json::from_str(&row.value) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Snapshot under key '{key}' failed to parse, starting empty: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::order::OrderStatus;
    use crate::test_utils::{sample_order, sample_payment, setup_test_db};
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_round_trip_reproduces_collections_exactly() -> Result<()> {
        let db = setup_test_db().await?;
        let store = SnapshotStore::new(db);

        let orders = vec![
            sample_order("Sarah Johnson", "555-0101", OrderStatus::Cutting),
            sample_order("Maria Garcia", "555-0102", OrderStatus::Done),
        ];
        let payments = vec![sample_payment(orders[0].id, "Fatima")];

        store.save(&orders, &payments).await?;
        let (loaded_orders, loaded_payments) = store.load().await?;

        assert_eq!(loaded_orders, orders);
        assert_eq!(loaded_payments, payments);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_with_no_snapshots_is_empty() -> Result<()> {
        let db = setup_test_db().await?;
        let store = SnapshotStore::new(db);

        let (orders, payments) = store.load().await?;
        assert!(orders.is_empty());
        assert!(payments.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_fails_open() -> Result<()> {
        let db = setup_test_db().await?;

        // Write garbage under the orders key directly
        let garbage = snapshot::ActiveModel {
            key: Set(ORDERS_KEY.to_string()),
            value: Set("{definitely not json".to_string()),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        garbage.insert(&db).await?;

        let store = SnapshotStore::new(db);
        let payments = vec![sample_payment(uuid::Uuid::new_v4(), "Fatima")];
        store
            .write_key(WORKER_PAYMENTS_KEY, serde_json::to_string(&payments)?)
            .await?;

        // The corrupt key loads empty; the good key still loads
        let (orders, loaded_payments) = store.load().await?;
        assert!(orders.is_empty());
        assert_eq!(loaded_payments, payments);

        Ok(())
    }

    #[tokio::test]
    async fn test_save_overwrites_in_place() -> Result<()> {
        let db = setup_test_db().await?;
        let store = SnapshotStore::new(db.clone());

        let first = vec![sample_order("Sarah Johnson", "555-0101", OrderStatus::Cutting)];
        store.save(&first, &[]).await?;

        let second = vec![sample_order("Lisa Chen", "555-0103", OrderStatus::Sewing)];
        store.save(&second, &[]).await?;

        let (orders, _) = store.load().await?;
        assert_eq!(orders, second);

        // Still exactly one row per key
        let count = Snapshot::find()
            .filter(snapshot::Column::Key.eq(ORDERS_KEY))
            .count(&db)
            .await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_collections_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let store = SnapshotStore::new(db);

        store.save(&[], &[]).await?;
        let (orders, payments) = store.load().await?;
        assert!(orders.is_empty());
        assert!(payments.is_empty());

        Ok(())
    }
}
