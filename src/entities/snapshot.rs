//! Snapshot entity - Stores key-value pairs for persisted collections.
//! Each key holds one full JSON snapshot of a collection (the order book
//! under `"orders"`, worker payments under `"workerPayments"`). There is no
//! schema version tag; a shape change would need an explicit migration.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Snapshot database model - stores key-value snapshot pairs
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "snapshots")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Snapshot key (e.g., `"orders"`)
    pub key: String,
    /// Serialized collection stored as a JSON string
    pub value: String,
    /// When this snapshot was last written
    pub updated_at: DateTime,
}

/// `Snapshot` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
