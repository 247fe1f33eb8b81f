//! Entity module - Contains the SeaORM entity definitions for the database.
//! The only table is the key-value snapshot store the order book is
//! persisted into; domain records themselves are plain serde structs.

pub mod snapshot;

// Re-export specific types to avoid conflicts
pub use snapshot::{Column as SnapshotColumn, Entity as Snapshot, Model as SnapshotModel};
