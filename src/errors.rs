//! Unified error types and result handling.
//!
//! Lookup misses are deliberately *not* errors in this crate: mutating an
//! absent record is a logged no-op, and a persisted snapshot that fails to
//! parse loads as an empty collection. Only genuine faults (database I/O,
//! config syntax, snapshot serialization) surface here.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Database-level failure from `SeaORM`.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Snapshot payload could not be serialized for writing.
    ///
    /// Only the write path uses this; an unreadable persisted snapshot is
    /// recovered as an empty collection instead of failing the load.
    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
