//! Database configuration module for `AtelierBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. The schema is generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the single snapshot table always
//! matches the Rust struct definition without manual SQL.

use crate::entities::Snapshot;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/atelier_buddy.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is
/// set. This function handles connection errors and provides a clean interface
/// for database access throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates the snapshot table using `SeaORM`'s schema generation from the
/// entity definition.
///
/// Existing installations already have the table; creation is attempted only
/// when it is missing.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut snapshot_table = schema.create_table_from_entity(Snapshot);
    snapshot_table.if_not_exists();

    db.execute(builder.build(&snapshot_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SnapshotModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that the table exists by querying it
        let _: Vec<SnapshotModel> = Snapshot::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<SnapshotModel> = Snapshot::find().limit(1).all(&db).await?;

        Ok(())
    }
}
