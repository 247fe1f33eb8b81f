/// Database configuration and connection management
pub mod database;

/// Workshop scheduling configuration from config.toml
pub mod workshop;
