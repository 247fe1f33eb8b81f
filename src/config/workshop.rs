//! Workshop configuration loading from config.toml
//!
//! This module provides functionality to load the workshop scheduling
//! settings from a TOML configuration file: the weekday the workshop is
//! closed (skipped by the work-date scheduler and marked OFF on the
//! calendar) and the advisory number of work slots shown per day. A missing
//! file falls back to the built-in defaults so a fresh checkout runs as the
//! original system did.

use crate::errors::{Error, Result};
use chrono::Weekday;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Workshop scheduling settings
    #[serde(default)]
    pub workshop: WorkshopConfig,
}

/// Scheduling settings for the workshop
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct WorkshopConfig {
    /// Weekday the workshop is closed; the scheduler never assigns it
    pub skip_day: Weekday,
    /// Advisory number of work slots displayed per calendar day.
    /// Never enforced - the scheduler keeps assigning past it.
    pub daily_capacity: usize,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            skip_day: Weekday::Fri,
            daily_capacity: 3,
        }
    }
}

/// Loads workshop configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads workshop configuration from the default location (./config.toml),
/// falling back to the built-in defaults when the file does not exist.
///
/// A file that exists but fails to parse is still an error - silently
/// ignoring a broken config would mask operator mistakes.
pub fn load_default_config() -> Result<Config> {
    if Path::new("config.toml").exists() {
        load_config("config.toml")
    } else {
        info!("No config.toml found, using default workshop settings.");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_workshop_config() {
        let toml_str = r#"
            [workshop]
            skip_day = "sunday"
            daily_capacity = 5
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.workshop.skip_day, Weekday::Sun);
        assert_eq!(config.workshop.daily_capacity, 5);
    }

    #[test]
    fn test_defaults_applied_for_missing_fields() {
        let toml_str = r#"
            [workshop]
            daily_capacity = 4
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.workshop.skip_day, Weekday::Fri);
        assert_eq!(config.workshop.daily_capacity, 4);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.workshop.skip_day, Weekday::Fri);
        assert_eq!(config.workshop.daily_capacity, 3);
    }
}
