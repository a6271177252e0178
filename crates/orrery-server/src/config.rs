//! Environment configuration
//!
//! A single datastore connection string plus the listen port, read from
//! the environment with logged fallbacks. A value that fails to parse is
//! an error, not a panic, so it reaches the CLI's error path.

use std::{env, fmt::Display, str::FromStr};

use orrery_core::{OrreryError, Result};
use tracing::info;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    /// * `InvalidConfig` - If a set variable cannot be parsed
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("ORRERY_PORT", "5555")?,
            database_url: try_load("DB_URI", "orrery.db")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| OrreryError::InvalidConfig {
        message: format!("{} value {:?} is invalid: {}", key, raw, e),
    })
}
