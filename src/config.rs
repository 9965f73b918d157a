use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_MAX_POOL_SIZE: u32 = 10;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a valid number, got '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Connection settings for the order store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub database_url: String,
    pub max_pool_size: u32,
    pub connection_timeout: Duration,
}

impl DbSettings {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            connection_timeout: Duration::from_secs(DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }

    /// Reads `DATABASE_URL`, `DB_POOL_MAX_SIZE` and `DB_CONNECTION_TIMEOUT_SECS`,
    /// loading a `.env` file first if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let mut settings = Self::new(database_url);

        if let Some(size) = parse_number::<u32>(&lookup, "DB_POOL_MAX_SIZE")? {
            settings.max_pool_size = size;
        }
        if let Some(secs) = parse_number::<u64>(&lookup, "DB_CONNECTION_TIMEOUT_SECS")? {
            settings.connection_timeout = Duration::from_secs(secs);
        }
        Ok(settings)
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
