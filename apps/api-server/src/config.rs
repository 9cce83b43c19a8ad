//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "postgres")]
use lms_infra::DatabaseConfig;
use lms_infra::S3Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    /// Media bucket; `None` when any of the credentials is missing.
    pub storage: Option<S3Config>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(feature = "postgres")]
        let database = match env::var("DATABASE_URL").ok() {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or("DB_MAX_CONNECTIONS", 100)?,
                min_connections: parse_or("DB_MIN_CONNECTIONS", 10)?,
            }),
            None => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080)?,
            #[cfg(feature = "postgres")]
            database,
            storage: Self::storage_from_env(),
        })
    }

    fn storage_from_env() -> Option<S3Config> {
        let bucket = env::var("BUCKET_NAME").ok()?;
        let access_key = env::var("ACCESS_KEY").ok()?;
        let secret_key = env::var("SECRET_KEY").ok()?;

        let config = S3Config::new(bucket, access_key, secret_key);
        Some(match env::var("STORAGE_ENDPOINT") {
            Ok(endpoint) => config.with_endpoint(endpoint),
            Err(_) => config,
        })
    }
}

fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}
