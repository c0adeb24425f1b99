//! # Runtime Configuration
//!
//! Settings are read from the process environment (optionally populated from a
//! `.env` file by `dotenvy`). Only deployment concerns live here; the token
//! verification key is a compile-time constant and is deliberately absent.
//!
//! ## Environment Variables
//!
//! - `BIND_ADDR` - Listen address (default [`DEFAULT_BIND_ADDR`])
//! - `DATABASE_URL` / `DATABASE_URL_FILE` - PostgreSQL connection string, or a file holding it
//! - `DATABASE_MAX_CONNECTIONS` - Pool size (default [`DEFAULT_DB_MAX_CONNECTIONS`])
//! - `UPLOAD_BODY_LIMIT` - Maximum upload request size in bytes (default [`DEFAULT_UPLOAD_BODY_LIMIT`])

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::utils::constant::*;
use crate::utils::secret::get_secret;

/// Errors raised while loading [`AppConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Env variable `{0}` should be set")]
    Missing(&'static str),
    #[error("Env variable `{name}` has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Deployment settings for the server binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,
    pub upload_body_limit: usize,
}

impl AppConfig {
    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] - No database URL was provided
    /// - [`ConfigError::Invalid`] - A numeric or address variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = parse_or("BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let database_url = get_secret("DATABASE_URL_FILE", "DATABASE_URL")
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_max_connections =
            parse_or("DATABASE_MAX_CONNECTIONS", Some(DEFAULT_DB_MAX_CONNECTIONS))?;
        let upload_body_limit = parse_or("UPLOAD_BODY_LIMIT", Some(DEFAULT_UPLOAD_BODY_LIMIT))?;

        let config = Self {
            bind_addr,
            database_url,
            database_max_connections,
            upload_body_limit,
        };
        debug!(
            bind_addr = %config.bind_addr,
            database_max_connections,
            upload_body_limit,
            "Configuration loaded"
        );
        Ok(config)
    }
}

fn parse_or<T: FromStr>(name: &'static str, default: Option<T>) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => default.ok_or(ConfigError::Missing(name)),
    }
}
