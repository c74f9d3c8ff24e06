//! Server configuration sourced from environment variables.

use std::env;
use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection string.
const DATABASE_URL_VAR: &str = "TASKBOARD_DATABASE_URL";
/// Environment variable naming the listen address.
const BIND_VAR: &str = "TASKBOARD_BIND";
/// Environment variable naming the connection pool size.
const POOL_SIZE_VAR: &str = "TASKBOARD_POOL_SIZE";

/// Listen address used when [`BIND_VAR`] is unset.
const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Pool size used when [`POOL_SIZE_VAR`] is unset.
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable holds a value that does not parse.
    #[error("invalid value '{value}' for {name}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Runtime configuration for the task board server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Socket address the server listens on.
    pub bind_addr: String,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when the database URL is unset and
    /// [`ConfigError::InvalidVar`] when the pool size does not parse as a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingVar(DATABASE_URL_VAR))?;
        let bind_addr = env::var(BIND_VAR).unwrap_or_else(|_| DEFAULT_BIND.to_owned());
        let pool_size = match env::var(POOL_SIZE_VAR) {
            Ok(value) => match value.parse::<u32>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => {
                    return Err(ConfigError::InvalidVar {
                        name: POOL_SIZE_VAR,
                        value,
                    });
                }
            },
            Err(_) => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
        })
    }
}
