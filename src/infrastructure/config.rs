//! Environment configuration.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite URL (default: `sqlite://todoApplication.db`)
//! - `HOST`: Server host address (default: `127.0.0.1`)
//! - `PORT`: Server port (default: `3000`)

use std::env;

use thiserror::Error;

use crate::server::ServerConfig;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://todoApplication.db";

const DEFAULT_HOST: &str = "127.0.0.1";

const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Environment variable {0} is not valid UTF-8")]
    NotUnicode(&'static str),
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server: ServerConfig::new(DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if `PORT` is not a valid port number or
    /// a variable holds non-UTF-8 data.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigurationError::NotUnicode(name)),
        })
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigurationError>,
    {
        let database_url =
            lookup("DATABASE_URL")?.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT")? {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigurationError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            server: ServerConfig::new(host, port),
        })
    }
}
