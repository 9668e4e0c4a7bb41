//! Configuration management for the contacts API.
//!
//! This module handles loading and validating configuration from environment
//! variables, with a `.env` file picked up when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contacts API server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the server binds to (default: "127.0.0.1")
    pub host: String,

    /// Port the server listens on (default: 8080)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_HOST`: Bind address (default: "127.0.0.1")
    /// - `CONTACTS_PORT`: Listen port (default: 8080)
    ///
    /// Log verbosity is driven by `RUST_LOG`, read directly by the
    /// tracing subscriber rather than through this struct.
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if one exists, without failing when it doesn't
        let _ = dotenvy::dotenv();

        let host = env::var("CONTACTS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_HOST".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let port = Self::parse_env_u16("CONTACTS_PORT", 8080)?;

        Ok(Config { host, port })
    }

    /// The address string the listener binds to, e.g. "127.0.0.1:8080".
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
