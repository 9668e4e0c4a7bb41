//! Error types for the contacts API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-format violations live in [`crate::domain::ValidationError`]; the types here
//! cover the persistence and configuration layers.

use crate::domain::ContactId;
use thiserror::Error;

/// Errors that can occur when interacting with the contact store.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No contact exists under the given id
    #[error("contact {0} not found")]
    NotFound(ContactId),

    /// The storage backend failed in a way the caller cannot fix
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
