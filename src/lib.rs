//! Contacts API - a REST backend for managing human contact records.
//!
//! This library provides a small CRUD service over contacts: who someone is
//! (name, address) and how to reach them (phones, email). Email and phone
//! values are validated at construction, so a contact that exists in the
//! store is well-formed by construction.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact id, email, phone number)
//! - **models**: The contact aggregate and the request payload shape
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Contact storage behind a trait, in-memory by default
//! - **server**: The axum HTTP surface mapping routes to repository calls

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;

pub use config::Config;
pub use domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, RepositoryError};
pub use models::{Address, Contact, ContactPayload, Name, Phone, PhoneType};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::{build_router, run_server, AppState};
