//! Data models for contact records.
//!
//! The structures here represent contacts and the entities they are composed
//! of, along with the request payload shape the HTTP endpoints accept.

pub mod contact;

pub use contact::{Address, Contact, ContactPayload, Name, Phone, PhoneType};
