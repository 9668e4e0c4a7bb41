//! Domain value objects and types.
//!
//! Type-safe wrappers for the concepts contacts are built from: numeric
//! contact IDs, email addresses, and phone numbers. The string-backed
//! value objects validate at construction time, so invalid data cannot
//! be represented once it has crossed into the domain.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
