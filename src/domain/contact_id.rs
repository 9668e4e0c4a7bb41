//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// IDs are assigned by the repository when a contact is first saved, so a
/// `ContactId` in hand always refers to a record that existed at some point.
/// The ordering follows the numeric value, which matches assignment order.
///
/// # Example
///
/// ```
/// use contacts_api::domain::ContactId;
///
/// let id = ContactId::new(1);
/// assert_eq!(id.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// Wrap a raw numeric ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric value.
    pub fn value(self) -> u64 {
        self.0
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
