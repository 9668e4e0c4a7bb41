//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted 10-digit US phone shape, XXX-XXX-XXXX. Digits are ASCII only
/// and the pattern is anchored, so the whole value must match.
static PHONE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern is a valid regex")
});

/// A type-safe wrapper for phone numbers.
///
/// The number is validated at construction time against the XXX-XXX-XXXX
/// format, so every value of this type satisfies it.
///
/// # Example
///
/// ```
/// use contacts_api::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("302-611-9148").unwrap();
/// assert_eq!(phone.as_str(), "302-611-9148");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying the rejected value
    /// if it does not fully match `[0-9]{3}-[0-9]{3}-[0-9]{4}`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Pure predicate: does the candidate fully match the accepted format?
    pub fn is_valid(phone: &str) -> bool {
        PHONE_FORMAT.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
