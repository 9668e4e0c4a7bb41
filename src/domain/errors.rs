//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address does not match the accepted format.
    InvalidEmail(String),

    /// The provided phone number does not match the accepted format.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(
                f,
                "Incorrect e-mail format: {}. Valid e-mail addresses need to look like name@domain.tld",
                email
            ),
            Self::InvalidPhone(number) => write!(
                f,
                "{} is not valid. Valid phone numbers need to be XXX-XXX-XXXX",
                number
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
