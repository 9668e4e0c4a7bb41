//! Contact model representing a person and the pieces a contact is built from.

use crate::domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person's name, split into its addressable parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Name {
    /// First (given) name
    pub first: String,

    /// Middle name, when the contact has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,

    /// Last (family) name
    pub last: String,
}

impl Name {
    /// Create a name with no middle part.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            middle: None,
            last: last.into(),
        }
    }

    /// Create a name with all three parts.
    pub fn with_middle(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            middle: Some(middle.into()),
            last: last.into(),
        }
    }
}

/// A standard Street/City/State/Zip postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Street line, e.g. "8360 High Autumn Row"
    pub street: String,

    /// City name
    pub city: String,

    /// State name or abbreviation
    pub state: String,

    /// Postal code
    pub zip: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

/// Where a phone number reaches the contact.
///
/// Serialized in lowercase ("home", "work", "mobile") to match the wire
/// format clients send.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Home,
    Work,
    Mobile,
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhoneType::Home => "home",
            PhoneType::Work => "work",
            PhoneType::Mobile => "mobile",
        };
        write!(f, "{}", label)
    }
}

/// A labeled phone number belonging to a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phone {
    /// The number itself, already validated as XXX-XXX-XXXX
    pub number: PhoneNumber,

    /// What kind of line this is
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

impl Phone {
    /// Create a phone entry, validating the number format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match
    /// XXX-XXX-XXXX.
    pub fn new(number: impl Into<String>, phone_type: PhoneType) -> Result<Self, ValidationError> {
        Ok(Self {
            number: PhoneNumber::new(number)?,
            phone_type,
        })
    }
}

/// A contact record: who someone is and how to reach them.
///
/// The `id` is absent until the repository assigns one on first save and is
/// never reassigned afterwards. The phone list serializes under the wire
/// name `phone` and is always emitted, even when empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Repository-assigned identifier, absent until first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,

    /// The contact's name
    pub name: Name,

    /// Postal address, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Phone numbers, zero or more
    #[serde(default, rename = "phone")]
    pub phones: Vec<Phone>,

    /// Email address, validated at construction
    pub email: EmailAddress,
}

impl Contact {
    /// Create a contact with the required fields and no phones or address.
    pub fn new(name: Name, email: EmailAddress) -> Self {
        Self {
            id: None,
            name,
            address: None,
            phones: Vec::new(),
            email,
        }
    }

    /// Append a phone entry to the contact.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }
}

/// Request body accepted by the create and update endpoints.
///
/// Deliberately has no `id` field: identifiers belong to the store, so any
/// id a client includes in the body is ignored rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactPayload {
    /// The contact's name
    pub name: Name,

    /// Postal address, when provided
    #[serde(default)]
    pub address: Option<Address>,

    /// Phone numbers under the wire name `phone`
    #[serde(default, rename = "phone")]
    pub phones: Vec<Phone>,

    /// Email address, validated during deserialization
    pub email: EmailAddress,
}

impl ContactPayload {
    /// Build an unsaved contact from the payload.
    pub fn into_contact(self) -> Contact {
        Contact {
            id: None,
            name: self.name,
            address: self.address,
            phones: self.phones,
            email: self.email,
        }
    }
}
