//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Exactly ten ASCII digits. `\d` would also accept non-ASCII digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A validated ten-digit phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly 10 characters
    /// - Digits `0-9` only, no separators or leading `+`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value does not match.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
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
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
