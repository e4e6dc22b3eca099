//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The rejected input is carried along so callers can log it; it is never
/// stored on a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(date) => write!(f, "Invalid birthday: {}", date),
        }
    }
}

impl std::error::Error for ValidationError {}
