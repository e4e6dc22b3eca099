//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format accepted and produced by [`Birthday`].
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields such as `1.2.2000`, so the shape is
// checked first.
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth, parsed from `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2000");
/// assert!(Birthday::new("30.02.2000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text has the wrong
    /// shape or names a date that does not exist (e.g. `31.04.1990`).
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The full date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
