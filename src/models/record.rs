//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Phone};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at construction and is the record's key inside an
/// [`AddressBook`](crate::models::AddressBook).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: String,

    /// Phone numbers in insertion order; duplicates are allowed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Invalid` if `value` is not ten digits.
    pub fn add_phone(&mut self, value: &str) -> ContactResult<()> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old_value` with `new_value`, keeping
    /// its position.
    ///
    /// The replacement is validated before the lookup, so a failed call never
    /// changes the record.
    ///
    /// # Errors
    ///
    /// - `ContactError::Invalid` if `new_value` is not ten digits
    /// - `ContactError::PhoneNotFound` if no phone equals `old_value`
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> ContactResult<()> {
        let replacement = Phone::new(new_value)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old_value)
            .ok_or_else(|| ContactError::PhoneNotFound(old_value.to_string()))?;

        *slot = replacement;
        Ok(())
    }

    /// Look up a phone by its text. Absence is a normal outcome.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Remove the first phone equal to `value`, returning it if present.
    pub fn remove_phone(&mut self, value: &str) -> Option<Phone> {
        let index = self.phones.iter().position(|phone| phone.as_str() == value)?;
        Some(self.phones.remove(index))
    }

    /// Parse and store a birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Invalid` if `value` is not a real `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, value: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

/// Renders as `name: phone1, phone2` with ` (birthday: DD.MM.YYYY)` appended
/// when a birthday is set.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;

        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", phone)?;
        }

        if let Some(birthday) = &self.birthday {
            write!(f, " (birthday: {})", birthday)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_record_new_is_empty() {
        let record = Record::new("Alice");
        assert_eq!(record.name(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_invalid_is_not_stored() {
        let mut record = Record::new("Alice");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            ContactError::Invalid(ValidationError::InvalidPhone("12345".to_string()))
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_edit_phone_replaces_first_match_in_place() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, ["3333333333", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_replacement_wins_over_missing_target() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("9999999999", "bad").unwrap_err();
        assert!(matches!(err, ContactError::Invalid(_)));
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        let removed = record.remove_phone("1111111111");
        assert_eq!(removed.map(Phone::into_inner).as_deref(), Some("1111111111"));
        assert_eq!(record.phones().len(), 1);

        assert!(record.remove_phone("1111111111").is_none());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("Alice");
        record.add_birthday("01.02.1990").unwrap();
        record.add_birthday("03.04.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "03.04.1991");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = Record::new("Alice");
        record.add_birthday("01.02.1990").unwrap();
        assert!(record.add_birthday("31.02.1990").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "01.02.1990");
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("Alice");
        assert_eq!(record.to_string(), "Alice: ");

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(record.to_string(), "Alice: 1111111111, 2222222222");

        record.add_birthday("15.01.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Alice: 1111111111, 2222222222 (birthday: 15.01.1990)"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.add_birthday("15.01.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","phones":["1111111111"],"birthday":"15.01.1990"}"#
        );

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name":"Alice","phones":["123"]}"#);
        assert!(result.is_err());
    }
}
