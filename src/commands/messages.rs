//! Reply text for command errors.

use super::CommandError;
use crate::domain::ValidationError;
use crate::error::ContactError;

/// Map an error kind to the line shown to the user.
pub fn describe(err: &CommandError) -> String {
    match err {
        CommandError::Empty => "You have not provided a command!".to_string(),
        CommandError::Unknown(_) => "Invalid command.".to_string(),
        CommandError::InvalidArguments { usage } => {
            format!("Enter correct data in the format ({})", usage)
        }
        CommandError::ContactNotFound(_) => "Contact not found.".to_string(),
        CommandError::Contact(ContactError::PhoneNotFound(_)) => "Contact not found!".to_string(),
        CommandError::Contact(ContactError::Invalid(ValidationError::InvalidPhone(_))) => {
            "Phone number must contain exactly 10 digits.".to_string()
        }
        CommandError::Contact(ContactError::Invalid(ValidationError::InvalidBirthday(_))) => {
            "Invalid date format. Use DD.MM.YYYY".to_string()
        }
    }
}
