//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact carries:
//! phone numbers and birthdays. These value objects validate at construction
//! time, so an invalid value never reaches a record.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use phone::Phone;
