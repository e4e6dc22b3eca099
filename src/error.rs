//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these carry user-facing wording; the command layer maps them to
//! replies in one place.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The phone targeted by an edit is not on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
