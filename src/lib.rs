//! Contact Book - an in-memory personal address book.
//!
//! Stores names, ten-digit phone numbers and birthdays, answers exact-name
//! lookups, and lists the contacts whose birthday falls in the next few days,
//! moved to the following Monday when it lands on a weekend.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Phone`, `Birthday`)
//! - **models**: `Record` and the `AddressBook` that owns them
//! - **birthdays**: Upcoming-birthday window and weekend shift
//! - **commands**: Text commands for the interactive assistant
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use commands::{Assistant, Command, CommandError, Reply};
pub use config::Config;
pub use domain::{Birthday, Phone, ValidationError};
pub use error::{ConfigError, ContactError};
pub use models::{AddressBook, Record};
