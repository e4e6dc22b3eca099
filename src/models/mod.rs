//! Data models for the contact book.
//!
//! A [`Record`] holds one contact; an [`AddressBook`] owns every record,
//! keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
