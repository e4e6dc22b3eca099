//! Test fixtures shared by the integration tests.
//!
//! Builders for dates, records and address books so each test only states
//! the data it cares about.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Build a calendar date, panicking on an impossible one.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a record with the given phones and no birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    record
}

/// Create a record with only a birthday (`DD.MM.YYYY`).
#[allow(dead_code)]
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name);
    record
        .add_birthday(birthday)
        .expect("valid fixture birthday");
    record
}

/// Build an address book from `(name, birthday)` pairs.
#[allow(dead_code)]
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(record_with_birthday(name, birthday));
    }
    book
}
