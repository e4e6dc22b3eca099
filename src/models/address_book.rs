//! AddressBook: the in-memory collection of contact records.

use crate::birthdays::{self, UpcomingBirthday};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

/// Records keyed by their exact, case-sensitive name.
///
/// Keys are kept in a `BTreeMap`, so iteration and [`render_all`](Self::render_all)
/// are in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// An existing record with the same name is replaced and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().to_string();
        let previous = self.records.insert(name, record);

        if let Some(ref replaced) = previous {
            tracing::debug!(name = %replaced.name(), "Replaced existing record");
        } else {
            tracing::debug!(total = self.records.len(), "Added record");
        }

        previous
    }

    /// Exact-match lookup. Absence is a normal outcome, not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            tracing::debug!(name, "Deleted record");
        }
        removed
    }

    /// Return the record named `name`, creating and inserting an empty one
    /// first if needed.
    pub fn upsert(&mut self, name: &str) -> &mut Record {
        self.records.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(name, "Created record on first use");
            Record::new(name)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// One rendered record per line, in name order. Empty for an empty book.
    pub fn render_all(&self) -> String {
        self.records
            .values()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Birthdays in the next `window_days` days, counted from the local
    /// calendar date.
    pub fn get_upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Birthdays in `[today, today + window_days]`, ordered by congratulation
    /// date then name.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(self.records.values(), today, window_days)
    }
}
