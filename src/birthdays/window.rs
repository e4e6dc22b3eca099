//! Birthday window algorithm.

use crate::domain::{Birthday, BIRTHDAY_FORMAT};
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// A contact to congratulate and the working day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// The birthday's month and day placed in `year`.
///
/// Feb 29 becomes Feb 28 when `year` is not a leap year.
fn anniversary_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// First occurrence of the birthday on or after `today`.
///
/// Returns `None` only when the year arithmetic leaves chrono's date range.
pub fn next_birthday(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    anniversary_in(birthday, today.year().checked_add(1)?)
}

/// Move a weekend date forward to the following Monday. Weekdays are returned
/// unchanged.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

/// Collect the birthdays falling in `[today, today + window_days]`.
///
/// Records without a birthday are skipped. The result is ordered by
/// congratulation date, then by name.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let Some(last_day) = today.checked_add_days(Days::new(u64::from(window_days))) else {
        tracing::warn!(%today, window_days, "Birthday window exceeds the calendar range");
        return Vec::new();
    };

    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let next = next_birthday(birthday, today)?;
            (next <= last_day).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(next),
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });

    tracing::debug!(
        %today,
        window_days,
        matches = upcoming.len(),
        "Computed upcoming birthdays"
    );

    upcoming
}
