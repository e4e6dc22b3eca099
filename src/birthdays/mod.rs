//! Upcoming-birthday computation.
//!
//! Given a reference date and a window, decide which birthdays fall inside it
//! and on which working day the contact should be congratulated.

pub mod window;

pub use window::{congratulation_date, next_birthday, upcoming_birthdays, UpcomingBirthday};

/// Window used when the caller does not ask for a specific size.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;
