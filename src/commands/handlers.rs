//! Command dispatch against the address book.

use super::{describe, Command, CommandError, CommandResult};
use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::domain::{Birthday, Phone};
use crate::error::ContactError;
use crate::models::{AddressBook, Record};
use chrono::{Local, NaiveDate};

/// What the interactive loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and end the session
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }
}

/// The assistant session: owns the address book for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Assistant {
    book: AddressBook,
    window_days: u32,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl Assistant {
    /// Create an assistant with an empty book and the given birthday window.
    pub fn new(window_days: u32) -> Self {
        Self {
            book: AddressBook::new(),
            window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line using the local calendar date.
    pub fn handle(&mut self, line: &str) -> Reply {
        self.handle_on(line, Local::now().date_naive())
    }

    /// Handle one input line as if today were `today`.
    pub fn handle_on(&mut self, line: &str, today: NaiveDate) -> Reply {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => return self.reject(e),
        };

        tracing::debug!(?command, "Dispatching command");

        if command == Command::Exit {
            return Reply::Exit("Good bye!".to_string());
        }

        match self.execute(command, today) {
            Ok(text) => Reply::Continue(text),
            Err(e) => self.reject(e),
        }
    }

    fn reject(&self, err: CommandError) -> Reply {
        tracing::info!(error = %err, "Command rejected");
        Reply::Continue(describe(&err))
    }

    fn execute(&mut self, command: Command, today: NaiveDate) -> CommandResult<String> {
        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => {
                // Validate before upserting so a bad phone leaves no empty record behind.
                Phone::new(phone.as_str()).map_err(ContactError::from)?;
                self.book.upsert(&name).add_phone(&phone)?;
                Ok("Contact added.".to_string())
            }
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                let record = self
                    .book
                    .find_mut(&name)
                    .ok_or(CommandError::ContactNotFound(name))?;
                record.edit_phone(&old_phone, &new_phone)?;
                Ok("Contact changed.".to_string())
            }
            Command::Phone { name } => {
                let record = self.find(&name)?;
                Ok(record
                    .phones()
                    .iter()
                    .map(Phone::as_str)
                    .collect::<Vec<_>>()
                    .join(", "))
            }
            Command::All => {
                if self.book.is_empty() {
                    Ok("There is no contact!".to_string())
                } else {
                    Ok(self.book.render_all())
                }
            }
            Command::AddBirthday { name, birthday } => {
                Birthday::new(&birthday).map_err(ContactError::from)?;
                self.book.upsert(&name).add_birthday(&birthday)?;
                Ok("Birthday added.".to_string())
            }
            Command::ShowBirthday { name } => {
                let record = self.find(&name)?;
                Ok(record
                    .birthday()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "No birthday set.".to_string()))
            }
            Command::Birthdays => {
                let upcoming = self.book.upcoming_birthdays_from(today, self.window_days);
                if upcoming.is_empty() {
                    return Ok("No upcoming birthdays.".to_string());
                }
                Ok(upcoming
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::Delete { name } => {
                self.book
                    .delete(&name)
                    .ok_or(CommandError::ContactNotFound(name))?;
                Ok("Contact deleted.".to_string())
            }
            Command::Exit => Ok("Good bye!".to_string()),
        }
    }

    fn find(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}
