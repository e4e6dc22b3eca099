//! Command layer for the interactive assistant.
//!
//! Parses one line of user input into a [`Command`], runs it against an
//! [`AddressBook`](crate::models::AddressBook) and turns the outcome into a
//! reply. Error kinds become text only in [`describe`].

mod handlers;
mod messages;

pub use handlers::{Assistant, Reply};
pub use messages::describe;

use crate::error::ContactError;
use thiserror::Error;

/// Errors surfaced by command parsing and dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The input line was blank
    #[error("Empty input")]
    Empty,

    /// The first word is not a known command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// The command got the wrong number of arguments
    #[error("Invalid arguments, expected: {usage}")]
    InvalidArguments { usage: &'static str },

    /// No record exists under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record rejected the change
    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// A parsed assistant command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Exit,
}

impl Command {
    /// Parse a whitespace-separated line. The command word is matched
    /// case-insensitively; arguments are kept as typed.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match word.to_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "add" => {
                let [name, phone] = expect_args(&args, "add <name> <phone>")?;
                Ok(Self::Add { name, phone })
            }
            "change" => {
                let [name, old_phone, new_phone] =
                    expect_args(&args, "change <name> <old phone> <new phone>")?;
                Ok(Self::Change {
                    name,
                    old_phone,
                    new_phone,
                })
            }
            "phone" => {
                let [name] = expect_args(&args, "phone <name>")?;
                Ok(Self::Phone { name })
            }
            "all" => Ok(Self::All),
            "add-birthday" => {
                let [name, birthday] =
                    expect_args(&args, "add-birthday <name> <DD.MM.YYYY>")?;
                Ok(Self::AddBirthday { name, birthday })
            }
            "show-birthday" => {
                let [name] = expect_args(&args, "show-birthday <name>")?;
                Ok(Self::ShowBirthday { name })
            }
            "birthdays" => Ok(Self::Birthdays),
            "delete" => {
                let [name] = expect_args(&args, "delete <name>")?;
                Ok(Self::Delete { name })
            }
            "close" | "exit" => Ok(Self::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Require exactly `N` arguments.
fn expect_args<const N: usize>(
    args: &[&str],
    usage: &'static str,
) -> CommandResult<[String; N]> {
    let args: [&str; N] = args
        .try_into()
        .map_err(|_| CommandError::InvalidArguments { usage })?;
    Ok(args.map(str::to_string))
}
