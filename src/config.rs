//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present, without printing anything to stdout.

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window. A longer window would wrap past a year.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead scanned by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthday window in days (default: 7, max 365)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `PROMPT`: Interactive prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt = env::var("PROMPT").unwrap_or_else(|_| Self::default().prompt);

        Ok(Config {
            birthday_window_days,
            log_level,
            prompt,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
            prompt: "Enter a command: ".to_string(),
        }
    }
}
