//! Contact Book - Main entry point
//!
//! Runs the interactive assistant: reads commands line by line, applies them
//! to an in-memory address book and prints the replies.

use anyhow::Result;
use contact_book::{Assistant, Config, Reply};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr so replies on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting assistant with a {}-day birthday window",
        config.birthday_window_days
    );

    let mut assistant = Assistant::new(config.birthday_window_days);
    let mut rl = DefaultEditor::new()?;

    println!("Welcome to the assistant bot!");

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match assistant.handle(&line) {
                    Reply::Continue(text) => println!("{}", text),
                    Reply::Exit(text) => {
                        println!("{}", text);
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Good bye!");
                break;
            }
            Err(err) => {
                error!("Failed to read input: {:?}", err);
                return Err(err.into());
            }
        }
    }

    info!(
        "Assistant shutdown complete ({} contacts discarded)",
        assistant.book().len()
    );
    Ok(())
}
