use std::path::PathBuf;
use clap::Parser;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::PublisherVia;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub via: PublisherVia,
}

impl AppState {
    pub fn new(owner: &str, via: PublisherVia) -> AppState {
        AppState {
            config: Configuration::new(owner),
            via,
        }
    }

    /// Configuration from `BOOKSHELF_*` variables; `BOOKSHELF_STATUS` picks the
    /// status sink (`stdout`, `json` or `silent`).
    pub fn from_env() -> AppState {
        AppState {
            config: Configuration::from_env(),
            via: std::env::var("BOOKSHELF_STATUS").map(PublisherVia::from).unwrap_or(PublisherVia::Stdout),
        }
    }
}

/// Personal book catalog with an interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
pub struct Cli {
    /// Files of `title;author` lines imported before the prompt starts
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

// The text a user sees for a failed command.
pub fn command_error_reply(err: &CommandError) -> String {
    match err {
        CommandError::Validation { message, .. } => {
            message.to_string()
        }
        CommandError::NotFound { .. } => {
            "Book not found.".to_string()
        }
        CommandError::Runtime { message, .. } => {
            format!("Error: {}", message)
        }
        CommandError::Serialization { message } => {
            format!("Error: {}", message)
        }
    }
}
