//! Error types for jnl

use crate::domain::ItemId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the jnl application
#[derive(Debug, Error)]
pub enum JnlError {
    #[error("Not a journal file: {0}")]
    NotAJournalStore(PathBuf),

    #[error("Journal file does not exist: {0}")]
    StoreNotFound(PathBuf),

    #[error("No item with item_id {0}")]
    NotFound(ItemId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Conflicting options: {0}")]
    ConflictingOptions(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error in '{context}': {source}")]
    Storage {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl JnlError {
    /// Wrap a storage failure with the statement or step that produced it
    pub fn storage(context: impl Into<String>, source: rusqlite::Error) -> Self {
        JnlError::Storage {
            context: context.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JnlError::ConflictingOptions(_) => 2,
            JnlError::InvalidArgument(_) | JnlError::InvalidDate(_) => 3,
            JnlError::NotAJournalStore(_) => 4,
            JnlError::NotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JnlError::NotAJournalStore(path) => {
                format!(
                    "{} is not a jnl journal file.\n\n\
                    Suggestions:\n\
                    • Check that you passed the right file name\n\
                    • Give a new file name to create a fresh journal",
                    path.display()
                )
            }
            JnlError::NotFound(id) => {
                format!(
                    "No item with item_id {}\n\n\
                    Suggestions:\n\
                    • Run 'jnl <FILENAME> --ls' to see the current item ids\n\
                    • Removed items live in the archive and can no longer be changed",
                    id
                )
            }
            JnlError::InvalidDate(input) => {
                format!(
                    "Date '{}' must be provided in 'YYYY-MM-DD' format\n\n\
                    Also accepted: today, yesterday, monday..sunday, last <weekday>\n\n\
                    Example:\n\
                    jnl main.jnl --id 4 --dt 2023-11-20",
                    input
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JnlError
pub type Result<T> = std::result::Result<T, JnlError>;
