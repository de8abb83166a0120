//! Error types for td
//!
//! Every variant except `Io` is a recoverable user-input defect: the menu
//! loop reports it in the matching style and returns to the menu. `Io` means
//! the console itself failed (closed stdin, broken pipe) and ends the loop.
//! Display strings double as the user-facing messages, so rendering an error
//! is always `line(style, &err.to_string())`.

use thiserror::Error;

/// Main error type for td operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Title cannot be empty.")]
    EmptyTitle,

    #[error("You can have at most {limit} tasks. You cannot add more.")]
    CapacityExceeded { limit: usize },

    #[error("There are no tasks to mark.")]
    EmptyStore,

    #[error("Please enter a valid number.")]
    InvalidNumber { input: String },

    #[error("That number does not exist.")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the menu loop may report this error and continue.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Result type alias for td operations
pub type Result<T> = std::result::Result<T, Error>;
