//! Error types for folioterm.
//!
//! The command core never fails: bad input turns into sentinel values. These
//! errors only come from the outer surface (reading the content file,
//! writing output).

use thiserror::Error;

/// Main error type for folioterm operations.
#[derive(Error, Debug)]
pub enum TerminalError {
    /// Configuration errors (unreadable or malformed content file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TerminalError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using TerminalError.
pub type Result<T> = std::result::Result<T, TerminalError>;
