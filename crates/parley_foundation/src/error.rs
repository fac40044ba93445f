//! Error types for the Parley system.
//!
//! Uses `thiserror` for ergonomic error definition. Only setup mistakes and
//! runtime plumbing failures are errors: input that matches no command, or
//! a validator rejecting a token, is reported through ordinary results.

use thiserror::Error;

/// The main error type for Parley operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate command registration error.
    #[must_use]
    pub fn duplicate_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCommand(name.into()))
    }

    /// Creates an invalid syntax pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a missing handler error.
    #[must_use]
    pub fn missing_handler(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingHandler(name.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A command with this name is already registered.
    #[error("you already have a command named {0}")]
    DuplicateCommand(String),

    /// A syntax pattern could not be compiled.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending syntax string.
        pattern: String,
        /// What is wrong with it.
        message: String,
    },

    /// A command was built without a handler.
    #[error("command {0} has no handler")]
    MissingHandler(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Encoding or decoding persisted state failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
