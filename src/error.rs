//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can report back to the user.
///
/// These never end the session; the handler boundary renders them as the
/// reply text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number or birthday argument failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command was given the wrong number of arguments
    #[error("Invalid arguments for '{command}'. Usage: {usage}")]
    ArgumentCount {
        command: &'static str,
        usage: &'static str,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
