//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Everything here is recoverable: command errors are
//! rendered as user-facing strings at the dispatch boundary, and the loop
//! keeps running.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A value object or record mutation rejected its input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command line did not carry enough positional arguments.
    #[error("missing arguments")]
    MissingArguments,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for command handler results.
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
