//! Errors a command handler can return instead of an outcome.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, GuildId, ValidationError};

/// Failures that stop a handler before it can build an outcome.
///
/// `InvalidOption` is caller-caused and becomes a warning; everything else is
/// unexpected and becomes an error carrying the correlation identifier.
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("Invalid option '{name}': {reason}")]
    InvalidOption { name: String, reason: String },

    #[error("No live session for guild {0}")]
    SessionNotFound(GuildId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CommandError {
    pub fn invalid_option(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CommandError::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the caller, not the system, caused this failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, CommandError::InvalidOption { .. })
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CommandError::InvalidOption { .. } => ErrorCode::InvalidOption,
            CommandError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            CommandError::Domain(err) => err.code,
        }
    }

    /// Wraps a failed option conversion.
    pub fn from_validation(name: &str, err: ValidationError) -> Self {
        CommandError::invalid_option(name, err.to_string())
    }
}
