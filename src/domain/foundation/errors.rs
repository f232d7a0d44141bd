//! Domain error vocabulary.
//!
//! `ValidationError` is raised while building values. `DomainError` is what
//! ports and services hand back across layer boundaries: a stable code plus
//! a human message and optional key/value context.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required and was left blank")]
    EmptyField { field: String },

    #[error("{field} accepts {min}..={max}, received {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("{from} cannot move to {to}")]
    IllegalTransition { from: String, to: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField { field: field.into() }
    }

    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Records both states by their `Debug` rendering.
    pub fn illegal_transition(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        Self::IllegalTransition {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    InvalidOption,
    UnknownCommand,
    SessionNotFound,
    SessionAlreadyOpen,
    InvalidStateTransition,
    PlaybackEngineError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::InvalidOption => "INVALID_OPTION",
            Self::UnknownCommand => "UNKNOWN_COMMAND",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::SessionAlreadyOpen => "SESSION_ALREADY_OPEN",
            Self::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            Self::PlaybackEngineError => "PLAYBACK_ENGINE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Failure reported by the playback engine.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PlaybackEngineError, message)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = if matches!(err, ValidationError::IllegalTransition { .. }) {
            ErrorCode::InvalidStateTransition
        } else {
            ErrorCode::ValidationFailed
        };
        Self::new(code, err.to_string())
    }
}
