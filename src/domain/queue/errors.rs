//! Queue-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, GuildId, ValidationError};

/// Errors raised by queue mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue was torn down; its session no longer exists.
    #[error("Session not found: queue for guild {0} was deleted")]
    Deleted(GuildId),

    /// The requested mutation is not a legal transition.
    #[error("Invalid transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl QueueError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QueueError::Deleted(_) => ErrorCode::SessionNotFound,
            QueueError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<QueueError> for DomainError {
    fn from(err: QueueError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            QueueError::Deleted(guild_id) => domain.with_detail("guild_id", guild_id.to_string()),
            QueueError::InvalidTransition(_) => domain,
        }
    }
}
