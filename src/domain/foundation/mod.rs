//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, command metadata, the state machine
//! trait and error types that form the vocabulary of the Encore domain.

mod command;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChannelId, CorrelationId, GuildId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
