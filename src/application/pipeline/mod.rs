//! Command pipeline.
//!
//! Shared infrastructure every command goes through: the inbound contract,
//! the correlation context, ordered validators, per-session locks and the
//! dispatcher that turns each invocation into exactly one response.

mod chain;
mod command;
mod context;
mod dispatcher;
mod errors;
mod locks;
mod outcome;
mod validators;

pub use chain::ValidatorChain;
pub use command::{CommandOptions, InboundCommand, OptionValue};
pub use context::CorrelationContext;
pub use dispatcher::CommandPipeline;
pub use errors::CommandError;
pub use locks::SessionLocks;
pub use outcome::{Icon, Outcome};
pub use validators::{
    InVoiceChannel, QueueExists, QueueRegistered, RejectReason, SameVoiceChannel, Validation,
    ValidationScope, Validator,
};
