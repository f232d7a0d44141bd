//! CorrelationContext - everything one command invocation carries around.

use std::fmt;
use std::sync::Arc;

use super::{CommandError, CommandOptions};
use crate::domain::foundation::{CommandMetadata, CorrelationId, GuildId};
use crate::domain::voice::Caller;
use crate::ports::GuildQueue;

/// Built once per inbound command and threaded through validators, the
/// handler and the emitter. Dropped when the command completes.
///
/// `session` is the queue the registry returned at lookup time. Validators
/// re-read live state instead of trusting it.
#[derive(Clone)]
pub struct CorrelationContext {
    metadata: CommandMetadata,
    caller: Caller,
    session: Option<Arc<dyn GuildQueue>>,
    options: CommandOptions,
}

impl CorrelationContext {
    pub fn new(
        metadata: CommandMetadata,
        caller: Caller,
        session: Option<Arc<dyn GuildQueue>>,
        options: CommandOptions,
    ) -> Self {
        Self {
            metadata,
            caller,
            session,
            options,
        }
    }

    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    pub fn correlation_id(&self) -> CorrelationId {
        self.metadata.correlation_id()
    }

    pub fn guild_id(&self) -> GuildId {
        self.metadata.guild_id
    }

    pub fn command(&self) -> &str {
        &self.metadata.command
    }

    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    pub fn options(&self) -> &CommandOptions {
        &self.options
    }

    /// The session a handler operates on.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the lookup found no session
    pub fn session(&self) -> Result<&Arc<dyn GuildQueue>, CommandError> {
        self.session
            .as_ref()
            .ok_or(CommandError::SessionNotFound(self.guild_id()))
    }
}

impl fmt::Debug for CorrelationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorrelationContext")
            .field("metadata", &self.metadata)
            .field("caller", &self.caller)
            .field("has_session", &self.session.is_some())
            .field("options", &self.options)
            .finish()
    }
}
