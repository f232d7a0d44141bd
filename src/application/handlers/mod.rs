//! Command handlers.
//!
//! A handler runs only after its validator chain passed, and turns the
//! correlation context into exactly one outcome.

mod leave;
mod loop_mode;

pub use leave::LeaveHandler;
pub use loop_mode::LoopHandler;

use async_trait::async_trait;

use crate::application::pipeline::{CommandError, CorrelationContext, Outcome, ValidatorChain};

/// One named command of the pipeline.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Name the transport dispatches on.
    fn name(&self) -> &'static str;

    /// Preconditions checked, in order, before `handle` runs.
    fn validators(&self) -> ValidatorChain {
        ValidatorChain::standard()
    }

    /// Performs the command.
    ///
    /// # Errors
    ///
    /// - `InvalidOption` for caller input the transport could not coerce
    /// - `SessionNotFound` or `Domain` for unexpected failures
    async fn handle(&self, ctx: &CorrelationContext) -> Result<Outcome, CommandError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::memory::{InMemoryGuildQueue, InMemorySessionRegistry};
    use crate::application::pipeline::{CommandOptions, CorrelationContext};
    use crate::domain::foundation::{ChannelId, CommandMetadata, GuildId, UserId};
    use crate::domain::voice::Caller;
    use crate::ports::{GuildQueue, SessionRegistry};

    pub fn guild() -> GuildId {
        GuildId::new(1).unwrap()
    }

    pub fn channel() -> ChannelId {
        ChannelId::new(10).unwrap()
    }

    pub async fn registered_queue(registry: &InMemorySessionRegistry) -> Arc<InMemoryGuildQueue> {
        let queue = Arc::new(InMemoryGuildQueue::new(guild(), channel()));
        registry.put(guild(), queue.clone()).await.unwrap();
        queue
    }

    pub fn context(
        command: &str,
        session: Option<Arc<dyn GuildQueue>>,
        options: CommandOptions,
    ) -> CorrelationContext {
        CorrelationContext::new(
            CommandMetadata::test_fixture(command),
            Caller::new(UserId::new(100).unwrap(), "dj").in_channel(channel()),
            session,
            options,
        )
    }
}
