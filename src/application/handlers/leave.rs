//! LeaveHandler - tears down the guild's playback session.

use async_trait::async_trait;
use tracing::{debug, info};

use super::CommandHandler;
use crate::application::pipeline::{
    CommandError, CorrelationContext, Icon, Outcome, ValidatorChain,
};
use crate::application::queue_machine;
use crate::domain::queue::Deletion;

const TITLE: &str = "Leaving channel";
const MESSAGE: &str =
    "Cleared the track queue and left voice channel.\n\nTo play more music, use the **`/play`** command!";

/// Deletes the queue and disconnects from voice.
///
/// The deleted queue stays registered until a new session replaces it or
/// the engine reports playback finished, so repeating the command answers
/// with the same success instead of a missing-queue warning.
#[derive(Debug, Default)]
pub struct LeaveHandler;

impl LeaveHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler for LeaveHandler {
    fn name(&self) -> &'static str {
        "leave"
    }

    fn validators(&self) -> ValidatorChain {
        ValidatorChain::teardown()
    }

    async fn handle(&self, ctx: &CorrelationContext) -> Result<Outcome, CommandError> {
        let queue = ctx.session()?;

        match queue_machine::delete(queue.as_ref()).await? {
            Deletion::Deleted => info!("Deleted queue and left voice channel."),
            Deletion::AlreadyDeleted => debug!("Queue was already torn down."),
        }

        Ok(Outcome::success(Icon::Success, TITLE, MESSAGE).with_author())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionRegistry;
    use crate::application::handlers::test_support::{context, registered_queue};
    use crate::application::pipeline::CommandOptions;
    use crate::domain::response::ResponseKind;
    use crate::ports::GuildQueue;

    #[tokio::test]
    async fn deletes_queue() {
        let registry = InMemorySessionRegistry::new();
        let queue = registered_queue(&registry).await;
        let ctx = context("leave", Some(queue.clone()), CommandOptions::new());

        let outcome = LeaveHandler::new().handle(&ctx).await.unwrap();

        assert_eq!(outcome.kind, ResponseKind::Success);
        assert_eq!(outcome.title, TITLE);
        assert!(outcome.show_author);
        assert!(queue.is_deleted().await.unwrap());
    }

    #[tokio::test]
    async fn already_deleted_queue_still_succeeds() {
        let registry = InMemorySessionRegistry::new();
        let queue = registered_queue(&registry).await;
        let ctx = context("leave", Some(queue.clone()), CommandOptions::new());

        LeaveHandler::new().handle(&ctx).await.unwrap();
        let second = LeaveHandler::new().handle(&ctx).await.unwrap();

        assert_eq!(second.kind, ResponseKind::Success);
        assert!(queue.is_deleted().await.unwrap());
    }

    #[tokio::test]
    async fn missing_session_is_an_unexpected_error() {
        let ctx = context("leave", None, CommandOptions::new());

        let err = LeaveHandler::new().handle(&ctx).await.unwrap_err();

        assert!(matches!(err, CommandError::SessionNotFound(_)));
    }

    #[test]
    fn validates_with_teardown_chain() {
        assert_eq!(
            LeaveHandler::new().validators().names(),
            ValidatorChain::teardown().names()
        );
    }
}
