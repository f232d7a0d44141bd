//! Ordered validator chain.

use std::sync::Arc;

use tracing::debug;

use super::validators::{
    InVoiceChannel, QueueExists, QueueRegistered, RejectReason, SameVoiceChannel, Validation,
    ValidationScope, Validator,
};
use crate::domain::foundation::DomainError;

/// Validators run in declaration order; the first failure stops the chain.
///
/// The order is observable: it decides which message a caller sees when more
/// than one precondition is violated.
#[derive(Clone, Default)]
pub struct ValidatorChain {
    validators: Vec<Arc<dyn Validator>>,
}

impl ValidatorChain {
    pub fn new(validators: Vec<Arc<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// In voice channel, then same voice channel, then queue exists.
    pub fn standard() -> Self {
        Self::new(vec![
            Arc::new(InVoiceChannel),
            Arc::new(SameVoiceChannel),
            Arc::new(QueueExists),
        ])
    }

    /// Like `standard`, but a torn-down queue still counts as present.
    pub fn teardown() -> Self {
        Self::new(vec![
            Arc::new(InVoiceChannel),
            Arc::new(SameVoiceChannel),
            Arc::new(QueueRegistered),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Runs the chain against live state.
    ///
    /// Returns the first rejection, or `None` when every validator passed.
    ///
    /// # Errors
    ///
    /// Propagates a port read failure from any validator.
    pub async fn run(
        &self,
        scope: &ValidationScope<'_>,
    ) -> Result<Option<RejectReason>, DomainError> {
        for validator in &self.validators {
            if let Validation::Fail(reason) = validator.check(scope).await? {
                debug!(
                    validator = validator.name(),
                    reason = reason.code(),
                    "Validation failed."
                );
                return Ok(Some(reason));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemorySessionRegistry, InMemoryVoiceStates};
    use crate::application::pipeline::{CommandOptions, CorrelationContext};
    use crate::domain::foundation::{ChannelId, CommandMetadata, GuildId, UserId};
    use crate::domain::voice::Caller;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and always passes.
    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl Validator for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn check(&self, _scope: &ValidationScope<'_>) -> Result<Validation, DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Validation::Pass)
        }
    }

    struct Broken;

    #[async_trait]
    impl Validator for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn check(&self, _scope: &ValidationScope<'_>) -> Result<Validation, DomainError> {
            Err(DomainError::engine("voice cache unavailable"))
        }
    }

    fn context() -> CorrelationContext {
        CorrelationContext::new(
            CommandMetadata::test_fixture("leave"),
            Caller::new(UserId::new(100).unwrap(), "dj"),
            None,
            CommandOptions::new(),
        )
    }

    async fn run(chain: &ValidatorChain, voice: &InMemoryVoiceStates) -> Option<RejectReason> {
        let registry = InMemorySessionRegistry::new();
        let ctx = context();
        let scope = ValidationScope {
            context: &ctx,
            voice,
            registry: &registry,
        };
        chain.run(&scope).await.unwrap()
    }

    #[tokio::test]
    async fn first_failure_wins() {
        // Caller disconnected and no queue: both checks would fail.
        let voice = InMemoryVoiceStates::new();

        let reason = run(&ValidatorChain::standard(), &voice).await;

        assert_eq!(reason, Some(RejectReason::NotInVoiceChannel));
    }

    #[tokio::test]
    async fn reversing_order_changes_the_reported_failure() {
        let voice = InMemoryVoiceStates::new();
        let reversed = ValidatorChain::new(vec![
            Arc::new(QueueExists),
            Arc::new(SameVoiceChannel),
            Arc::new(InVoiceChannel),
        ]);

        let reason = run(&reversed, &voice).await;

        assert_eq!(reason, Some(RejectReason::QueueMissing));
    }

    #[tokio::test]
    async fn later_validators_are_not_evaluated_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = ValidatorChain::new(vec![
            Arc::new(InVoiceChannel),
            Arc::new(Counting(calls.clone())),
        ]);

        let reason = run(&chain, &InMemoryVoiceStates::new()).await;

        assert_eq!(reason, Some(RejectReason::NotInVoiceChannel));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn all_pass_yields_none() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = ValidatorChain::new(vec![
            Arc::new(Counting(calls.clone())),
            Arc::new(Counting(calls.clone())),
        ]);

        assert_eq!(run(&chain, &InMemoryVoiceStates::new()).await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_chain_passes() {
        let chain = ValidatorChain::default();
        assert!(chain.is_empty());
        assert_eq!(run(&chain, &InMemoryVoiceStates::new()).await, None);
    }

    #[tokio::test]
    async fn second_validator_reports_when_first_passes() {
        let voice = InMemoryVoiceStates::new();
        let guild = GuildId::new(1).unwrap();
        voice
            .set_member(guild, UserId::new(100).unwrap(), Some(ChannelId::new(10).unwrap()))
            .await;
        voice.set_bot(guild, Some(ChannelId::new(20).unwrap())).await;

        let reason = run(&ValidatorChain::standard(), &voice).await;

        assert_eq!(reason, Some(RejectReason::NotInSameVoiceChannel));
    }

    #[tokio::test]
    async fn read_failure_propagates() {
        let chain = ValidatorChain::new(vec![Arc::new(Broken)]);
        let voice = InMemoryVoiceStates::new();
        let registry = InMemorySessionRegistry::new();
        let ctx = context();
        let scope = ValidationScope {
            context: &ctx,
            voice: &voice,
            registry: &registry,
        };

        assert!(chain.run(&scope).await.is_err());
    }

    #[test]
    fn standard_order_is_fixed() {
        assert_eq!(
            ValidatorChain::standard().names(),
            vec!["in_voice_channel", "same_voice_channel", "queue_exists"]
        );
        assert_eq!(
            ValidatorChain::teardown().names(),
            vec!["in_voice_channel", "same_voice_channel", "queue_registered"]
        );
    }
}
