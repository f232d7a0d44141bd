//! Precondition validators.
//!
//! Each validator is a read-only check over the live voice state and session
//! registry. Expected rejections come back as `Validation::Fail`; only read
//! failures of the underlying ports are returned as errors.

use async_trait::async_trait;
use std::fmt;
use tracing::debug;

use super::{CorrelationContext, Outcome};
use crate::domain::foundation::DomainError;
use crate::ports::{SessionRegistry, VoiceStateReader};

/// Internal reason code of a rejected precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    NotInVoiceChannel,
    NotInSameVoiceChannel,
    QueueMissing,
}

impl RejectReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::NotInVoiceChannel => "NOT_IN_VOICE_CHANNEL",
            RejectReason::NotInSameVoiceChannel => "NOT_IN_SAME_VOICE_CHANNEL",
            RejectReason::QueueMissing => "QUEUE_MISSING",
        }
    }

    /// Stable message shown to the caller.
    pub fn user_message(&self) -> &'static str {
        match self {
            RejectReason::NotInVoiceChannel => {
                "You need to be in a voice channel to perform this action."
            }
            RejectReason::NotInSameVoiceChannel => {
                "You need to be in the same voice channel as me to perform this action."
            }
            RejectReason::QueueMissing => {
                "There are no tracks in the queue and nothing currently playing."
            }
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of one precondition check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Pass,
    Fail(RejectReason),
}

impl Validation {
    pub fn is_pass(&self) -> bool {
        matches!(self, Validation::Pass)
    }
}

impl From<RejectReason> for Outcome {
    fn from(reason: RejectReason) -> Self {
        Outcome::warning(reason.user_message())
    }
}

/// What a validator may read.
pub struct ValidationScope<'a> {
    pub context: &'a CorrelationContext,
    pub voice: &'a dyn VoiceStateReader,
    pub registry: &'a dyn SessionRegistry,
}

/// A read-only precondition over the live session state.
///
/// Implementations must not mutate state and must handle an absent session.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Name used in log lines.
    fn name(&self) -> &'static str;

    async fn check(&self, scope: &ValidationScope<'_>) -> Result<Validation, DomainError>;
}

/// The caller is connected to some voice channel in the guild.
pub struct InVoiceChannel;

#[async_trait]
impl Validator for InVoiceChannel {
    fn name(&self) -> &'static str {
        "in_voice_channel"
    }

    async fn check(&self, scope: &ValidationScope<'_>) -> Result<Validation, DomainError> {
        let ctx = scope.context;
        let channel = scope
            .voice
            .member_channel(ctx.guild_id(), ctx.caller().user_id)
            .await?;

        if channel.is_none() {
            debug!("Caller is not in a voice channel.");
            return Ok(Validation::Fail(RejectReason::NotInVoiceChannel));
        }
        Ok(Validation::Pass)
    }
}

/// The caller shares the bot's voice channel. Passes when the bot is not
/// connected anywhere in the guild.
pub struct SameVoiceChannel;

#[async_trait]
impl Validator for SameVoiceChannel {
    fn name(&self) -> &'static str {
        "same_voice_channel"
    }

    async fn check(&self, scope: &ValidationScope<'_>) -> Result<Validation, DomainError> {
        let ctx = scope.context;
        let Some(bot_channel) = scope.voice.bot_channel(ctx.guild_id()).await? else {
            return Ok(Validation::Pass);
        };
        let caller_channel = scope
            .voice
            .member_channel(ctx.guild_id(), ctx.caller().user_id)
            .await?;

        if caller_channel != Some(bot_channel) {
            debug!(
                bot_channel = %bot_channel,
                caller_channel = ?caller_channel.map(|c| c.get()),
                "Caller is not in the same voice channel as the bot."
            );
            return Ok(Validation::Fail(RejectReason::NotInSameVoiceChannel));
        }
        Ok(Validation::Pass)
    }
}

/// A live, non-deleted queue is registered for the guild.
pub struct QueueExists;

#[async_trait]
impl Validator for QueueExists {
    fn name(&self) -> &'static str {
        "queue_exists"
    }

    async fn check(&self, scope: &ValidationScope<'_>) -> Result<Validation, DomainError> {
        let guild_id = scope.context.guild_id();
        let Some(queue) = scope.registry.get(guild_id).await? else {
            debug!("No queue registered for guild.");
            return Ok(Validation::Fail(RejectReason::QueueMissing));
        };

        if queue.is_deleted().await? {
            debug!("Queue for guild was already deleted.");
            return Ok(Validation::Fail(RejectReason::QueueMissing));
        }
        Ok(Validation::Pass)
    }
}

/// A queue is registered for the guild, live or already torn down.
///
/// Teardown uses this instead of `QueueExists` so a repeated teardown of the
/// same session is answered like the first one.
pub struct QueueRegistered;

#[async_trait]
impl Validator for QueueRegistered {
    fn name(&self) -> &'static str {
        "queue_registered"
    }

    async fn check(&self, scope: &ValidationScope<'_>) -> Result<Validation, DomainError> {
        if scope.registry.get(scope.context.guild_id()).await?.is_none() {
            debug!("No queue registered for guild.");
            return Ok(Validation::Fail(RejectReason::QueueMissing));
        }
        Ok(Validation::Pass)
    }
}
