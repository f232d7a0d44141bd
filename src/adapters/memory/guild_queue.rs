//! In-memory guild queue.
//!
//! Wraps a `QueueState` behind an async lock and plays the part of the
//! playback engine. Faults can be injected to exercise the pipeline's
//! verify-after-mutate path.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::InMemoryVoiceStates;
use crate::domain::foundation::{ChannelId, DomainError, GuildId};
use crate::domain::queue::{QueueState, RepeatMode, Track};
use crate::ports::GuildQueue;

/// Misbehavior the fake engine can be told to exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineFault {
    #[default]
    None,
    /// Accept repeat mode changes but never apply them.
    IgnoreRepeatMode,
    /// Apply a different mode than the one requested.
    ApplyRepeatMode(RepeatMode),
    /// Refuse repeat mode changes with an engine error.
    RejectRepeatMode,
}

/// Queue of one guild, held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryGuildQueue {
    guild_id: GuildId,
    state: Arc<RwLock<QueueState>>,
    fault: Arc<RwLock<EngineFault>>,
    voice: Option<InMemoryVoiceStates>,
}

impl InMemoryGuildQueue {
    /// Creates a live, empty queue playing into `channel_id`.
    pub fn new(guild_id: GuildId, channel_id: ChannelId) -> Self {
        Self {
            guild_id,
            state: Arc::new(RwLock::new(QueueState::new(guild_id, channel_id))),
            fault: Arc::new(RwLock::new(EngineFault::None)),
            voice: None,
        }
    }

    /// Disconnect the bot in this voice table when the queue is deleted.
    pub fn with_voice_states(mut self, voice: InMemoryVoiceStates) -> Self {
        self.voice = Some(voice);
        self
    }

    pub async fn inject_fault(&self, fault: EngineFault) {
        *self.fault.write().await = fault;
    }

    /// Appends a track.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the queue was deleted
    pub async fn enqueue(&self, track: Track) -> Result<(), DomainError> {
        self.state.write().await.enqueue(track)?;
        Ok(())
    }
}

#[async_trait]
impl GuildQueue for InMemoryGuildQueue {
    fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    async fn channel_id(&self) -> Result<ChannelId, DomainError> {
        Ok(self.state.read().await.channel_id())
    }

    async fn repeat_mode(&self) -> Result<RepeatMode, DomainError> {
        Ok(self.state.read().await.repeat_mode())
    }

    async fn set_repeat_mode(&self, target: RepeatMode) -> Result<(), DomainError> {
        let fault = *self.fault.read().await;
        let mut state = self.state.write().await;
        match fault {
            EngineFault::None => state.set_repeat_mode(target)?,
            EngineFault::IgnoreRepeatMode => {
                if state.is_deleted() {
                    state.set_repeat_mode(target)?;
                }
            }
            EngineFault::ApplyRepeatMode(actual) => {
                if actual != state.repeat_mode() {
                    state.set_repeat_mode(actual)?;
                }
            }
            EngineFault::RejectRepeatMode => {
                return Err(DomainError::engine("engine refused repeat mode change")
                    .with_detail("guild_id", self.guild_id.to_string()));
            }
        }
        Ok(())
    }

    async fn pending_count(&self) -> Result<usize, DomainError> {
        Ok(self.state.read().await.pending_count())
    }

    async fn advance(&self) -> Result<Option<Track>, DomainError> {
        Ok(self.state.write().await.next_track()?)
    }

    async fn is_deleted(&self) -> Result<bool, DomainError> {
        Ok(self.state.read().await.is_deleted())
    }

    async fn delete(&self) -> Result<(), DomainError> {
        let deleted_now = self.state.write().await.delete();
        if deleted_now {
            if let Some(voice) = &self.voice {
                voice.set_bot(self.guild_id, None).await;
            }
        }
        Ok(())
    }
}
