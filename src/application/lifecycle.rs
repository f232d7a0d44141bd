//! SessionLifecycle - engine-side session open and end-of-playback teardown.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use crate::application::pipeline::SessionLocks;
use crate::application::queue_machine;
use crate::domain::foundation::{DomainError, ErrorCode, GuildId};
use crate::ports::{GuildQueue, SessionRegistry};

/// What happened when the engine reported the end of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEnd {
    /// No live session for the guild.
    NoSession,
    /// Tracks are pending or the repeat mode keeps the session playing.
    Continued,
    /// Queue deleted and unregistered.
    TornDown,
}

/// Opens sessions and reacts to playback ending.
///
/// Shares the pipeline's session locks so engine events never interleave
/// with a command on the same guild.
pub struct SessionLifecycle {
    registry: Arc<dyn SessionRegistry>,
    locks: Option<SessionLocks>,
}

impl SessionLifecycle {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self {
            registry,
            locks: None,
        }
    }

    pub fn with_session_locks(mut self, locks: SessionLocks) -> Self {
        self.locks = Some(locks);
        self
    }

    /// Registers a freshly joined queue.
    ///
    /// A deleted queue still registered for the guild is replaced.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyOpen` if the guild already has a live session
    pub async fn open(&self, queue: Arc<dyn GuildQueue>) -> Result<(), DomainError> {
        let span = info_span!("session_open", guild_id = %queue.guild_id());
        self.open_locked(queue).instrument(span).await
    }

    async fn open_locked(&self, queue: Arc<dyn GuildQueue>) -> Result<(), DomainError> {
        let guild_id = queue.guild_id();
        let _guard = self.lock(guild_id).await;

        if let Some(existing) = self.registry.get(guild_id).await? {
            if !existing.is_deleted().await? {
                return Err(DomainError::new(
                    ErrorCode::SessionAlreadyOpen,
                    "Guild already has a live session",
                )
                .with_detail("guild_id", guild_id.to_string()));
            }
        }

        let channel_id = queue.channel_id().await?;
        self.registry.put(guild_id, queue).await?;
        info!(channel_id = %channel_id, "Session opened.");
        Ok(())
    }

    /// Called by the engine when the current track ended and nothing
    /// replaced it.
    ///
    /// # Errors
    ///
    /// Propagates registry and queue failures.
    pub async fn on_playback_finished(&self, guild_id: GuildId) -> Result<PlaybackEnd, DomainError> {
        let span = info_span!("playback_finished", guild_id = %guild_id);
        self.finish_locked(guild_id).instrument(span).await
    }

    async fn finish_locked(&self, guild_id: GuildId) -> Result<PlaybackEnd, DomainError> {
        let _guard = self.lock(guild_id).await;

        let Some(queue) = self.registry.get(guild_id).await? else {
            return Ok(PlaybackEnd::NoSession);
        };
        if queue.is_deleted().await? {
            self.registry.remove(guild_id).await?;
            return Ok(PlaybackEnd::NoSession);
        }

        if queue.pending_count().await? > 0 {
            if let Some(track) = queue.advance().await? {
                debug!(track = %track.title(), "Advanced to the next track.");
                return Ok(PlaybackEnd::Continued);
            }
        }
        let mode = queue.repeat_mode().await?;
        if mode.continues_playback() {
            debug!(mode = %mode, "Repeat mode keeps playback going.");
            return Ok(PlaybackEnd::Continued);
        }

        queue_machine::delete(queue.as_ref()).await?;
        self.registry.remove(guild_id).await?;
        info!("Queue finished, session torn down.");
        Ok(PlaybackEnd::TornDown)
    }

    async fn lock(&self, guild_id: GuildId) -> Option<tokio::sync::OwnedMutexGuard<()>> {
        match &self.locks {
            Some(locks) => Some(locks.acquire(guild_id).await),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryGuildQueue, InMemorySessionRegistry};
    use crate::domain::foundation::{ChannelId, UserId};
    use crate::domain::queue::{RepeatMode, Track};

    fn guild() -> GuildId {
        GuildId::new(1).unwrap()
    }

    fn queue() -> Arc<InMemoryGuildQueue> {
        Arc::new(InMemoryGuildQueue::new(guild(), ChannelId::new(10).unwrap()))
    }

    fn lifecycle(registry: &InMemorySessionRegistry) -> SessionLifecycle {
        SessionLifecycle::new(Arc::new(registry.clone())).with_session_locks(SessionLocks::new())
    }

    #[tokio::test]
    async fn open_registers_queue() {
        let registry = InMemorySessionRegistry::new();

        lifecycle(&registry).open(queue()).await.unwrap();

        assert_eq!(registry.session_count().await, 1);
    }

    #[tokio::test]
    async fn open_rejects_second_live_session() {
        let registry = InMemorySessionRegistry::new();
        let lifecycle = lifecycle(&registry);
        lifecycle.open(queue()).await.unwrap();

        let err = lifecycle.open(queue()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionAlreadyOpen);
    }

    #[tokio::test]
    async fn open_replaces_deleted_session() {
        let registry = InMemorySessionRegistry::new();
        let lifecycle = lifecycle(&registry);
        let old = queue();
        lifecycle.open(old.clone()).await.unwrap();
        old.delete().await.unwrap();

        lifecycle.open(queue()).await.unwrap();

        let current = registry.get(guild()).await.unwrap().unwrap();
        assert!(!current.is_deleted().await.unwrap());
    }

    #[tokio::test]
    async fn finished_without_session() {
        let registry = InMemorySessionRegistry::new();

        let end = lifecycle(&registry).on_playback_finished(guild()).await.unwrap();

        assert_eq!(end, PlaybackEnd::NoSession);
    }

    #[tokio::test]
    async fn finished_with_repeat_enabled_continues() {
        let registry = InMemorySessionRegistry::new();
        let queue = queue();
        queue.set_repeat_mode(RepeatMode::QueueRepeat).await.unwrap();
        registry.put(guild(), queue.clone()).await.unwrap();

        let end = lifecycle(&registry).on_playback_finished(guild()).await.unwrap();

        assert_eq!(end, PlaybackEnd::Continued);
        assert!(!queue.is_deleted().await.unwrap());
    }

    #[tokio::test]
    async fn finished_with_pending_tracks_continues() {
        let registry = InMemorySessionRegistry::new();
        let queue = queue();
        let track = Track::new("next", "https://tracks.test/next", UserId::new(5).unwrap()).unwrap();
        queue.enqueue(track).await.unwrap();
        registry.put(guild(), queue.clone()).await.unwrap();

        let end = lifecycle(&registry).on_playback_finished(guild()).await.unwrap();

        assert_eq!(end, PlaybackEnd::Continued);
        assert_eq!(queue.pending_count().await.unwrap(), 0);

        let end = lifecycle(&registry).on_playback_finished(guild()).await.unwrap();
        assert_eq!(end, PlaybackEnd::TornDown);
    }

    #[tokio::test]
    async fn finished_with_empty_queue_and_no_repeat_tears_down() {
        let registry = InMemorySessionRegistry::new();
        let queue = queue();
        registry.put(guild(), queue.clone()).await.unwrap();

        let end = lifecycle(&registry).on_playback_finished(guild()).await.unwrap();

        assert_eq!(end, PlaybackEnd::TornDown);
        assert!(queue.is_deleted().await.unwrap());
        assert_eq!(registry.session_count().await, 0);
    }
}
