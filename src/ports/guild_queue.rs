//! GuildQueue port - the live playback queue of one guild.
//!
//! The queue is owned by the playback engine, which lives in a different
//! failure domain than the pipeline. Mutations return as soon as the engine
//! accepted the call; their effect must be observed by reading state back.

use async_trait::async_trait;

use crate::domain::foundation::{ChannelId, DomainError, GuildId};
use crate::domain::queue::{RepeatMode, Track};

/// Handle to the live queue of one guild session.
///
/// Implementations must ensure:
/// - Reads reflect the engine's current state, never a cached snapshot
/// - `delete` is idempotent
/// - Mutations on a deleted queue fail with `SessionNotFound`
#[async_trait]
pub trait GuildQueue: Send + Sync {
    /// The guild this queue belongs to.
    fn guild_id(&self) -> GuildId;

    /// Voice channel the engine is playing into.
    async fn channel_id(&self) -> Result<ChannelId, DomainError>;

    /// Current repeat mode.
    async fn repeat_mode(&self) -> Result<RepeatMode, DomainError>;

    /// Ask the engine to switch the repeat mode.
    ///
    /// Completion does not imply the mode changed; read it back.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the queue was deleted
    /// - `PlaybackEngineError` if the engine refused the call
    async fn set_repeat_mode(&self, target: RepeatMode) -> Result<(), DomainError>;

    /// Number of tracks waiting to be played.
    async fn pending_count(&self) -> Result<usize, DomainError>;

    /// Start the next pending track, returning it. `None` when nothing is
    /// pending.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the queue was deleted
    async fn advance(&self) -> Result<Option<Track>, DomainError>;

    /// Whether the queue has been torn down.
    async fn is_deleted(&self) -> Result<bool, DomainError>;

    /// Tear the queue down and disconnect from voice.
    ///
    /// Deleting an already-deleted queue is a no-op.
    async fn delete(&self) -> Result<(), DomainError>;
}
