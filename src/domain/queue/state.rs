//! QueueState - the mutable data owned by one guild session.
//!
//! # Invariants
//!
//! - Pending tracks are FIFO
//! - Exactly one repeat mode is active
//! - Once deleted, every mutation fails with `QueueError::Deleted`
//! - Deleting twice is a no-op

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{QueueError, RepeatMode, Track};
use crate::domain::foundation::{ChannelId, GuildId, StateMachine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueState {
    guild_id: GuildId,

    /// Voice channel the bot is connected to for this session.
    channel_id: ChannelId,

    tracks: VecDeque<Track>,

    repeat_mode: RepeatMode,

    deleted: bool,
}

impl QueueState {
    /// Creates an empty, live queue with repeat disabled.
    pub fn new(guild_id: GuildId, channel_id: ChannelId) -> Self {
        Self {
            guild_id,
            channel_id,
            tracks: VecDeque::new(),
            repeat_mode: RepeatMode::default(),
            deleted: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Pending tracks in play order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.tracks.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Switches the repeat mode.
    ///
    /// # Errors
    ///
    /// - `Deleted` if the queue was torn down
    /// - `InvalidTransition` if `target` is already active
    pub fn set_repeat_mode(&mut self, target: RepeatMode) -> Result<(), QueueError> {
        self.ensure_live()?;
        self.repeat_mode = self.repeat_mode.transition_to(target)?;
        Ok(())
    }

    /// Appends a track to the back of the queue.
    ///
    /// # Errors
    ///
    /// - `Deleted` if the queue was torn down
    pub fn enqueue(&mut self, track: Track) -> Result<(), QueueError> {
        self.ensure_live()?;
        self.tracks.push_back(track);
        Ok(())
    }

    /// Takes the next track to play.
    ///
    /// # Errors
    ///
    /// - `Deleted` if the queue was torn down
    pub fn next_track(&mut self) -> Result<Option<Track>, QueueError> {
        self.ensure_live()?;
        Ok(self.tracks.pop_front())
    }

    /// Marks the queue deleted and drops pending tracks.
    ///
    /// Returns `false` when the queue was already deleted.
    pub fn delete(&mut self) -> bool {
        if self.deleted {
            return false;
        }
        self.deleted = true;
        self.tracks.clear();
        true
    }

    fn ensure_live(&self) -> Result<(), QueueError> {
        if self.deleted {
            Err(QueueError::Deleted(self.guild_id))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn queue() -> QueueState {
        QueueState::new(GuildId::new(1).unwrap(), ChannelId::new(10).unwrap())
    }

    fn track(title: &str) -> Track {
        Track::new(title, format!("https://tracks.test/{}", title), UserId::new(5).unwrap())
            .unwrap()
    }

    #[test]
    fn new_queue_is_live_and_empty() {
        let queue = queue();
        assert!(!queue.is_deleted());
        assert_eq!(queue.pending_count(), 0);
        assert_eq!(queue.repeat_mode(), RepeatMode::Disabled);
    }

    #[test]
    fn tracks_are_fifo() {
        let mut queue = queue();
        queue.enqueue(track("first")).unwrap();
        queue.enqueue(track("second")).unwrap();

        assert_eq!(queue.next_track().unwrap().unwrap().title(), "first");
        assert_eq!(queue.next_track().unwrap().unwrap().title(), "second");
        assert_eq!(queue.next_track().unwrap(), None);
    }

    #[test]
    fn set_repeat_mode_applies_new_mode() {
        let mut queue = queue();
        queue.set_repeat_mode(RepeatMode::QueueRepeat).unwrap();
        assert_eq!(queue.repeat_mode(), RepeatMode::QueueRepeat);
    }

    #[test]
    fn set_repeat_mode_to_current_mode_is_rejected() {
        let mut queue = queue();
        let result = queue.set_repeat_mode(RepeatMode::Disabled);
        assert!(matches!(result, Err(QueueError::InvalidTransition(_))));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut queue = queue();
        queue.enqueue(track("only")).unwrap();

        assert!(queue.delete());
        assert!(!queue.delete());
        assert!(queue.is_deleted());
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn deleted_queue_rejects_mutations() {
        let mut queue = queue();
        queue.delete();

        assert!(matches!(
            queue.set_repeat_mode(RepeatMode::Autoplay),
            Err(QueueError::Deleted(_))
        ));
        assert!(matches!(queue.enqueue(track("late")), Err(QueueError::Deleted(_))));
        assert!(matches!(queue.next_track(), Err(QueueError::Deleted(_))));
    }
}
