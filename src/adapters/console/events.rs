//! Wire format of the console transport.
//!
//! One JSON object per line, discriminated by `type`.

use serde::{Deserialize, Serialize};

use crate::application::pipeline::InboundCommand;
use crate::application::PlaybackEnd;
use crate::domain::foundation::{ChannelId, CorrelationId, GuildId, UserId};
use crate::domain::queue::{RepeatMode, Track};
use crate::domain::response::Response;

/// An input line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleEvent {
    /// A member or the bot joined, moved or left a voice channel.
    ///
    /// Without `user_id` the event describes the bot.
    VoiceState {
        guild_id: GuildId,
        #[serde(default)]
        user_id: Option<UserId>,
        #[serde(default)]
        channel_id: Option<ChannelId>,
    },

    /// The engine joined a channel and started a queue.
    OpenSession {
        guild_id: GuildId,
        channel_id: ChannelId,
        #[serde(default)]
        tracks: Vec<Track>,
        #[serde(default)]
        repeat_mode: RepeatMode,
    },

    /// The engine ran out of things to play.
    PlaybackFinished { guild_id: GuildId },

    Command(InboundCommand),
}

/// An output line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleOutput {
    Response {
        command: String,
        guild_id: GuildId,
        response: Response,
    },
    SessionOpened {
        guild_id: GuildId,
        channel_id: ChannelId,
    },
    PlaybackFinished {
        guild_id: GuildId,
        result: PlaybackResult,
    },
    Error {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        correlation_id: Option<CorrelationId>,
    },
}

/// Serializable mirror of `PlaybackEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackResult {
    NoSession,
    Continued,
    TornDown,
}

impl From<PlaybackEnd> for PlaybackResult {
    fn from(end: PlaybackEnd) -> Self {
        match end {
            PlaybackEnd::NoSession => PlaybackResult::NoSession,
            PlaybackEnd::Continued => PlaybackResult::Continued,
            PlaybackEnd::TornDown => PlaybackResult::TornDown,
        }
    }
}
