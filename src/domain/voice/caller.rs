//! Caller - the user who invoked a command.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, UserId};

/// Identity of the invoking user as delivered by the transport.
///
/// `voice_channel` is what the transport saw when the command arrived.
/// Validators re-read the live value through `VoiceStateReader` instead of
/// trusting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: UserId,

    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_channel: Option<ChannelId>,
}

impl Caller {
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            avatar_url: None,
            voice_channel: None,
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn in_channel(mut self, channel: ChannelId) -> Self {
        self.voice_channel = Some(channel);
        self
    }
}
