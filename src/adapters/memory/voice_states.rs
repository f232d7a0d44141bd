//! In-memory voice state table.
//!
//! Stands in for the gateway's voice state cache in tests and in the console
//! harness.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{ChannelId, DomainError, GuildId, UserId};
use crate::ports::VoiceStateReader;

/// Voice channel membership keyed by guild.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoiceStates {
    members: Arc<RwLock<HashMap<(GuildId, UserId), ChannelId>>>,
    bot: Arc<RwLock<HashMap<GuildId, ChannelId>>>,
}

impl InMemoryVoiceStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves a member into a channel, or disconnects them with `None`.
    pub async fn set_member(&self, guild_id: GuildId, user_id: UserId, channel: Option<ChannelId>) {
        let mut members = self.members.write().await;
        match channel {
            Some(channel) => {
                members.insert((guild_id, user_id), channel);
            }
            None => {
                members.remove(&(guild_id, user_id));
            }
        }
    }

    /// Moves the bot into a channel, or disconnects it with `None`.
    pub async fn set_bot(&self, guild_id: GuildId, channel: Option<ChannelId>) {
        let mut bot = self.bot.write().await;
        match channel {
            Some(channel) => {
                bot.insert(guild_id, channel);
            }
            None => {
                bot.remove(&guild_id);
            }
        }
    }
}

#[async_trait]
impl VoiceStateReader for InMemoryVoiceStates {
    async fn member_channel(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<ChannelId>, DomainError> {
        Ok(self.members.read().await.get(&(guild_id, user_id)).copied())
    }

    async fn bot_channel(&self, guild_id: GuildId) -> Result<Option<ChannelId>, DomainError> {
        Ok(self.bot.read().await.get(&guild_id).copied())
    }
}
