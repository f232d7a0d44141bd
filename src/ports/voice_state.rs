//! VoiceStateReader port - who is connected to which voice channel.

use async_trait::async_trait;

use crate::domain::foundation::{ChannelId, DomainError, GuildId, UserId};

/// Read access to the gateway's voice state cache.
#[async_trait]
pub trait VoiceStateReader: Send + Sync {
    /// Voice channel a guild member is connected to, if any.
    async fn member_channel(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<ChannelId>, DomainError>;

    /// Voice channel the bot itself is connected to in a guild, if any.
    async fn bot_channel(&self, guild_id: GuildId) -> Result<Option<ChannelId>, DomainError>;
}
