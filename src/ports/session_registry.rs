//! SessionRegistry port - maps a guild to its live queue.
//!
//! Injected into the pipeline instead of being reached through a global
//! lookup, so tests can hand the pipeline a fake registry.

use std::sync::Arc;

use async_trait::async_trait;

use super::GuildQueue;
use crate::domain::foundation::{DomainError, GuildId};

/// Registry of live guild sessions.
///
/// At most one queue is registered per guild.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Look up the live queue for a guild.
    ///
    /// Side-effect free. Returns `None` if the guild has no session.
    async fn get(&self, guild_id: GuildId) -> Result<Option<Arc<dyn GuildQueue>>, DomainError>;

    /// Register a queue for a guild, replacing any previous entry.
    async fn put(&self, guild_id: GuildId, queue: Arc<dyn GuildQueue>) -> Result<(), DomainError>;

    /// Remove a guild's queue, returning it if one was registered.
    ///
    /// Removing an absent guild is a no-op.
    async fn remove(&self, guild_id: GuildId) -> Result<Option<Arc<dyn GuildQueue>>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_registry_is_object_safe() {
        fn _accepts_dyn(_registry: &dyn SessionRegistry) {}
    }
}
