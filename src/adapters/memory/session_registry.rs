//! In-memory session registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GuildId};
use crate::ports::{GuildQueue, SessionRegistry};

/// Guild → queue map held in memory.
#[derive(Clone, Default)]
pub struct InMemorySessionRegistry {
    sessions: Arc<RwLock<HashMap<GuildId, Arc<dyn GuildQueue>>>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn get(&self, guild_id: GuildId) -> Result<Option<Arc<dyn GuildQueue>>, DomainError> {
        Ok(self.sessions.read().await.get(&guild_id).cloned())
    }

    async fn put(&self, guild_id: GuildId, queue: Arc<dyn GuildQueue>) -> Result<(), DomainError> {
        self.sessions.write().await.insert(guild_id, queue);
        Ok(())
    }

    async fn remove(&self, guild_id: GuildId) -> Result<Option<Arc<dyn GuildQueue>>, DomainError> {
        Ok(self.sessions.write().await.remove(&guild_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryGuildQueue;
    use crate::domain::foundation::ChannelId;

    fn guild() -> GuildId {
        GuildId::new(1).unwrap()
    }

    fn queue() -> Arc<dyn GuildQueue> {
        Arc::new(InMemoryGuildQueue::new(guild(), ChannelId::new(10).unwrap()))
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_guild() {
        let registry = InMemorySessionRegistry::new();
        assert!(registry.get(guild()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_then_get_returns_same_queue() {
        let registry = InMemorySessionRegistry::new();
        let queue = queue();

        registry.put(guild(), queue.clone()).await.unwrap();

        let found = registry.get(guild()).await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&found, &queue));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let registry = InMemorySessionRegistry::new();
        registry.put(guild(), queue()).await.unwrap();

        assert!(registry.remove(guild()).await.unwrap().is_some());
        assert!(registry.remove(guild()).await.unwrap().is_none());
        assert_eq!(registry.session_count().await, 0);
    }
}
