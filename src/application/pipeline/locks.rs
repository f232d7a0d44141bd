//! Per-session command serialization.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::GuildId;

/// One async mutex per guild.
///
/// Holding the guard for a whole command makes commands targeting the same
/// session run one after another. Commands for different guilds never wait
/// on each other.
#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    locks: Arc<Mutex<HashMap<GuildId, Arc<Mutex<()>>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `guild_id`'s session.
    pub async fn acquire(&self, guild_id: GuildId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(guild_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Drops entries nobody is holding or waiting on and returns how many
    /// remain.
    pub async fn prune(&self) -> usize {
        let mut locks = self.locks.lock().await;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.len()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn guild(id: u64) -> GuildId {
        GuildId::new(id).unwrap()
    }

    #[tokio::test]
    async fn same_guild_waits_for_holder() {
        let locks = SessionLocks::new();
        let guard = locks.acquire(guild(1)).await;

        let contender = locks.clone();
        let waiting = tokio::spawn(async move {
            let _guard = contender.acquire(guild(1)).await;
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiting.is_finished());

        drop(guard);
        waiting.await.unwrap();
    }

    #[tokio::test]
    async fn different_guilds_do_not_block() {
        let locks = SessionLocks::new();
        let _first = locks.acquire(guild(1)).await;

        let second = tokio::time::timeout(Duration::from_millis(100), locks.acquire(guild(2))).await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn prune_drops_idle_entries() {
        let locks = SessionLocks::new();
        let held = locks.acquire(guild(1)).await;
        drop(locks.acquire(guild(2)).await);

        assert_eq!(locks.prune().await, 1);
        drop(held);
        assert_eq!(locks.prune().await, 0);
    }
}
