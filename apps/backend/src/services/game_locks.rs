//! Per-game mutual exclusion for lifecycle transitions and draws.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<i64, Arc<Mutex<()>>>;

/// Registry of one async mutex per game id. Games never contend with each other.
///
/// Entries only live while someone holds or waits for a game's lock, so ids
/// that never resolve to a game leave nothing behind.
#[derive(Default)]
pub struct GameLocks {
    locks: Arc<LockMap>,
}

/// Exclusive access to one game. Dropping it releases the mutex and removes
/// the registry entry once nobody else is queued on it.
pub struct GameLockGuard {
    game_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockMap>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `game_id`. The map shard guard is released
    /// before awaiting.
    pub async fn acquire(&self, game_id: i64) -> GameLockGuard {
        let lock = self.locks.entry(game_id).or_default().clone();
        let guard = lock.lock_owned().await;
        GameLockGuard {
            game_id,
            guard: Some(guard),
            locks: Arc::clone(&self.locks),
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl Drop for GameLockGuard {
    fn drop(&mut self) {
        // Release first so only the map and queued waiters still count.
        drop(self.guard.take());
        // remove_if holds the shard write lock, so a concurrent acquire either
        // cloned the Arc already (count > 1) or inserts a fresh entry afterwards.
        self.locks
            .remove_if(&self.game_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
