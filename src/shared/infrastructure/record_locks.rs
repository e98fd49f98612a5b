// Per-key async locks.
//
// Purpose
// - Serialise read, check and write sequences that target the same key.
//
// Responsibilities
// - Hand out one owned guard per key at a time.
// - Never block callers working on different keys.
// - Forget keys once no task holds or waits on them.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub struct KeyedLocks<K> {
    inner: Mutex<HashMap<K, Arc<Mutex<()>>>>,
}

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash + Clone + Send,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone + Send,
{
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    pub async fn acquire(&self, key: K) -> OwnedMutexGuard<()> {
        let lock = {
            let mut guard = self.inner.lock().await;
            // only the map still references an idle lock
            guard.retain(|_, lock| Arc::strong_count(lock) > 1);
            guard
                .entry(key)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    pub async fn tracked_keys(&self) -> usize {
        self.inner.lock().await.len()
    }
}

#[cfg(test)]
mod keyed_locks_tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;
    use tokio::time::timeout;

    #[rstest]
    #[tokio::test]
    async fn it_should_block_a_second_holder_of_the_same_key() {
        let locks = KeyedLocks::<u64>::new();
        let _held = locks.acquire(1).await;
        let second = timeout(Duration::from_millis(20), locks.acquire(1)).await;
        assert!(second.is_err(), "second acquire should still be waiting");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_block_different_keys() {
        let locks = KeyedLocks::<u64>::new();
        let _held = locks.acquire(1).await;
        let other = timeout(Duration::from_millis(20), locks.acquire(2)).await;
        assert!(other.is_ok(), "a different key must be available");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_release_the_key_when_the_guard_drops() {
        let locks = KeyedLocks::<u64>::new();
        {
            let _held = locks.acquire(1).await;
        }
        let again = timeout(Duration::from_millis(20), locks.acquire(1)).await;
        assert!(again.is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_forget_idle_keys() {
        let locks = KeyedLocks::<u64>::new();
        for key in 0..10 {
            let _guard = locks.acquire(key).await;
        }
        let _last = locks.acquire(99).await;
        assert_eq!(locks.tracked_keys().await, 1);
    }
}
