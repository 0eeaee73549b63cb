// ABOUTME: In-process cache backend with LRU eviction and per-entry expiry
// ABOUTME: Used for rep counters when no Redis URL is configured
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{CacheConfig, CacheKey, CacheProvider};
use crate::errors::{AppError, AppResult};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

/// Capacity used when the configured maximum is zero
const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone)]
struct Slot {
    bytes: Vec<u8>,
    deadline: Instant,
}

impl Slot {
    fn fresh(bytes: Vec<u8>, ttl: Duration) -> Self {
        Self {
            bytes,
            deadline: Instant::now() + ttl,
        }
    }

    fn is_live(&self) -> bool {
        Instant::now() < self.deadline
    }
}

type Store = Arc<RwLock<LruCache<String, Slot>>>;

/// Periodic sweep of expired slots, aborted when the last cache clone drops
struct Sweeper(JoinHandle<()>);

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// LRU cache held in process memory
///
/// All reads and writes take the write lock, since an LRU lookup reorders
/// entries. That also makes `increment` atomic within the process.
#[derive(Clone)]
pub struct InMemoryCache {
    store: Store,
    _sweeper: Option<Arc<Sweeper>>,
}

impl InMemoryCache {
    fn build(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(FALLBACK_CAPACITY);
        let store: Store = Arc::new(RwLock::new(LruCache::new(capacity)));

        let sweeper = config.enable_background_cleanup.then(|| {
            let store = Arc::clone(&store);
            let period = config.cleanup_interval;
            Arc::new(Sweeper(tokio::spawn(async move {
                let mut ticker = interval(period);
                loop {
                    ticker.tick().await;
                    Self::sweep(&store).await;
                }
            })))
        });

        Self {
            store,
            _sweeper: sweeper,
        }
    }

    async fn sweep(store: &Store) {
        let mut guard = store.write().await;
        let stale: Vec<String> = guard
            .iter()
            .filter(|(_, slot)| !slot.is_live())
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            guard.pop(key);
        }
        drop(guard);

        if !stale.is_empty() {
            debug!(removed = stale.len(), "Swept expired cache entries");
        }
    }

    /// Live slot bytes for `key`, dropping the slot if it has expired
    fn live_bytes(store: &mut LruCache<String, Slot>, key: &str) -> Option<Vec<u8>> {
        match store.get(key) {
            Some(slot) if slot.is_live() => Some(slot.bytes.clone()),
            Some(_) => {
                store.pop(key);
                None
            }
            None => None,
        }
    }

    /// Number of unexpired entries
    pub async fn len(&self) -> usize {
        self.store
            .read()
            .await
            .iter()
            .filter(|(_, slot)| slot.is_live())
            .count()
    }

    /// True when every entry has expired or been removed
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl CacheProvider for InMemoryCache {
    async fn new(config: CacheConfig) -> AppResult<Self> {
        Ok(Self::build(&config))
    }

    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        let slot = Slot::fresh(serde_json::to_vec(value)?, ttl);
        self.store.write().await.push(key.to_string(), slot);
        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        let bytes = Self::live_bytes(&mut *self.store.write().await, &key.to_string());
        match bytes {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn increment(&self, key: &CacheKey, ttl: Duration) -> AppResult<u64> {
        let name = key.to_string();
        let mut store = self.store.write().await;

        let current = match Self::live_bytes(&mut store, &name) {
            Some(bytes) => serde_json::from_slice::<u64>(&bytes).map_err(|e| {
                AppError::storage(format!("Cache value at '{name}' is not a counter: {e}"))
            })?,
            None => 0,
        };

        let next = current.saturating_add(1);
        store.push(name, Slot::fresh(serde_json::to_vec(&next)?, ttl));
        drop(store);

        Ok(next)
    }

    async fn invalidate(&self, key: &CacheKey) -> AppResult<()> {
        self.store.write().await.pop(&key.to_string());
        Ok(())
    }

    async fn exists(&self, key: &CacheKey) -> AppResult<bool> {
        let mut store = self.store.write().await;
        let name = key.to_string();
        let live = match store.peek(&name).map(Slot::is_live) {
            Some(true) => true,
            Some(false) => {
                store.pop(&name);
                false
            }
            None => false,
        };
        drop(store);
        Ok(live)
    }

    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>> {
        // peek leaves LRU order untouched
        Ok(self
            .store
            .read()
            .await
            .peek(&key.to_string())
            .and_then(|slot| slot.deadline.checked_duration_since(Instant::now()))
            .filter(|remaining| !remaining.is_zero()))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.store.write().await.clear();
        Ok(())
    }
}
