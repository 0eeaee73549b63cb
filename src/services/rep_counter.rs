// ABOUTME: Rep tracker backed by the shared cache
// ABOUTME: One expiring counter per user and exercise, incremented atomically per frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::{Cache, CacheKey};
use crate::errors::AppResult;
use async_trait::async_trait;
use coach_intelligence::RepTracker;
use std::time::Duration;

/// Counts repetitions in the cache under `user:<id>:rep_count:<exercise>`
///
/// Every increment resets the expiry, so a counter vanishes once the user
/// stops sending frames for the configured TTL.
#[derive(Clone)]
pub struct CacheRepCounter {
    cache: Cache,
    ttl: Duration,
}

impl CacheRepCounter {
    /// Create a counter over `cache` with the given expiry
    #[must_use]
    pub const fn new(cache: Cache, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Current count without incrementing; zero when absent or expired
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be read
    #[doc(hidden)]
    pub async fn current(&self, user_id: &str, exercise_type: &str) -> AppResult<u32> {
        let count: Option<u64> = self
            .cache
            .get(&CacheKey::rep_count(user_id, exercise_type))
            .await?;
        Ok(count.map_or(0, saturate))
    }

    /// Drop the counter so the next frame starts again at one
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be written
    #[doc(hidden)]
    pub async fn reset(&self, user_id: &str, exercise_type: &str) -> AppResult<()> {
        self.cache
            .invalidate(&CacheKey::rep_count(user_id, exercise_type))
            .await
    }
}

#[async_trait]
impl RepTracker for CacheRepCounter {
    async fn increment(&self, user_id: &str, exercise_type: &str) -> AppResult<u32> {
        let count = self
            .cache
            .increment(&CacheKey::rep_count(user_id, exercise_type), self.ttl)
            .await?;
        Ok(saturate(count))
    }
}

fn saturate(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
