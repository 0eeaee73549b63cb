// ABOUTME: Redis cache backend for rep counters shared across server instances
// ABOUTME: Counts with an atomic INCR plus EXPIRE pipeline under a namespaced key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheConfig, CacheKey, CacheProvider};
use crate::config::environment::RedisConnectionConfig;
use crate::errors::{AppError, AppResult};
use coach_core::constants::cache::CACHE_KEY_PREFIX;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, RedisError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Keys deleted per SCAN page in [`CacheProvider::clear_all`]
const SCAN_PAGE_SIZE: usize = 100;

/// Redis-backed cache
///
/// Every key lives under [`CACHE_KEY_PREFIX`], so several deployments can
/// share one Redis without clobbering each other's counters.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    async fn connect(config: &CacheConfig) -> AppResult<Self> {
        let Some(url) = config.redis_url.as_deref() else {
            return Err(AppError::config("REDIS_URL must be set for the Redis cache"));
        };

        let client = Client::open(url)
            .map_err(|e| AppError::config(format!("Invalid Redis URL: {e}")))?;
        let manager = Self::open_manager(&client, &config.redis_connection).await?;

        info!(backend = "redis", "Rep counter cache connected");
        Ok(Self { manager })
    }

    /// Open a connection manager, backing off between failed attempts
    async fn open_manager(
        client: &Client,
        settings: &RedisConnectionConfig,
    ) -> AppResult<ConnectionManager> {
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(Duration::from_secs(settings.connection_timeout_secs))
            .set_response_timeout(Duration::from_secs(settings.response_timeout_secs))
            .set_number_of_retries(settings.reconnection_retries)
            .set_exponent_base(settings.retry_exponent_base)
            .set_max_delay(settings.max_retry_delay_ms);

        let attempts = settings.initial_connection_retries.saturating_add(1);
        let mut backoff = Duration::from_millis(settings.initial_retry_delay_ms);
        let ceiling = Duration::from_millis(settings.max_retry_delay_ms);
        let mut attempt = 1;

        loop {
            match ConnectionManager::new_with_config(client.clone(), manager_config.clone()).await
            {
                Ok(manager) => return Ok(manager),
                Err(e) if attempt < attempts => {
                    warn!(
                        attempt,
                        attempts,
                        backoff_ms = backoff.as_millis(),
                        error = %e,
                        "Redis unavailable, retrying"
                    );
                    sleep(backoff).await;
                    backoff = backoff.saturating_mul(2).min(ceiling);
                    attempt += 1;
                }
                Err(e) => {
                    return Err(AppError::external_service(
                        "redis",
                        format!("gave up after {attempts} connection attempts: {e}"),
                    ));
                }
            }
        }
    }

    fn namespaced(key: &CacheKey) -> String {
        format!("{CACHE_KEY_PREFIX}{key}")
    }

    fn failed(command: &'static str) -> impl FnOnce(RedisError) -> AppError {
        move |e| {
            error!(command, error = %e, "Redis command failed");
            AppError::storage(format!("Cache error: {e}"))
        }
    }
}

#[async_trait::async_trait]
impl CacheProvider for RedisCache {
    async fn new(config: CacheConfig) -> AppResult<Self> {
        Self::connect(&config).await
    }

    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        let payload = serde_json::to_vec(value)?;
        let mut conn = self.manager.clone();
        conn.set_ex::<_, _, ()>(Self::namespaced(key), payload, ttl.as_secs())
            .await
            .map_err(Self::failed("SET"))
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        let mut conn = self.manager.clone();
        let raw: Option<Vec<u8>> = conn
            .get(Self::namespaced(key))
            .await
            .map_err(Self::failed("GET"))?;

        match raw {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn increment(&self, key: &CacheKey, ttl: Duration) -> AppResult<u64> {
        let redis_key = Self::namespaced(key);
        let expire_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let mut conn = self.manager.clone();

        // MULTI/EXEC so a counter never survives without an expiry
        let (count,): (u64,) = redis::pipe()
            .atomic()
            .incr(&redis_key, 1_u64)
            .expire(&redis_key, expire_secs)
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(Self::failed("INCR"))?;

        Ok(count)
    }

    async fn invalidate(&self, key: &CacheKey) -> AppResult<()> {
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(Self::namespaced(key))
            .await
            .map_err(Self::failed("DEL"))
    }

    async fn exists(&self, key: &CacheKey) -> AppResult<bool> {
        let mut conn = self.manager.clone();
        conn.exists(Self::namespaced(key))
            .await
            .map_err(Self::failed("EXISTS"))
    }

    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>> {
        let mut conn = self.manager.clone();
        let remaining: i64 = conn
            .ttl(Self::namespaced(key))
            .await
            .map_err(Self::failed("TTL"))?;

        // Negative replies mean "no key" (-2) or "no expiry" (-1)
        Ok(u64::try_from(remaining)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs))
    }

    async fn health_check(&self) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::failed("PING"))?;

        if pong == "PONG" {
            Ok(())
        } else {
            Err(AppError::storage(format!(
                "Cache error: unexpected PING reply '{pong}'"
            )))
        }
    }

    async fn clear_all(&self) -> AppResult<()> {
        let pattern = format!("{CACHE_KEY_PREFIX}*");
        let mut conn = self.manager.clone();
        let mut cursor = 0_u64;

        loop {
            let (next, page): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_PAGE_SIZE)
                .query_async(&mut conn)
                .await
                .map_err(Self::failed("SCAN"))?;

            if !page.is_empty() {
                conn.del::<_, ()>(&page)
                    .await
                    .map_err(Self::failed("DEL"))?;
            }

            if next == 0 {
                return Ok(());
            }
            cursor = next;
        }
    }
}
