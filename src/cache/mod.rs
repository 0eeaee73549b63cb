// ABOUTME: Cache abstraction for short-lived per-user state such as rep counters
// ABOUTME: Pluggable backends (in-memory LRU, Redis) behind a common provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cache factory for creating cache providers
pub mod factory;
/// In-memory cache implementation
pub mod memory;
/// Redis cache implementation
pub mod redis;

pub use factory::Cache;

use crate::config::environment::{env_parse_or, RedisConnectionConfig};
use crate::errors::AppResult;
use coach_core::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS, TTL_REP_COUNT_SECS,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

/// Operations every rep-counter backend supports
///
/// Values are stored as JSON so a counter written by one backend reads the
/// same way from another.
///
/// ```rust,no_run
/// use pierre_form_coach::cache::{CacheConfig, CacheKey, CacheProvider};
/// use pierre_form_coach::cache::memory::InMemoryCache;
/// use std::time::Duration;
/// # async fn example() -> Result<(), pierre_form_coach::errors::AppError> {
/// let cache = InMemoryCache::new(CacheConfig {
///     enable_background_cleanup: false,
///     ..CacheConfig::default()
/// })
/// .await?;
///
/// let key = CacheKey::rep_count("user-1", "squats");
/// assert_eq!(cache.increment(&key, Duration::from_secs(300)).await?, 1);
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Connect or allocate the backend
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store `value` under `key` for `ttl`
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or backend failure
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Fetch a live value, `None` when absent or expired
    ///
    /// # Errors
    ///
    /// Returns an error when the stored bytes do not decode as `T`
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>>;

    /// Atomically add one to an integer counter and reset its TTL
    ///
    /// A missing or expired key starts from zero, so the first call returns 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not an integer or the backend fails
    async fn increment(&self, key: &CacheKey, ttl: Duration) -> AppResult<u64>;

    /// Drop `key`
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Whether `key` holds a live value
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure
    async fn exists(&self, key: &CacheKey) -> AppResult<bool>;

    /// Time left before `key` expires
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure
    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>>;

    /// Round-trip to the backend
    ///
    /// # Errors
    ///
    /// Returns an error when the backend does not answer
    async fn health_check(&self) -> AppResult<()>;

    /// Remove every entry this service owns
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure
    async fn clear_all(&self) -> AppResult<()>;
}

/// Backend selection and sizing
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// LRU capacity of the in-memory backend
    pub max_entries: usize,
    /// Selects the Redis backend when set
    pub redis_url: Option<String>,
    /// Period of the in-memory expiry sweep
    pub cleanup_interval: Duration,
    /// Spawn the expiry sweep (needs a running tokio runtime)
    pub enable_background_cleanup: bool,
    /// Redis timeouts and retry policy
    pub redis_connection: RedisConnectionConfig,
    /// Lifetime of a rep counter after its last increment
    pub rep_counter_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            redis_url: None,
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: true,
            redis_connection: RedisConnectionConfig::default(),
            rep_counter_ttl: Duration::from_secs(TTL_REP_COUNT_SECS),
        }
    }
}

impl CacheConfig {
    /// Read `CACHE_*`, `REDIS_URL` and `REP_COUNTER_TTL_SECS`
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            max_entries: env_parse_or("CACHE_MAX_ENTRIES", DEFAULT_CACHE_MAX_ENTRIES)?,
            redis_url: env::var("REDIS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            cleanup_interval: Duration::from_secs(env_parse_or(
                "CACHE_CLEANUP_INTERVAL_SECS",
                DEFAULT_CLEANUP_INTERVAL_SECS,
            )?),
            enable_background_cleanup: true,
            redis_connection: RedisConnectionConfig::from_env()?,
            rep_counter_ttl: Duration::from_secs(env_parse_or(
                "REP_COUNTER_TTL_SECS",
                TTL_REP_COUNT_SECS,
            )?),
        })
    }
}

/// Cache key scoped to one user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Caller-supplied user identifier
    pub user_id: String,
    /// Specific resource being cached
    pub resource: CacheResource,
}

impl CacheKey {
    /// Key for `resource` owned by `user_id`
    #[must_use]
    pub const fn new(user_id: String, resource: CacheResource) -> Self {
        Self { user_id, resource }
    }

    /// Key of the rep counter for a (user, exercise) pair
    #[must_use]
    pub fn rep_count(user_id: &str, exercise_type: &str) -> Self {
        Self::new(
            user_id.to_owned(),
            CacheResource::RepCount {
                exercise_type: exercise_type.to_owned(),
            },
        )
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}:{}", self.user_id, self.resource)
    }
}

/// What a key points at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheResource {
    /// Repetition counter for one exercise
    RepCount {
        /// Exercise type as requested by the client
        exercise_type: String,
    },
}

impl CacheResource {
    /// Default lifetime for this kind of entry
    #[must_use]
    pub const fn recommended_ttl(&self) -> Duration {
        match self {
            Self::RepCount { .. } => Duration::from_secs(TTL_REP_COUNT_SECS),
        }
    }
}

impl fmt::Display for CacheResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepCount { exercise_type } => write!(f, "rep_count:{exercise_type}"),
        }
    }
}
