// ABOUTME: Environment configuration for the form coach server
// ABOUTME: Parses ports, database, cache, pose service, and model settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::cache::CacheConfig;
use crate::errors::{AppError, AppResult};
use coach_core::constants::{models, pose, redis, server};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; anything without a `sqlite:` prefix is a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(server::DEFAULT_DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Redis connection and retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConnectionConfig {
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
    /// Response/command timeout in seconds
    pub response_timeout_secs: u64,
    /// Number of reconnection retries after connection drop
    pub reconnection_retries: usize,
    /// Exponential backoff base for retry delays
    pub retry_exponent_base: u64,
    /// Maximum retry delay in milliseconds
    pub max_retry_delay_ms: u64,
    /// Number of retries for initial connection at startup
    pub initial_connection_retries: u32,
    /// Initial retry delay in milliseconds (doubles with exponential backoff)
    pub initial_retry_delay_ms: u64,
}

impl Default for RedisConnectionConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: redis::CONNECTION_TIMEOUT_SECS,
            response_timeout_secs: redis::RESPONSE_TIMEOUT_SECS,
            reconnection_retries: redis::RECONNECTION_RETRIES,
            retry_exponent_base: redis::RETRY_EXPONENT_BASE,
            max_retry_delay_ms: redis::MAX_RETRY_DELAY_MS,
            initial_connection_retries: redis::INITIAL_CONNECTION_RETRIES,
            initial_retry_delay_ms: redis::INITIAL_RETRY_DELAY_MS,
        }
    }
}

impl RedisConnectionConfig {
    /// Load Redis connection configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not a valid number
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            connection_timeout_secs: env_parse_or(
                "REDIS_CONNECTION_TIMEOUT_SECS",
                redis::CONNECTION_TIMEOUT_SECS,
            )?,
            response_timeout_secs: env_parse_or(
                "REDIS_RESPONSE_TIMEOUT_SECS",
                redis::RESPONSE_TIMEOUT_SECS,
            )?,
            reconnection_retries: env_parse_or(
                "REDIS_RECONNECTION_RETRIES",
                redis::RECONNECTION_RETRIES,
            )?,
            retry_exponent_base: env_parse_or(
                "REDIS_RETRY_EXPONENT_BASE",
                redis::RETRY_EXPONENT_BASE,
            )?,
            max_retry_delay_ms: env_parse_or(
                "REDIS_MAX_RETRY_DELAY_MS",
                redis::MAX_RETRY_DELAY_MS,
            )?,
            initial_connection_retries: env_parse_or(
                "REDIS_INITIAL_CONNECTION_RETRIES",
                redis::INITIAL_CONNECTION_RETRIES,
            )?,
            initial_retry_delay_ms: env_parse_or(
                "REDIS_INITIAL_RETRY_DELAY_MS",
                redis::INITIAL_RETRY_DELAY_MS,
            )?,
        })
    }
}

/// Pose estimation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseServiceConfig {
    /// Base URL of the landmark service; `None` disables pose estimation
    pub url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PoseServiceConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PoseServiceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: pose::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database location
    pub database: DatabaseUrl,
    /// Rep counter cache settings
    pub cache: CacheConfig,
    /// Pose estimation collaborator
    pub pose_service: PoseServiceConfig,
    /// Directory holding trained form classifiers
    pub model_path: PathBuf,
    /// Largest accepted request body in bytes
    pub max_frame_bytes: usize,
    /// Allowed CORS origins (`*` allows any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: server::DEFAULT_HTTP_PORT,
            host: server::DEFAULT_HOST.to_owned(),
            environment: Environment::default(),
            database: DatabaseUrl::default(),
            cache: CacheConfig::default(),
            pose_service: PoseServiceConfig::default(),
            model_path: PathBuf::from(models::DEFAULT_MODEL_PATH),
            max_frame_bytes: server::DEFAULT_MAX_FRAME_BYTES,
            cors_origins: vec!["*".to_owned()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value or the
    /// resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_parse_or("HTTP_PORT", server::DEFAULT_HTTP_PORT)?,
            host: env_var_or("HOST", server::DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseUrl::parse_url(&env_var_or(
                "DATABASE_URL",
                server::DEFAULT_DATABASE_URL,
            )),
            cache: CacheConfig::from_env()?,
            pose_service: PoseServiceConfig {
                url: env::var("POSE_SERVICE_URL")
                    .ok()
                    .filter(|url| !url.trim().is_empty()),
                timeout_secs: env_parse_or(
                    "POSE_SERVICE_TIMEOUT_SECS",
                    pose::DEFAULT_TIMEOUT_SECS,
                )?,
            },
            model_path: PathBuf::from(env_var_or("MODEL_PATH", models::DEFAULT_MODEL_PATH)),
            max_frame_bytes: env_parse_or("MAX_FRAME_BYTES", server::DEFAULT_MAX_FRAME_BYTES)?,
            cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "*")),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port, rep counter TTL, or frame limit
    pub fn validate(&self) -> AppResult<()> {
        if self.http_port == 0 {
            return Err(AppError::config("HTTP_PORT must be non-zero"));
        }
        if self.cache.rep_counter_ttl.is_zero() {
            return Err(AppError::config("REP_COUNTER_TTL_SECS must be non-zero"));
        }
        if self.max_frame_bytes == 0 {
            return Err(AppError::config("MAX_FRAME_BYTES must be non-zero"));
        }
        if self.pose_service.url.is_some() && self.pose_service.timeout_secs == 0 {
            warn!("POSE_SERVICE_TIMEOUT_SECS is 0; pose requests will time out immediately");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Form Coach Configuration:\n\
             - Environment: {}\n\
             - Bind: {}:{}\n\
             - Database: {}\n\
             - Cache: {}\n\
             - Rep Counter TTL: {}s\n\
             - Pose Service: {}\n\
             - Model Path: {}\n\
             - Max Frame Bytes: {}\n\
             - CORS Origins: {}",
            self.environment,
            self.host,
            self.http_port,
            if self.database.is_memory() {
                "SQLite (memory)"
            } else {
                "SQLite"
            },
            if self.cache.redis_url.is_some() {
                "Redis"
            } else {
                "In-memory"
            },
            self.cache.rep_counter_ttl.as_secs(),
            self.pose_service.url.as_deref().unwrap_or("Disabled"),
            self.model_path.display(),
            self.max_frame_bytes,
            self.cors_origins.join(", ")
        )
    }
}

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using the default when unset
pub(crate) fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::errors::ErrorCode;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://coach.example.com,"),
            vec!["http://localhost:3000", "https://coach.example.com"]
        );
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        let file = DatabaseUrl::parse_url("sqlite:./data/form_coach.db");
        assert_eq!(file.to_connection_string(), "sqlite:./data/form_coach.db");
        assert!(!file.is_memory());

        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());

        let bare = DatabaseUrl::parse_url("./coach.db");
        assert_eq!(bare.to_connection_string(), "sqlite:./coach.db");
    }

    #[test]
    fn test_config_validation() {
        assert!(ServerConfig::default().validate().is_ok());

        let zero_port = ServerConfig {
            http_port: 0,
            ..ServerConfig::default()
        };
        let err = zero_port.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);

        let mut zero_ttl = ServerConfig::default();
        zero_ttl.cache.rep_counter_ttl = Duration::ZERO;
        assert!(zero_ttl.validate().is_err());

        let zero_frame = ServerConfig {
            max_frame_bytes: 0,
            ..ServerConfig::default()
        };
        assert!(zero_frame.validate().is_err());
    }

    #[test]
    fn test_summary_mentions_backends() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("In-memory"));
        assert!(summary.contains("Pose Service: Disabled"));
    }
}
