// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment loading, defaults, overrides, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coach_core::errors::ErrorCode;
use pierre_form_coach::cache::CacheConfig;
use pierre_form_coach::config::environment::{DatabaseUrl, Environment, ServerConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "DATABASE_URL",
    "REDIS_URL",
    "CACHE_MAX_ENTRIES",
    "CACHE_CLEANUP_INTERVAL_SECS",
    "REP_COUNTER_TTL_SECS",
    "POSE_SERVICE_URL",
    "POSE_SERVICE_TIMEOUT_SECS",
    "MODEL_PATH",
    "MAX_FRAME_BYTES",
    "CORS_ORIGINS",
];

fn clear_config_env() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_config_env();

    let config = ServerConfig::from_env().expect("defaults are valid");

    assert_eq!(config.http_port, 5000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.database,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/form_coach.db")
        }
    );
    assert!(config.cache.redis_url.is_none());
    assert_eq!(config.cache.rep_counter_ttl, Duration::from_secs(300));
    assert!(config.pose_service.url.is_none());
    assert_eq!(config.model_path, PathBuf::from("/app/models"));
    assert_eq!(config.max_frame_bytes, 10 * 1024 * 1024);
    assert_eq!(config.cors_origins, vec!["*"]);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_config_env();
    env::set_var("HTTP_PORT", "8088");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("REP_COUNTER_TTL_SECS", "120");
    env::set_var("POSE_SERVICE_URL", "http://pose:9000");
    env::set_var("MODEL_PATH", "/srv/models");
    env::set_var("CORS_ORIGINS", "https://a.example.com, https://b.example.com");

    let config = ServerConfig::from_env().expect("overrides are valid");
    clear_config_env();

    assert_eq!(config.http_port, 8088);
    assert!(config.environment.is_production());
    assert!(config.database.is_memory());
    assert_eq!(config.cache.rep_counter_ttl, Duration::from_secs(120));
    assert_eq!(
        config.pose_service.url.as_deref(),
        Some("http://pose:9000")
    );
    assert_eq!(config.model_path, PathBuf::from("/srv/models"));
    assert_eq!(
        config.cors_origins,
        vec!["https://a.example.com", "https://b.example.com"]
    );
}

#[test]
#[serial]
fn test_blank_urls_are_treated_as_unset() {
    clear_config_env();
    env::set_var("REDIS_URL", "  ");
    env::set_var("POSE_SERVICE_URL", "");

    let config = ServerConfig::from_env().expect("blank urls are valid");
    clear_config_env();

    assert!(config.cache.redis_url.is_none());
    assert!(config.pose_service.url.is_none());
}

#[test]
#[serial]
fn test_invalid_number_is_config_error() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let err = ServerConfig::from_env().expect_err("port must be numeric");
    clear_config_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_zero_ttl_fails_validation() {
    clear_config_env();
    env::set_var("REP_COUNTER_TTL_SECS", "0");

    let result = ServerConfig::from_env();
    clear_config_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cache_config_from_env() {
    clear_config_env();
    env::set_var("CACHE_MAX_ENTRIES", "42");
    env::set_var("REDIS_URL", "redis://localhost:6379");

    let config = CacheConfig::from_env().expect("cache config");
    clear_config_env();

    assert_eq!(config.max_entries, 42);
    assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));
}

#[test]
fn test_summary_reflects_configuration() {
    let config = ServerConfig {
        http_port: 7000,
        ..ServerConfig::default()
    };

    let summary = config.summary();
    assert!(summary.contains("7000"));
    assert!(summary.contains("development"));
}
