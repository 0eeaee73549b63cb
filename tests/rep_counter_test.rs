// ABOUTME: Integration tests for the cache-backed rep counter
// ABOUTME: Verifies per-user counting, expiry, reset, and engine wiring
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use coach_intelligence::{FormAnalysisEngine, RepTracker};
use pierre_form_coach::services::rep_counter::CacheRepCounter;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

async fn counter(ttl: Duration) -> Result<CacheRepCounter> {
    Ok(CacheRepCounter::new(common::create_test_cache().await?, ttl))
}

#[tokio::test]
async fn test_increment_returns_running_count() -> Result<()> {
    let counter = counter(Duration::from_secs(300)).await?;

    assert_eq!(counter.increment("athlete", "push-ups").await?, 1);
    assert_eq!(counter.increment("athlete", "push-ups").await?, 2);
    assert_eq!(counter.current("athlete", "push-ups").await?, 2);

    Ok(())
}

#[tokio::test]
async fn test_current_is_zero_for_unknown_counter() -> Result<()> {
    let counter = counter(Duration::from_secs(300)).await?;
    assert_eq!(counter.current("nobody", "squats").await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_reset_starts_over() -> Result<()> {
    let counter = counter(Duration::from_secs(300)).await?;

    counter.increment("athlete", "squats").await?;
    counter.increment("athlete", "squats").await?;
    counter.reset("athlete", "squats").await?;

    assert_eq!(counter.current("athlete", "squats").await?, 0);
    assert_eq!(counter.increment("athlete", "squats").await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_counter_expires_after_inactivity() -> Result<()> {
    let counter = counter(Duration::from_millis(200)).await?;

    counter.increment("athlete", "burpees").await?;
    counter.increment("athlete", "burpees").await?;
    sleep(Duration::from_millis(300)).await;

    assert_eq!(counter.increment("athlete", "burpees").await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_engine_counts_reps_per_user() -> Result<()> {
    let counter = counter(Duration::from_secs(300)).await?;
    let engine = FormAnalysisEngine::new(Arc::new(counter.clone()));
    let body = common::visible_body();

    let first = engine.analyze(body.clone(), "squats", Some("alice")).await;
    let second = engine.analyze(body.clone(), "squats", Some("alice")).await;
    let other = engine.analyze(body.clone(), "squats", Some("bob")).await;
    let anonymous = engine.analyze(body, "squats", None).await;

    assert_eq!(first.rep_count, 1);
    assert_eq!(second.rep_count, 2);
    assert_eq!(other.rep_count, 1);
    assert_eq!(anonymous.rep_count, 0);
    assert_eq!(counter.current("alice", "squats").await?, 2);

    Ok(())
}
