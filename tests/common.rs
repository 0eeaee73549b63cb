// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, cache, catalog, and canned pose estimator helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `pierre_form_coach`
//!
//! Every helper builds fully in-memory state so tests can run in parallel
//! without touching the filesystem or a Redis server.

use anyhow::Result;
use async_trait::async_trait;
use coach_core::models::landmark::FULL_BODY_LANDMARK_COUNT;
use coach_core::models::{ExerciseCategory, ExerciseRecord, Landmark, LandmarkSet};
use pierre_form_coach::{
    cache::{Cache, CacheConfig},
    classifiers::FormModelRegistry,
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    errors::{AppError, AppResult},
    pose::PoseEstimator,
    resources::{self, ServerResources},
};
use std::env;
use std::path::Path;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Pose estimator that always answers with the same landmarks
pub struct FixedPoseEstimator {
    landmarks: LandmarkSet,
}

impl FixedPoseEstimator {
    pub const fn new(landmarks: LandmarkSet) -> Self {
        Self { landmarks }
    }
}

#[async_trait]
impl PoseEstimator for FixedPoseEstimator {
    async fn estimate(&self, _frame: &[u8]) -> AppResult<LandmarkSet> {
        Ok(self.landmarks.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Pose estimator whose backend is always down
pub struct FailingPoseEstimator;

#[async_trait]
impl PoseEstimator for FailingPoseEstimator {
    async fn estimate(&self, _frame: &[u8]) -> AppResult<LandmarkSet> {
        Err(AppError::external_service("pose", "connection refused"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A full 33-point body with every landmark clearly visible
pub fn visible_body() -> LandmarkSet {
    (0..FULL_BODY_LANDMARK_COUNT)
        .map(|i| {
            let t = i as f64;
            Landmark::new(0.5 + 0.1 * t.sin(), 0.02 + 0.028 * t, 0.0, 0.9)
        })
        .collect::<Vec<_>>()
        .into()
}

fn exercise(
    id: &str,
    category: ExerciseCategory,
    muscle_groups: &[&str],
    equipment: &[&str],
    difficulty: u8,
    calories_per_minute: f64,
) -> ExerciseRecord {
    ExerciseRecord {
        id: id.to_owned(),
        name: id.replace('-', " "),
        category,
        muscle_groups: muscle_groups.iter().map(|m| (*m).to_owned()).collect(),
        equipment: equipment.iter().map(|e| (*e).to_owned()).collect(),
        difficulty_level: difficulty,
        calories_per_minute: Some(calories_per_minute),
        instructions: None,
    }
}

/// Small catalog spanning categories, muscle groups, and difficulty bands
pub fn sample_exercises() -> Vec<ExerciseRecord> {
    vec![
        exercise("push-ups", ExerciseCategory::Strength, &["chest", "arms"], &[], 3, 7.0),
        exercise("squats", ExerciseCategory::Strength, &["legs", "core"], &[], 2, 6.0),
        exercise("superman", ExerciseCategory::Strength, &["back", "core"], &[], 1, 3.5),
        exercise("dumbbell-rows", ExerciseCategory::Strength, &["back", "arms"], &["dumbbells"], 4, 5.5),
        exercise("overhead-press", ExerciseCategory::Strength, &["shoulders", "arms"], &["dumbbells"], 5, 6.0),
        exercise("burpees", ExerciseCategory::Cardio, &["legs", "chest", "core"], &[], 6, 12.0),
        exercise("jumping-jacks", ExerciseCategory::Cardio, &["legs", "shoulders"], &[], 1, 8.5),
        exercise("kettlebell-swings", ExerciseCategory::Cardio, &["legs", "back"], &["kettlebell"], 8, 13.0),
        exercise("hip-flexor-stretch", ExerciseCategory::Flexibility, &["legs"], &[], 1, 2.0),
    ]
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseUrl::Memory).await?)
}

/// In-memory cache without the background cleanup task
pub async fn create_test_cache() -> Result<Cache> {
    let config = CacheConfig {
        max_entries: 1000,
        enable_background_cleanup: false,
        ..CacheConfig::default()
    };
    Ok(Cache::new(config).await?)
}

/// Resources over a database seeded with `exercises`
pub async fn create_resources_with_catalog(
    estimator: Arc<dyn PoseEstimator>,
    exercises: &[ExerciseRecord],
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    for exercise in exercises {
        database.exercises().upsert_exercise(exercise).await?;
    }
    let catalog = resources::load_catalog(&database).await;
    let cache = create_test_cache().await?;
    let form_models = FormModelRegistry::discover(Path::new("./no-such-model-dir"));

    Ok(Arc::new(ServerResources::new(
        ServerConfig::default(),
        database,
        cache,
        catalog,
        estimator,
        form_models,
    )))
}

/// Resources with the sample catalog and a pose estimator that sees a body
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_resources_with_catalog(
        Arc::new(FixedPoseEstimator::new(visible_body())),
        &sample_exercises(),
    )
    .await
}
