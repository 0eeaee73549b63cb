// ABOUTME: Shared server state built once at startup and handed to every route
// ABOUTME: Holds config, database, rep-counter cache, catalog snapshot, engines, and pose estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Everything a handler needs lives in [`ServerResources`], wrapped in an
//! `Arc` and passed through axum `State`. The exercise catalog is read once
//! here; later catalog edits need a restart to show up.

use crate::cache::Cache;
use crate::classifiers::FormModelRegistry;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::errors::AppResult;
use crate::pose::{self, PoseEstimator};
use crate::services::rep_counter::CacheRepCounter;
use coach_intelligence::{ExerciseCatalog, FormAnalysisEngine, WorkoutEngine};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared state for all handlers
pub struct ServerResources {
    /// Validated server configuration
    pub config: Arc<ServerConfig>,
    /// Relational store
    pub database: Database,
    /// Rep-counter cache
    pub cache: Cache,
    /// Read-only catalog snapshot
    pub catalog: Arc<ExerciseCatalog>,
    /// Per-frame form pipeline
    pub form_engine: FormAnalysisEngine,
    /// Workout plan pipeline
    pub workout_engine: WorkoutEngine,
    /// Frame to landmark collaborator
    pub pose_estimator: Arc<dyn PoseEstimator>,
    /// Classifier files found at startup
    pub form_models: FormModelRegistry,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(
        config: ServerConfig,
        database: Database,
        cache: Cache,
        catalog: ExerciseCatalog,
        pose_estimator: Arc<dyn PoseEstimator>,
        form_models: FormModelRegistry,
    ) -> Self {
        let rep_counter = CacheRepCounter::new(cache.clone(), config.cache.rep_counter_ttl);
        let catalog = Arc::new(catalog);

        Self {
            form_engine: FormAnalysisEngine::new(Arc::new(rep_counter)),
            workout_engine: WorkoutEngine::new(Arc::clone(&catalog)),
            config: Arc::new(config),
            database,
            cache,
            catalog,
            pose_estimator,
            form_models,
        }
    }

    /// Open every backing service described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the database, cache, or pose client cannot be initialized
    pub async fn initialize(config: ServerConfig) -> AppResult<Self> {
        let database = Database::new(&config.database).await?;
        let catalog = load_catalog(&database).await;
        let cache = Cache::new(config.cache.clone()).await?;
        let pose_estimator = pose::from_config(&config.pose_service)?;
        let form_models = FormModelRegistry::discover(&config.model_path);

        info!(
            catalog.size = catalog.len(),
            cache.backend = cache.backend_name(),
            pose.backend = pose_estimator.name(),
            form_models.loaded = form_models.loaded_count(),
            "Server resources initialized"
        );

        Ok(Self::new(
            config,
            database,
            cache,
            catalog,
            pose_estimator,
            form_models,
        ))
    }
}

/// Read the catalog snapshot, degrading to an empty catalog on a read fault
pub async fn load_catalog(database: &Database) -> ExerciseCatalog {
    match database.exercises().list_exercises().await {
        Ok(exercises) => {
            if exercises.is_empty() {
                warn!("Exercise catalog is empty; workout plans will have no exercises");
            }
            ExerciseCatalog::new(exercises)
        }
        Err(e) => {
            warn!(error = %e, "Failed to load exercise catalog, continuing with an empty catalog");
            ExerciseCatalog::new(Vec::new())
        }
    }
}
