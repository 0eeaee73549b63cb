// ABOUTME: SQLite persistence for the exercise catalog, profiles, progress, workouts, and analyses
// ABOUTME: Owns the connection pool and creates tables on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! One [`Database`] owns the `SQLite` pool. Each table family has its own
//! manager holding a clone of the pool, following the same
//! `sqlx::query(..).bind(..)` plus `row_to_*` mapper shape throughout.
//! Array and map columns are stored as JSON text.

mod analyses;
mod exercises;
mod progress;
mod users;
mod workouts;

pub use analyses::{FormAnalysisManager, StoredFormAnalysis};
pub use exercises::ExerciseManager;
pub use progress::ProgressManager;
pub use users::UserProfileManager;
pub use workouts::{StoredWorkout, WorkoutManager};

use crate::config::environment::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Database handle shared by services
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or table creation fails
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            // Each in-memory connection is its own database, so keep exactly one
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect("sqlite::memory:")
                .await,
            DatabaseUrl::SQLite { path } => {
                ensure_parent_dir(path).await?;
                SqlitePoolOptions::new()
                    .connect(&format!("{}?mode=rwc", url.to_connection_string()))
                    .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to open database {url}: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(database = %url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Exercise catalog storage
    #[must_use]
    pub fn exercises(&self) -> ExerciseManager {
        ExerciseManager::new(self.pool.clone())
    }

    /// User profile storage
    #[must_use]
    pub fn users(&self) -> UserProfileManager {
        UserProfileManager::new(self.pool.clone())
    }

    /// Daily progress storage
    #[must_use]
    pub fn progress(&self) -> ProgressManager {
        ProgressManager::new(self.pool.clone())
    }

    /// Generated workout storage
    #[must_use]
    pub fn workouts(&self) -> WorkoutManager {
        WorkoutManager::new(self.pool.clone())
    }

    /// Form analysis history storage
    #[must_use]
    pub fn analyses(&self) -> FormAnalysisManager {
        FormAnalysisManager::new(self.pool.clone())
    }

    /// Create all tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        let statements = [
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                muscle_groups TEXT NOT NULL DEFAULT '[]',
                equipment TEXT NOT NULL DEFAULT '[]',
                difficulty_level INTEGER NOT NULL CHECK (difficulty_level BETWEEN 1 AND 10),
                calories_per_minute REAL,
                instructions TEXT,
                created_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS user_profiles (
                user_id TEXT PRIMARY KEY,
                fitness_level TEXT NOT NULL DEFAULT 'beginner',
                goals TEXT NOT NULL DEFAULT '[]',
                medical_conditions TEXT NOT NULL DEFAULT '[]',
                preferred_duration INTEGER NOT NULL DEFAULT 30,
                updated_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS user_progress (
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                metrics TEXT NOT NULL DEFAULT '{}',
                ai_insights TEXT NOT NULL DEFAULT '[]',
                workout_streak INTEGER NOT NULL DEFAULT 0,
                total_workouts INTEGER NOT NULL DEFAULT 0,
                total_calories_burned REAL NOT NULL DEFAULT 0,
                PRIMARY KEY (user_id, date)
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                workout_type TEXT NOT NULL,
                exercises TEXT NOT NULL,
                estimated_duration INTEGER NOT NULL,
                difficulty_level INTEGER NOT NULL,
                ai_generated INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS form_analysis (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                exercise_name TEXT NOT NULL,
                form_score REAL NOT NULL,
                feedback_data TEXT NOT NULL DEFAULT '[]',
                corrections TEXT NOT NULL DEFAULT '[]',
                rep_count INTEGER NOT NULL DEFAULT 0,
                confidence REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_workouts_user ON workouts(user_id, created_at)",
            "CREATE INDEX IF NOT EXISTS idx_form_analysis_user ON form_analysis(user_id, created_at)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to run migration: {e}")))?;
        }

        Ok(())
    }
}

async fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .await
            .map_err(|e| {
                AppError::storage(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            }),
        _ => Ok(()),
    }
}

/// Parse a JSON text column, treating NULL as the type's default
pub(crate) fn parse_json_column<T>(raw: Option<String>) -> AppResult<T>
where
    T: for<'de> serde::Deserialize<'de> + Default,
{
    Ok(raw
        .map(|s| serde_json::from_str(&s))
        .transpose()?
        .unwrap_or_default())
}
