// ABOUTME: Database operations for generated workout plans
// ABOUTME: Stores each plan with its exercises as JSON and returns the new workout id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_json_column;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use coach_core::models::{ExerciseInstance, SessionType, WorkoutRecommendation};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// A persisted workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWorkout {
    /// Workout id
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Display name, e.g. "AI Generated Cardio Workout"
    pub name: String,
    /// Session the plan was generated for
    pub workout_type: SessionType,
    /// Parameterized exercises
    pub exercises: Vec<ExerciseInstance>,
    /// Estimated minutes
    pub estimated_duration: u32,
    /// Plan difficulty
    pub difficulty_level: u8,
    /// Whether the plan came from the generator
    pub ai_generated: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Generated workout storage
pub struct WorkoutManager {
    pool: SqlitePool,
}

impl WorkoutManager {
    /// Create a new workout manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a generated plan and return its id
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create_workout(
        &self,
        user_id: &str,
        session_type: SessionType,
        recommendation: &WorkoutRecommendation,
    ) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let name = format!("AI Generated {} Workout", session_type.title());

        sqlx::query(
            r"
            INSERT INTO workouts (
                id, user_id, name, workout_type, exercises, estimated_duration,
                difficulty_level, ai_generated, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, 1, $8)
            ",
        )
        .bind(&id)
        .bind(user_id)
        .bind(&name)
        .bind(session_type.as_str())
        .bind(serde_json::to_string(&recommendation.exercises)?)
        .bind(i64::from(recommendation.estimated_duration))
        .bind(i64::from(recommendation.difficulty_level))
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        Ok(id)
    }

    /// Get one workout by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    #[doc(hidden)]
    pub async fn get_workout(&self, id: &str) -> AppResult<Option<StoredWorkout>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, name, workout_type, exercises, estimated_duration,
                   difficulty_level, ai_generated, created_at
            FROM workouts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout: {e}")))?;

        row.map(|r| row_to_workout(&r)).transpose()
    }

    /// A user's workouts, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    #[doc(hidden)]
    pub async fn list_user_workouts(
        &self,
        user_id: &str,
        limit: u32,
    ) -> AppResult<Vec<StoredWorkout>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, name, workout_type, exercises, estimated_duration,
                   difficulty_level, ai_generated, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<StoredWorkout> {
    let workout_type: String = row.get("workout_type");
    let duration: i64 = row.get("estimated_duration");
    let difficulty: i64 = row.get("difficulty_level");
    let ai_generated: i64 = row.get("ai_generated");
    let created_at: String = row.get("created_at");

    Ok(StoredWorkout {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        workout_type: SessionType::parse(&workout_type),
        exercises: parse_json_column(row.get("exercises"))?,
        estimated_duration: u32::try_from(duration).unwrap_or_default(),
        difficulty_level: u8::try_from(difficulty).unwrap_or(1),
        ai_generated: ai_generated != 0,
        created_at: parse_timestamp(&created_at)?,
    })
}

pub(super) fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid timestamp '{raw}': {e}")))
}
