// ABOUTME: Database operations for user fitness profiles
// ABOUTME: Profiles are keyed by the caller-supplied user identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_json_column;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use coach_core::models::{FitnessLevel, UserProfile};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// User profile storage
pub struct UserProfileManager {
    pool: SqlitePool,
}

impl UserProfileManager {
    /// Create a new profile manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load a user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query(
            r"
            SELECT fitness_level, goals, medical_conditions, preferred_duration
            FROM user_profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user profile: {e}")))?;

        row.map(|r| row_to_profile(&r)).transpose()
    }

    /// Create or replace a user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    #[doc(hidden)]
    pub async fn upsert_profile(&self, user_id: &str, profile: &UserProfile) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_profiles (
                user_id, fitness_level, goals, medical_conditions, preferred_duration, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(user_id) DO UPDATE SET
                fitness_level = excluded.fitness_level,
                goals = excluded.goals,
                medical_conditions = excluded.medical_conditions,
                preferred_duration = excluded.preferred_duration,
                updated_at = excluded.updated_at
            ",
        )
        .bind(user_id)
        .bind(profile.fitness_level.as_str())
        .bind(serde_json::to_string(&profile.goals)?)
        .bind(serde_json::to_string(&profile.medical_conditions)?)
        .bind(i64::from(profile.preferred_duration))
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert user profile: {e}")))?;

        Ok(())
    }
}

fn row_to_profile(row: &SqliteRow) -> AppResult<UserProfile> {
    let level: String = row.get("fitness_level");
    let duration: i64 = row.get("preferred_duration");

    Ok(UserProfile {
        fitness_level: FitnessLevel::parse(&level),
        goals: parse_json_column(row.get("goals"))?,
        medical_conditions: parse_json_column(row.get("medical_conditions"))?,
        preferred_duration: u32::try_from(duration).unwrap_or_default(),
    })
}
