// ABOUTME: Database operations for daily training progress records
// ABOUTME: Reads the most recent window newest first for progress analysis and workout selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_json_column;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use coach_core::models::ProgressRecord;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Daily progress storage
pub struct ProgressManager {
    pool: SqlitePool,
}

impl ProgressManager {
    /// Create a new progress manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Up to `limit` records for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn recent_progress(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<ProgressRecord>> {
        let rows = sqlx::query(
            r"
            SELECT date, metrics, ai_insights, workout_streak, total_workouts, total_calories_burned
            FROM user_progress
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user progress: {e}")))?;

        rows.iter().map(row_to_progress).collect()
    }

    /// Create or replace the record for one day
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    #[doc(hidden)]
    pub async fn upsert_progress(&self, user_id: &str, record: &ProgressRecord) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_progress (
                user_id, date, metrics, ai_insights, workout_streak, total_workouts,
                total_calories_burned
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT(user_id, date) DO UPDATE SET
                metrics = excluded.metrics,
                ai_insights = excluded.ai_insights,
                workout_streak = excluded.workout_streak,
                total_workouts = excluded.total_workouts,
                total_calories_burned = excluded.total_calories_burned
            ",
        )
        .bind(user_id)
        .bind(record.date.format("%Y-%m-%d").to_string())
        .bind(serde_json::to_string(&record.metrics)?)
        .bind(serde_json::to_string(&record.ai_insights)?)
        .bind(i64::from(record.workout_streak))
        .bind(i64::from(record.total_workouts))
        .bind(record.total_calories_burned)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert user progress: {e}")))?;

        Ok(())
    }
}

fn row_to_progress(row: &SqliteRow) -> AppResult<ProgressRecord> {
    let date: String = row.get("date");
    let streak: i64 = row.get("workout_streak");
    let workouts: i64 = row.get("total_workouts");

    Ok(ProgressRecord {
        date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|e| AppError::database(format!("Invalid progress date '{date}': {e}")))?,
        metrics: parse_json_column(row.get("metrics"))?,
        ai_insights: parse_json_column(row.get("ai_insights"))?,
        workout_streak: u32::try_from(streak).unwrap_or_default(),
        total_workouts: u32::try_from(workouts).unwrap_or_default(),
        total_calories_burned: row.get("total_calories_burned"),
    })
}
