// ABOUTME: Database operations for form analysis history
// ABOUTME: Records per-frame scores with feedback and corrections for later review
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_json_column;
use super::workouts::parse_timestamp;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use coach_core::models::FormAnalysisResult;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// A persisted form analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFormAnalysis {
    /// Analysis id
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Exercise type as requested
    pub exercise_name: String,
    /// Form score in [0, 1]
    pub form_score: f64,
    /// Feedback lines
    pub feedback: Vec<String>,
    /// Corrections
    pub corrections: Vec<String>,
    /// Rep count at the time of the frame
    pub rep_count: u32,
    /// Landmark visibility confidence
    pub confidence: f64,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Form analysis history storage
pub struct FormAnalysisManager {
    pool: SqlitePool,
}

impl FormAnalysisManager {
    /// Create a new analysis manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one analysis and return its id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn record_analysis(
        &self,
        user_id: &str,
        exercise_name: &str,
        result: &FormAnalysisResult,
    ) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r"
            INSERT INTO form_analysis (
                id, user_id, exercise_name, form_score, feedback_data, corrections,
                rep_count, confidence, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(&id)
        .bind(user_id)
        .bind(exercise_name)
        .bind(result.form_score)
        .bind(serde_json::to_string(&result.feedback)?)
        .bind(serde_json::to_string(&result.corrections)?)
        .bind(i64::from(result.rep_count))
        .bind(result.confidence)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to record form analysis: {e}")))?;

        Ok(id)
    }

    /// A user's analyses, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    #[doc(hidden)]
    pub async fn list_user_analyses(
        &self,
        user_id: &str,
        limit: u32,
    ) -> AppResult<Vec<StoredFormAnalysis>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, exercise_name, form_score, feedback_data, corrections,
                   rep_count, confidence, created_at
            FROM form_analysis
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list form analyses: {e}")))?;

        rows.iter().map(row_to_analysis).collect()
    }
}

fn row_to_analysis(row: &SqliteRow) -> AppResult<StoredFormAnalysis> {
    let reps: i64 = row.get("rep_count");
    let created_at: String = row.get("created_at");

    Ok(StoredFormAnalysis {
        id: row.get("id"),
        user_id: row.get("user_id"),
        exercise_name: row.get("exercise_name"),
        form_score: row.get("form_score"),
        feedback: parse_json_column(row.get("feedback_data"))?,
        corrections: parse_json_column(row.get("corrections"))?,
        rep_count: u32::try_from(reps).unwrap_or_default(),
        confidence: row.get("confidence"),
        created_at: parse_timestamp(&created_at)?,
    })
}
