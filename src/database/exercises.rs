// ABOUTME: Database operations for the exercise catalog
// ABOUTME: Lists exercises in storage order and upserts catalog entries for seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_json_column;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use coach_core::models::{ExerciseCategory, ExerciseRecord};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Exercise catalog storage
pub struct ExerciseManager {
    pool: SqlitePool,
}

impl ExerciseManager {
    /// Create a new exercise manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every exercise in insertion order
    ///
    /// Selection walks the catalog in this order, so it must stay stable.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list_exercises(&self) -> AppResult<Vec<ExerciseRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, category, muscle_groups, equipment, difficulty_level,
                   calories_per_minute, instructions
            FROM exercises
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Get one exercise by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    #[doc(hidden)]
    pub async fn get_exercise(&self, id: &str) -> AppResult<Option<ExerciseRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, name, category, muscle_groups, equipment, difficulty_level,
                   calories_per_minute, instructions
            FROM exercises
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        row.map(|r| row_to_exercise(&r)).transpose()
    }

    /// Insert an exercise or update it in place, keeping its catalog position
    ///
    /// # Errors
    ///
    /// Returns an error if the difficulty is out of range or the write fails
    pub async fn upsert_exercise(&self, exercise: &ExerciseRecord) -> AppResult<()> {
        if !(1..=10).contains(&exercise.difficulty_level) {
            return Err(AppError::invalid_input(format!(
                "Exercise '{}' has difficulty {} outside 1-10",
                exercise.name, exercise.difficulty_level
            )));
        }

        sqlx::query(
            r"
            INSERT INTO exercises (
                id, name, category, muscle_groups, equipment, difficulty_level,
                calories_per_minute, instructions, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                category = excluded.category,
                muscle_groups = excluded.muscle_groups,
                equipment = excluded.equipment,
                difficulty_level = excluded.difficulty_level,
                calories_per_minute = excluded.calories_per_minute,
                instructions = excluded.instructions
            ",
        )
        .bind(&exercise.id)
        .bind(&exercise.name)
        .bind(exercise.category.as_str())
        .bind(serde_json::to_string(&exercise.muscle_groups)?)
        .bind(serde_json::to_string(&exercise.equipment)?)
        .bind(i64::from(exercise.difficulty_level))
        .bind(exercise.calories_per_minute)
        .bind(exercise.instructions.as_deref())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to upsert exercise: {e}")))?;

        Ok(())
    }

    /// Number of catalog entries
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count exercises: {e}")))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<ExerciseRecord> {
    let category: String = row.get("category");
    let difficulty: i64 = row.get("difficulty_level");

    Ok(ExerciseRecord {
        id: row.get("id"),
        name: row.get("name"),
        category: ExerciseCategory::parse(&category),
        muscle_groups: parse_json_column(row.get("muscle_groups"))?,
        equipment: parse_json_column(row.get("equipment"))?,
        difficulty_level: u8::try_from(difficulty).map_err(|_| {
            AppError::database(format!("Invalid difficulty_level {difficulty} in exercises"))
        })?,
        calories_per_minute: row.get("calories_per_minute"),
        instructions: row.get("instructions"),
    })
}
