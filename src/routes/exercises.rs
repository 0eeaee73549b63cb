// ABOUTME: Route handler for browsing the exercise library
// ABOUTME: GET /exercises filters the catalog snapshot by category, muscle group, difficulty, and search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use coach_core::models::{ExerciseCategory, ExerciseRecord};
use coach_intelligence::ExerciseFilter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters of `GET /exercises`
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseQuery {
    /// Category name, case-insensitive
    pub category: Option<String>,
    /// Targeted muscle group
    pub muscle_group: Option<String>,
    /// Maximum difficulty
    pub difficulty: Option<u8>,
    /// Required equipment
    pub equipment: Option<String>,
    /// Name or category substring
    pub search: Option<String>,
}

impl From<ExerciseQuery> for ExerciseFilter {
    fn from(query: ExerciseQuery) -> Self {
        Self {
            category: query.category.as_deref().map(ExerciseCategory::parse),
            muscle_group: query.muscle_group,
            difficulty: query.difficulty,
            equipment: query.equipment,
            search: query.search.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Response of `GET /exercises`
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseListResponse {
    /// Matching exercises, sorted by name
    pub exercises: Vec<ExerciseRecord>,
    /// Number of matches
    pub total: usize,
}

/// Exercise library routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise library routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/exercises", get(Self::handle_list_exercises))
            .with_state(resources)
    }

    /// Handle GET /exercises
    async fn handle_list_exercises(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ExerciseQuery>,
    ) -> Result<Response, AppError> {
        let exercises = resources.catalog.filter(&query.into());

        let response = ExerciseListResponse {
            total: exercises.len(),
            exercises,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
