// ABOUTME: Route handler for personalized workout generation
// ABOUTME: POST /generate/workout builds, stores, and returns a plan for the calling user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::require_user_id;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::workout_generation;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use coach_core::models::SessionType;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /generate/workout`
#[derive(Debug, Default, Deserialize)]
pub struct GenerateWorkoutRequest {
    /// `full_body`, `cardio`, or `strength`; anything else means full body
    #[serde(default)]
    pub session_type: Option<String>,
}

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/generate/workout", post(Self::handle_generate_workout))
            .with_state(resources)
    }

    /// Handle POST /generate/workout
    async fn handle_generate_workout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Option<Json<GenerateWorkoutRequest>>,
    ) -> Result<Response, AppError> {
        let user_id = require_user_id(&headers)?;
        let session = body
            .and_then(|Json(b)| b.session_type)
            .map_or_else(SessionType::default, |s| SessionType::parse(&s));

        let workout = workout_generation::generate_workout(&resources, &user_id, session).await;

        Ok((StatusCode::OK, Json(workout)).into_response())
    }
}
