// ABOUTME: Route handlers for form analysis and progress analysis
// ABOUTME: POST /analyze/form scores a camera frame; POST /analyze/progress summarizes history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{require_user_id, user_id_from_headers};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::{form_analysis, progress_analysis};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /analyze/form`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeFormRequest {
    /// Base64-encoded image frame
    #[serde(default)]
    pub frame: Option<String>,
    /// Exercise to score; defaults to push-ups
    #[serde(default)]
    pub exercise_type: Option<String>,
}

/// Analysis routes handler
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create all analysis routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/analyze/form", post(Self::handle_analyze_form))
            .route("/analyze/progress", post(Self::handle_analyze_progress))
            .with_state(resources)
    }

    /// Handle POST /analyze/form
    async fn handle_analyze_form(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Option<Json<AnalyzeFormRequest>>,
    ) -> Result<Response, AppError> {
        let request = body.map(|Json(b)| b).unwrap_or_default();

        let frame = request
            .frame
            .ok_or_else(|| AppError::missing_field("Video frame data required"))?;
        let exercise_type = request
            .exercise_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| form_analysis::DEFAULT_EXERCISE_TYPE.to_owned());
        let user_id = user_id_from_headers(&headers);

        let result = form_analysis::analyze_frame(
            &resources,
            &frame,
            &exercise_type,
            user_id.as_deref(),
        )
        .await?;

        Ok((StatusCode::OK, Json(result)).into_response())
    }

    /// Handle POST /analyze/progress
    async fn handle_analyze_progress(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = require_user_id(&headers)?;

        let report = progress_analysis::analyze_progress(&resources, &user_id).await;

        Ok((StatusCode::OK, Json(report)).into_response())
    }
}
