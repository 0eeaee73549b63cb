// ABOUTME: Form analysis service orchestrating frame decoding, pose estimation, and scoring
// ABOUTME: Persists results in the background for identified users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use base64::{engine::general_purpose::STANDARD, Engine};
use coach_core::models::{FormAnalysisResult, LandmarkSet};
use std::time::Instant;
use tracing::{error, warn};

/// Exercise analyzed when the request names none
pub const DEFAULT_EXERCISE_TYPE: &str = "push-ups";

/// Decode a base64 frame payload
///
/// # Errors
///
/// Returns `MissingRequiredField` for an empty payload and `InvalidFormat`
/// when it is not valid base64
pub fn decode_frame(encoded: &str) -> AppResult<Vec<u8>> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(AppError::missing_field("Video frame data required"));
    }

    STANDARD
        .decode(encoded)
        .map_err(|e| AppError::invalid_format(format!("Frame is not valid base64: {e}")))
}

/// Analyze one encoded frame for `exercise_type`
///
/// Estimator faults count as "no pose". When `user_id` is present the rep
/// counter advances and the result is stored on a background task.
///
/// # Errors
///
/// Returns an error only if the frame cannot be decoded
pub async fn analyze_frame(
    resources: &ServerResources,
    encoded_frame: &str,
    exercise_type: &str,
    user_id: Option<&str>,
) -> AppResult<FormAnalysisResult> {
    let frame = decode_frame(encoded_frame)?;

    let landmarks = match resources.pose_estimator.estimate(&frame).await {
        Ok(landmarks) => landmarks,
        Err(e) => {
            warn!(
                error = %e,
                pose.backend = resources.pose_estimator.name(),
                "Pose estimation failed, treating frame as empty"
            );
            LandmarkSet::empty()
        }
    };

    let result = resources
        .form_engine
        .analyze(landmarks, exercise_type, user_id)
        .await;

    AppLogger::log_form_analysis(
        user_id,
        exercise_type,
        result.form_score,
        result.rep_count,
        result.confidence,
    );

    if let Some(user_id) = user_id {
        spawn_persist(resources, user_id, exercise_type, &result);
    }

    Ok(result)
}

fn spawn_persist(
    resources: &ServerResources,
    user_id: &str,
    exercise_type: &str,
    result: &FormAnalysisResult,
) {
    let database = resources.database.clone();
    let user_id = user_id.to_owned();
    let exercise_type = exercise_type.to_owned();
    let result = result.clone();

    tokio::spawn(async move {
        let started = Instant::now();
        let outcome = database
            .analyses()
            .record_analysis(&user_id, &exercise_type, &result)
            .await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        AppLogger::log_database_operation("insert", "form_analysis", outcome.is_ok(), elapsed_ms);
        if let Err(e) = outcome {
            error!(user.id = %user_id, error = %e, "Failed to store form analysis");
        }
    });
}
