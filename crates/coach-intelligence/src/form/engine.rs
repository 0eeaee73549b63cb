// ABOUTME: Form analysis engine composing scoring, feedback, corrections, and rep tracking
// ABOUTME: Turns one frame of landmarks into a FormAnalysisResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::confidence::confidence;
use super::corrections::CorrectionAdvisor;
use super::exercise::ExerciseType;
use super::feedback::FeedbackGenerator;
use super::scorer::{FormScorer, NEUTRAL_SCORE};
use async_trait::async_trait;
use coach_core::errors::AppResult;
use coach_core::models::{FormAnalysisResult, LandmarkSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Guidance returned when the estimator found no body
pub const NO_POSE_MESSAGE: &str =
    "Unable to detect pose. Please ensure you're clearly visible in the camera.";

/// Per-user, per-exercise repetition counter
#[async_trait]
pub trait RepTracker: Send + Sync {
    /// Atomically increment the counter and refresh its expiry
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached
    async fn increment(&self, user_id: &str, exercise_type: &str) -> AppResult<u32>;
}

/// Composes the form pipeline around a shared rep tracker
#[derive(Clone)]
pub struct FormAnalysisEngine {
    rep_tracker: Arc<dyn RepTracker>,
}

impl FormAnalysisEngine {
    /// Create an engine backed by the given tracker
    #[must_use]
    pub fn new(rep_tracker: Arc<dyn RepTracker>) -> Self {
        Self { rep_tracker }
    }

    /// Analyze one frame.
    ///
    /// `exercise_type` is the raw request value. Unsupported types get a
    /// neutral result, and a missing `user_id` means no rep counting.
    pub async fn analyze(
        &self,
        landmarks: LandmarkSet,
        exercise_type: &str,
        user_id: Option<&str>,
    ) -> FormAnalysisResult {
        if landmarks.is_empty() {
            debug!(exercise.type = %exercise_type, "No pose detected in frame");
            return FormAnalysisResult {
                form_score: 0.0,
                feedback: vec![NO_POSE_MESSAGE.to_owned()],
                corrections: Vec::new(),
                rep_count: 0,
                confidence: 0.0,
                landmarks,
            };
        }

        let Some(exercise) = ExerciseType::parse(exercise_type) else {
            debug!(exercise.type = %exercise_type, "Unsupported exercise type");
            return FormAnalysisResult {
                form_score: NEUTRAL_SCORE,
                feedback: vec![format!(
                    "Exercise type '{exercise_type}' not yet supported for detailed analysis."
                )],
                corrections: Vec::new(),
                rep_count: 0,
                confidence: NEUTRAL_SCORE,
                landmarks,
            };
        };

        let form_score = FormScorer::score(exercise, &landmarks);
        let feedback = FeedbackGenerator::generate(exercise, form_score);
        let corrections = CorrectionAdvisor::advise(exercise, &landmarks);
        let rep_count = self.count_rep(user_id, exercise).await;
        let confidence = confidence(&landmarks);

        debug!(
            exercise.type = %exercise,
            form.score = form_score,
            form.confidence = confidence,
            rep.count = rep_count,
            "Frame analyzed"
        );

        FormAnalysisResult {
            form_score,
            feedback,
            corrections,
            rep_count,
            confidence,
            landmarks,
        }
    }

    async fn count_rep(&self, user_id: Option<&str>, exercise: ExerciseType) -> u32 {
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            return 0;
        };
        match self.rep_tracker.increment(user_id, exercise.as_str()).await {
            Ok(count) => count,
            Err(e) => {
                warn!(
                    user.id = %user_id,
                    exercise.type = %exercise,
                    error = %e,
                    "Rep counter unavailable, reporting 0"
                );
                0
            }
        }
    }
}
