// ABOUTME: Corrective cues for camera framing and exercise technique
// ABOUTME: Visibility correction first, then static cues for push-ups and squats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::ExerciseType;
use coach_core::models::LandmarkSet;

/// Minimum share of visible landmarks before asking the user to reframe
pub const MIN_VISIBLE_RATIO: f64 = 0.7;

/// Correction shown when too few landmarks are visible
pub const VISIBILITY_CORRECTION: &str = "Ensure your full body is visible in the camera frame.";

/// Builds the corrections list for a frame
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrectionAdvisor;

impl CorrectionAdvisor {
    /// Corrections for a supported exercise
    #[must_use]
    pub fn advise(exercise: ExerciseType, landmarks: &LandmarkSet) -> Vec<String> {
        let mut corrections = Vec::new();

        let total = landmarks.len();
        if total > 0 {
            let visible_ratio = landmarks.visible_count() as f64 / total as f64;
            if visible_ratio < MIN_VISIBLE_RATIO {
                corrections.push(VISIBILITY_CORRECTION.to_owned());
            }
        }

        let cues: &[&str] = match exercise {
            ExerciseType::PushUps => &[
                "Focus on controlled movement up and down.",
                "Engage your core to maintain body alignment.",
            ],
            ExerciseType::Squats => &[
                "Initiate movement by pushing hips back.",
                "Keep weight distributed across your feet.",
            ],
            ExerciseType::Deadlifts | ExerciseType::Burpees => &[],
        };
        corrections.extend(cues.iter().map(|cue| (*cue).to_owned()));

        corrections
    }
}
