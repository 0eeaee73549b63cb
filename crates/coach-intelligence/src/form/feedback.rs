// ABOUTME: Tiered form feedback and exercise-specific coaching tips
// ABOUTME: General tier message first, then up to two tips when the score is below 0.7
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::ExerciseType;

/// Score at or above which form is excellent
pub const EXCELLENT_THRESHOLD: f64 = 0.9;
/// Score at or above which form is good; below it tips are added
pub const GOOD_THRESHOLD: f64 = 0.7;
/// Score at or above which form merely needs improvement
pub const FAIR_THRESHOLD: f64 = 0.5;

/// Builds the feedback list for a scored frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    /// Feedback for a supported exercise
    #[must_use]
    pub fn generate(exercise: ExerciseType, score: f64) -> Vec<String> {
        let mut feedback = vec![Self::tier_message(score).to_owned()];
        if score < GOOD_THRESHOLD {
            feedback.extend(Self::tips(exercise).iter().map(|tip| (*tip).to_owned()));
        }
        feedback
    }

    /// General message for the score tier
    #[must_use]
    pub fn tier_message(score: f64) -> &'static str {
        if score >= EXCELLENT_THRESHOLD {
            "Excellent form! Keep it up!"
        } else if score >= GOOD_THRESHOLD {
            "Good form. Minor adjustments needed."
        } else if score >= FAIR_THRESHOLD {
            "Form needs improvement. Focus on technique."
        } else {
            "Poor form detected. Please review exercise instructions."
        }
    }

    fn tips(exercise: ExerciseType) -> &'static [&'static str] {
        match exercise {
            ExerciseType::PushUps => &[
                "Keep your body in a straight line from head to heels.",
                "Lower your chest closer to the ground.",
            ],
            ExerciseType::Squats => &[
                "Go deeper - thighs parallel to the ground.",
                "Keep your chest up and knees aligned with toes.",
            ],
            ExerciseType::Deadlifts => &[
                "Keep your back straight and chest up.",
                "Drive through your heels and push hips forward.",
            ],
            ExerciseType::Burpees => &[],
        }
    }
}
