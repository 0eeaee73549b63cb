// ABOUTME: Engine output types for form analysis, workout plans, and progress reports
// ABOUTME: These are the JSON bodies returned by the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::ExerciseInstance;
use super::landmark::LandmarkSet;
use serde::{Deserialize, Serialize};

/// Result of scoring one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormAnalysisResult {
    /// Form quality in [0, 1]
    pub form_score: f64,
    /// Tiered feedback, most general first
    pub feedback: Vec<String>,
    /// Actionable corrections
    pub corrections: Vec<String>,
    /// Repetitions counted in the current window
    pub rep_count: u32,
    /// Share of visible landmarks in [0, 1]
    pub confidence: f64,
    /// Landmarks the result was computed from. Persisted, not returned.
    #[serde(skip)]
    pub landmarks: LandmarkSet,
}

/// A personalized workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    /// At most six parameterized exercises
    pub exercises: Vec<ExerciseInstance>,
    /// Estimated duration in minutes
    pub estimated_duration: u32,
    /// Plan difficulty in [1, 10]
    pub difficulty_level: u8,
    /// How to scale the plan
    pub adaptations: Vec<String>,
    /// Why the plan was built this way
    pub reasoning: String,
}

/// Trends derived from recent history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressTrends {
    /// Set when any strength metric improved over the week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_improvement: Option<bool>,
    /// Calories burned across the most recent week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_calories: Option<f64>,
}

/// Progress analysis for a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Observations about recent training
    pub insights: Vec<String>,
    /// Numeric trends
    pub trends: ProgressTrends,
    /// Suggested next steps
    pub recommendations: Vec<String>,
}
