// ABOUTME: Domain records shared by the engines, storage, and HTTP layers
// ABOUTME: Re-exports landmark, exercise, user, progress, and analysis types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine output types
pub mod analysis;
/// Exercise catalog records
pub mod exercise;
/// Pose landmarks
pub mod landmark;
/// Training history
pub mod progress;
/// User profile and session types
pub mod user;

pub use analysis::{FormAnalysisResult, ProgressReport, ProgressTrends, WorkoutRecommendation};
pub use exercise::{ExerciseCategory, ExerciseInstance, ExerciseRecord};
pub use landmark::{Landmark, LandmarkSet};
pub use progress::{ProgressMetrics, ProgressRecord};
pub use user::{FitnessLevel, SessionType, UserProfile};
