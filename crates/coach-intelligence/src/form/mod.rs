// ABOUTME: Form scoring and rep tracking engine
// ABOUTME: Exercise heuristics, feedback, corrections, confidence, and the composing engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Detection confidence
pub mod confidence;
/// Framing and technique corrections
pub mod corrections;
/// Engine composing the form pipeline
pub mod engine;
/// Supported exercise types and configuration
pub mod exercise;
/// Tiered feedback messages
pub mod feedback;
/// Exercise-specific scoring heuristics
pub mod scorer;

pub use confidence::confidence;
pub use corrections::CorrectionAdvisor;
pub use engine::{FormAnalysisEngine, RepTracker, NO_POSE_MESSAGE};
pub use exercise::{ExerciseConfig, ExerciseType};
pub use feedback::FeedbackGenerator;
pub use scorer::{FormScorer, NEUTRAL_SCORE};
