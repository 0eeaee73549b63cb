// ABOUTME: Domain error types for geometry, form scoring, and workout generation
// ABOUTME: Each engine converts these to defaults at a single policy point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Error Types
//!
//! - `GeometryError` - angle computation could not be performed
//! - `ScoringError` - a per-exercise heuristic could not produce a score
//! - `WorkoutError` - the plan pipeline could not produce a plan

use coach_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Errors from vector-angle computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// One of the two vectors has zero length
    #[error("degenerate geometry: zero-length vector at vertex")]
    Degenerate,
    /// An input coordinate is NaN or infinite
    #[error("non-finite coordinate in angle input")]
    NonFinite,
}

/// Errors from exercise-specific form heuristics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Landmark set too short for a required index
    #[error("landmark {index} missing (set has {available})")]
    MissingLandmark {
        /// Required index
        index: usize,
        /// Length of the landmark set
        available: usize,
    },
    /// Angle could not be computed
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// A ratio had a zero denominator
    #[error("division by zero computing {quantity}")]
    DivisionByZero {
        /// Name of the ratio
        quantity: &'static str,
    },
    /// Arithmetic produced NaN or infinity
    #[error("non-finite result computing {quantity}")]
    NonFinite {
        /// Name of the value
        quantity: &'static str,
    },
}

/// Errors from the workout plan pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// The catalog entry cannot be scored
    #[error("exercise '{name}' has invalid {field}")]
    InvalidExercise {
        /// Exercise name
        name: String,
        /// Offending field
        field: &'static str,
    },
}

impl WorkoutError {
    /// Create an "invalid exercise" error
    #[must_use]
    pub fn invalid_exercise(name: impl Into<String>, field: &'static str) -> Self {
        Self::InvalidExercise {
            name: name.into(),
            field,
        }
    }
}

impl From<WorkoutError> for AppError {
    fn from(error: WorkoutError) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string())
    }
}
