// ABOUTME: Form analysis and workout intelligence engines for the Pierre form coach
// ABOUTME: Pure algorithms over typed records from coach-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Intelligence
//!
//! Algorithms behind the form coach. Nothing here touches the network or
//! storage; callers hand in landmarks, profiles, history and a catalog
//! snapshot, and get typed results back.
//!
//! ## Modules
//!
//! - **geometry**: Joint angles from three landmarks
//! - **form**: Form scoring, feedback, corrections, confidence, rep tracking
//! - **workout**: Exercise selection, parameterization, plan summaries
//! - **progress**: Insights from recent training history

/// Domain error types
pub mod errors;

/// Form scoring and rep tracking engine
pub mod form;

/// Vector-angle computation
pub mod geometry;

/// Progress analysis
pub mod progress;

/// Workout selection and optimization engine
pub mod workout;

pub use errors::{GeometryError, ScoringError, WorkoutError};
pub use form::{ExerciseType, FormAnalysisEngine, RepTracker};
pub use progress::ProgressAnalyzer;
pub use workout::{ExerciseCatalog, ExerciseFilter, WorkoutEngine};
