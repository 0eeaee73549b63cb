// ABOUTME: Workout selection and optimization engine
// ABOUTME: Catalog snapshot, selector, parameter optimizer, plan summaries, and the composing engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exercise catalog snapshot and library filters
pub mod catalog;
/// Engine composing the plan pipeline
pub mod engine;
/// Sets, reps, rest, and notes
pub mod optimizer;
/// Exercise selection
pub mod selector;
/// Duration, difficulty, adaptations, reasoning, fallback
pub mod summary;

pub use catalog::{ExerciseCatalog, ExerciseFilter};
pub use engine::WorkoutEngine;
pub use optimizer::{BaseParameters, ParameterOptimizer};
pub use selector::{difficulty_range, WorkoutSelector, MAX_EXERCISES, TARGET_MUSCLE_GROUPS};
pub use summary::fallback_plan;
