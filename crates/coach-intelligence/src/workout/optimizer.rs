// ABOUTME: Sets, reps, rest, and coaching notes for selected exercises
// ABOUTME: Parameters follow fitness level, category, difficulty, and medical conditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::WorkoutError;
use coach_core::models::{
    ExerciseCategory, ExerciseInstance, ExerciseRecord, FitnessLevel, UserProfile,
};
use std::ops::RangeInclusive;

/// Work interval for cardio exercises, stored in `reps` as seconds
pub const CARDIO_WORK_SECONDS: u32 = 30;
/// Extra rest added to cardio exercises
pub const CARDIO_EXTRA_REST_SECONDS: u32 = 15;
/// Difficulty above which reps are reduced
pub const HIGH_DIFFICULTY: u8 = 7;
/// Floor for reduced reps
pub const MIN_REPS: u32 = 6;

/// Difficulty ratings the optimizer can parameterize
pub const VALID_DIFFICULTY: RangeInclusive<u8> = 1..=10;

/// Always the last note on every exercise
pub const MOTIVATION_NOTE: &str = "You've got this! Focus on your breathing.";

/// Base parameters for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseParameters {
    /// Sets per exercise
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
}

impl BaseParameters {
    /// Defaults for a fitness level
    #[must_use]
    pub const fn for_level(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner => Self {
                sets: 2,
                reps: 12,
                rest_seconds: 60,
            },
            FitnessLevel::Intermediate => Self {
                sets: 3,
                reps: 10,
                rest_seconds: 45,
            },
            FitnessLevel::Advanced => Self {
                sets: 4,
                reps: 8,
                rest_seconds: 30,
            },
        }
    }
}

/// Turns catalog records into parameterized plan entries
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterOptimizer;

impl ParameterOptimizer {
    /// Parameterize every selected exercise
    ///
    /// An empty selection gives an empty plan.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidExercise`] when an entry's difficulty is
    /// outside 1..=10. Selection never yields one, but its first-entries
    /// fallback can.
    pub fn optimize(
        exercises: Vec<ExerciseRecord>,
        profile: &UserProfile,
    ) -> Result<Vec<ExerciseInstance>, WorkoutError> {
        exercises
            .into_iter()
            .map(|exercise| {
                if VALID_DIFFICULTY.contains(&exercise.difficulty_level) {
                    Ok(Self::parameterize(exercise, profile))
                } else {
                    Err(WorkoutError::invalid_exercise(exercise.name, "difficulty_level"))
                }
            })
            .collect()
    }

    /// Parameterize one exercise
    #[must_use]
    pub fn parameterize(exercise: ExerciseRecord, profile: &UserProfile) -> ExerciseInstance {
        let BaseParameters {
            sets,
            mut reps,
            mut rest_seconds,
        } = BaseParameters::for_level(profile.fitness_level);

        if exercise.category == ExerciseCategory::Cardio {
            reps = CARDIO_WORK_SECONDS;
            rest_seconds += CARDIO_EXTRA_REST_SECONDS;
        }

        if exercise.difficulty_level > HIGH_DIFFICULTY {
            reps = reps.saturating_sub(2).max(MIN_REPS);
        }

        let notes = Self::notes(&exercise, profile);

        ExerciseInstance {
            exercise,
            sets,
            reps,
            rest_seconds,
            notes,
        }
    }

    fn notes(exercise: &ExerciseRecord, profile: &UserProfile) -> Vec<String> {
        let mut notes = Vec::new();

        if profile.fitness_level == FitnessLevel::Beginner {
            notes.push("Focus on proper form over speed.".to_owned());
            notes.push("Start with bodyweight if using equipment is too difficult.".to_owned());
        }

        if profile.has_condition("back_pain") && exercise.targets("back") {
            notes.push("Avoid if experiencing back pain. Consider modifications.".to_owned());
        }
        if profile.has_condition("knee_issues") && exercise.targets("legs") {
            notes.push(
                "Use reduced range of motion if experiencing knee discomfort.".to_owned(),
            );
        }

        notes.push(MOTIVATION_NOTE.to_owned());
        notes
    }
}
