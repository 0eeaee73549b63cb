// ABOUTME: Exercise selection balancing muscle-group coverage, novelty, and goals
// ABOUTME: Filters the catalog by level and session, then picks up to six exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Selector
//!
//! Selection runs in three passes over the eligible catalog entries:
//!
//! 1. keep entries within the difficulty band for the user's level, and
//!    within the session's category for cardio or strength sessions
//! 2. for each target muscle group, take the best-scoring entry covering it
//! 3. fill remaining slots with the best-scoring compound movements
//!
//! Scores reward novelty (not completed during the most recent week) and
//! alignment with the user's goals. Ties go to the entry seen first.

use crate::errors::WorkoutError;
use crate::workout::catalog::ExerciseCatalog;
use coach_core::models::progress::RECENT_WINDOW;
use coach_core::models::{
    ExerciseCategory, ExerciseRecord, FitnessLevel, ProgressRecord, SessionType, UserProfile,
};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use tracing::warn;

/// Muscle groups every plan tries to cover, in priority order
pub const TARGET_MUSCLE_GROUPS: [&str; 6] = ["chest", "back", "legs", "shoulders", "arms", "core"];

/// Maximum number of exercises in a plan
pub const MAX_EXERCISES: usize = 6;

/// Number of catalog entries used when scoring fails
pub const SELECTION_FALLBACK_COUNT: usize = 4;

/// Calories per minute above which an exercise supports weight loss
pub const WEIGHT_LOSS_CALORIES_PER_MINUTE: f64 = 8.0;

/// Difficulty band for a fitness level
#[must_use]
pub const fn difficulty_range(level: FitnessLevel) -> RangeInclusive<u8> {
    match level {
        FitnessLevel::Beginner => 1..=4,
        FitnessLevel::Intermediate => 3..=7,
        FitnessLevel::Advanced => 5..=10,
    }
}

/// Scores and selects catalog exercises for one user
pub struct WorkoutSelector<'a> {
    profile: &'a UserProfile,
    recently_completed: HashSet<&'a str>,
}

impl<'a> WorkoutSelector<'a> {
    /// Build a selector for a profile and date-descending history
    #[must_use]
    pub fn new(profile: &'a UserProfile, progress: &'a [ProgressRecord]) -> Self {
        let recently_completed = progress
            .iter()
            .take(RECENT_WINDOW)
            .flat_map(|record| record.metrics.exercises_completed.iter())
            .map(String::as_str)
            .collect();
        Self {
            profile,
            recently_completed,
        }
    }

    /// Select exercises, falling back to the first catalog entries if scoring fails
    #[must_use]
    pub fn select(&self, catalog: &ExerciseCatalog, session: SessionType) -> Vec<ExerciseRecord> {
        match self.try_select(catalog, session) {
            Ok(selected) => selected,
            Err(e) => {
                warn!(error = %e, "Exercise scoring failed, using first catalog entries");
                catalog
                    .exercises()
                    .iter()
                    .take(SELECTION_FALLBACK_COUNT)
                    .cloned()
                    .collect()
            }
        }
    }

    /// Select exercises, reporting scoring faults
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidExercise`] when an eligible catalog
    /// entry carries data that cannot be scored.
    pub fn try_select(
        &self,
        catalog: &ExerciseCatalog,
        session: SessionType,
    ) -> Result<Vec<ExerciseRecord>, WorkoutError> {
        let band = difficulty_range(self.profile.fitness_level);
        let session_category = match session {
            SessionType::Cardio => Some(ExerciseCategory::Cardio),
            SessionType::Strength => Some(ExerciseCategory::Strength),
            SessionType::FullBody => None,
        };

        let candidates = catalog
            .exercises()
            .iter()
            .filter(|ex| band.contains(&ex.difficulty_level))
            .filter(|ex| session_category.is_none_or(|c| ex.category == c))
            .map(|ex| self.score(ex).map(|score| (ex, score)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut selected: Vec<&ExerciseRecord> = Vec::with_capacity(MAX_EXERCISES);

        for group in TARGET_MUSCLE_GROUPS {
            let best = best_of(candidates.iter().filter(|(ex, _)| ex.targets(group)));
            if let Some(best) = best {
                if !contains(&selected, best) {
                    selected.push(best);
                }
            }
        }

        while selected.len() < MAX_EXERCISES {
            let next = best_of(
                candidates
                    .iter()
                    .filter(|(ex, _)| ex.is_compound() && !contains(&selected, ex)),
            );
            match next {
                Some(ex) => selected.push(ex),
                None => break,
            }
        }

        selected.truncate(MAX_EXERCISES);
        Ok(selected.into_iter().cloned().collect())
    }

    /// Preference score for one exercise
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidExercise`] for a nameless entry or a
    /// negative or non-finite calorie rate.
    pub fn score(&self, exercise: &ExerciseRecord) -> Result<f64, WorkoutError> {
        if exercise.name.trim().is_empty() {
            return Err(WorkoutError::invalid_exercise(&exercise.id, "name"));
        }
        if let Some(calories) = exercise.calories_per_minute {
            if !calories.is_finite() || calories < 0.0 {
                return Err(WorkoutError::invalid_exercise(
                    &exercise.name,
                    "calories_per_minute",
                ));
            }
        }

        let mut score = 0.0;

        if !self.recently_completed.contains(exercise.name.as_str()) {
            score += 2.0;
        }

        if self.profile.has_goal("strength") && exercise.category == ExerciseCategory::Strength {
            score += 1.0;
        }
        if self.profile.has_goal("cardio") && exercise.category == ExerciseCategory::Cardio {
            score += 1.0;
        }
        if self.profile.has_goal("weight_loss")
            && exercise
                .calories_per_minute
                .is_some_and(|c| c > WEIGHT_LOSS_CALORIES_PER_MINUTE)
        {
            score += 1.0;
        }

        if self.profile.fitness_level == FitnessLevel::Advanced {
            score += 0.1 * f64::from(exercise.difficulty_level);
        }

        Ok(score)
    }
}

/// Highest-scoring entry; the first one wins ties
fn best_of<'e, 'r: 'e, I>(scored: I) -> Option<&'r ExerciseRecord>
where
    I: Iterator<Item = &'e (&'r ExerciseRecord, f64)>,
{
    let mut best: Option<(&ExerciseRecord, f64)> = None;
    for &(ex, score) in scored {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((ex, score));
        }
    }
    best.map(|(ex, _)| ex)
}

fn contains(selected: &[&ExerciseRecord], exercise: &ExerciseRecord) -> bool {
    selected.iter().any(|chosen| chosen.id == exercise.id)
}
