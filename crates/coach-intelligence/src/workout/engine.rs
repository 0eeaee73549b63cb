// ABOUTME: Workout plan generation composing selection, parameterization, and summaries
// ABOUTME: Unusable catalog data yields the fixed fallback plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::WorkoutError;
use crate::workout::catalog::ExerciseCatalog;
use crate::workout::optimizer::ParameterOptimizer;
use crate::workout::selector::WorkoutSelector;
use crate::workout::summary::{
    adaptations, assess_difficulty, estimate_duration, fallback_plan, reasoning,
};
use coach_core::models::{ProgressRecord, SessionType, UserProfile, WorkoutRecommendation};
use std::sync::Arc;
use tracing::{debug, warn};

/// Generates personalized workout plans from the catalog snapshot
#[derive(Debug, Clone)]
pub struct WorkoutEngine {
    catalog: Arc<ExerciseCatalog>,
}

impl WorkoutEngine {
    /// Create an engine over a shared catalog snapshot
    #[must_use]
    pub const fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self { catalog }
    }

    /// Catalog used for selection
    #[must_use]
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Generate a plan, returning the fallback plan on any fault
    #[must_use]
    pub fn generate(
        &self,
        profile: &UserProfile,
        progress: &[ProgressRecord],
        session: SessionType,
    ) -> WorkoutRecommendation {
        match self.try_generate(profile, progress, session) {
            Ok(plan) => plan,
            Err(e) => {
                warn!(
                    error = %e,
                    session.type = session.as_str(),
                    "Workout generation failed, returning fallback plan"
                );
                fallback_plan()
            }
        }
    }

    /// Generate a plan, reporting pipeline faults
    ///
    /// When nothing is selectable (including an empty catalog) the plan has
    /// no exercises, lasts the warm-up and cool-down, and rates difficulty 1.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidExercise`] when a selected entry cannot
    /// be parameterized.
    pub fn try_generate(
        &self,
        profile: &UserProfile,
        progress: &[ProgressRecord],
        session: SessionType,
    ) -> Result<WorkoutRecommendation, WorkoutError> {
        let selected = WorkoutSelector::new(profile, progress).select(&self.catalog, session);
        let exercises = ParameterOptimizer::optimize(selected, profile)?;
        let estimated_duration = estimate_duration(&exercises);
        let difficulty_level = assess_difficulty(&exercises, profile.fitness_level);

        debug!(
            session.type = session.as_str(),
            exercise.count = exercises.len(),
            workout.duration = estimated_duration,
            workout.difficulty = difficulty_level,
            "Generated workout plan"
        );

        Ok(WorkoutRecommendation {
            reasoning: reasoning(session, profile, exercises.len()),
            adaptations: adaptations(profile.fitness_level),
            exercises,
            estimated_duration,
            difficulty_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::models::{ExerciseCategory, ExerciseRecord, FitnessLevel};

    fn record(
        name: &str,
        category: ExerciseCategory,
        groups: &[&str],
        difficulty: u8,
    ) -> ExerciseRecord {
        ExerciseRecord {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_owned(),
            category,
            muscle_groups: groups.iter().map(|g| (*g).to_owned()).collect(),
            equipment: Vec::new(),
            difficulty_level: difficulty,
            calories_per_minute: None,
            instructions: None,
        }
    }

    fn engine(records: Vec<ExerciseRecord>) -> WorkoutEngine {
        WorkoutEngine::new(Arc::new(ExerciseCatalog::new(records)))
    }

    #[test]
    fn test_plan_for_beginner() {
        let engine = engine(vec![
            record("Push-ups", ExerciseCategory::Strength, &["chest", "arms"], 3),
            record("Squats", ExerciseCategory::Strength, &["legs", "glutes"], 2),
        ]);
        let profile = UserProfile::default();

        let plan = engine.generate(&profile, &[], SessionType::FullBody);

        let names: Vec<&str> = plan
            .exercises
            .iter()
            .map(|e| e.exercise.name.as_str())
            .collect();
        assert_eq!(names, vec!["Push-ups", "Squats"]);
        assert!(plan.exercises.iter().all(|e| e.sets == 2 && e.reps == 12));
        // 2 * 2 * (12*2 + 60) + 600 = 936 s
        assert_eq!(plan.estimated_duration, 15);
        assert_eq!(plan.difficulty_level, 1);
        assert_eq!(plan.adaptations.len(), 5);
        assert!(plan.reasoning.contains("includes 2 exercises"));
    }

    #[test]
    fn test_empty_catalog_gives_empty_plan() {
        let plan =
            engine(Vec::new()).generate(&UserProfile::default(), &[], SessionType::FullBody);

        assert!(plan.exercises.is_empty());
        assert_eq!(plan.estimated_duration, 10);
        assert_eq!(plan.difficulty_level, 1);
        assert!(plan.reasoning.contains("includes 0 exercises"));
        assert_eq!(plan.adaptations, adaptations(FitnessLevel::Beginner));
    }

    #[test]
    fn test_nothing_eligible_gives_empty_plan() {
        let engine = engine(vec![record(
            "Jumping Jacks",
            ExerciseCategory::Cardio,
            &["legs", "shoulders"],
            1,
        )]);
        let profile = UserProfile {
            fitness_level: FitnessLevel::Advanced,
            ..UserProfile::default()
        };

        let plan = engine.generate(&profile, &[], SessionType::FullBody);

        assert!(plan.exercises.is_empty());
        assert_eq!(plan.estimated_duration, 10);
        assert_eq!(plan.difficulty_level, 1);
        assert_ne!(plan, fallback_plan());
    }

    #[test]
    fn test_unparameterizable_selection_returns_fallback() {
        // The nameless entry breaks scoring, so selection takes the first
        // entries, and the unrated one cannot be parameterized
        let engine = engine(vec![
            record("", ExerciseCategory::Strength, &["chest"], 3),
            record("Mystery Lift", ExerciseCategory::Strength, &["back"], 0),
        ]);
        let profile = UserProfile::default();

        assert!(matches!(
            engine.try_generate(&profile, &[], SessionType::FullBody),
            Err(WorkoutError::InvalidExercise { .. })
        ));
        assert_eq!(
            engine.generate(&profile, &[], SessionType::FullBody),
            fallback_plan()
        );
    }

    #[test]
    fn test_advanced_cardio_session() {
        let engine = engine(vec![
            record("Burpees", ExerciseCategory::Cardio, &["legs", "chest", "core"], 6),
            record("Deadlifts", ExerciseCategory::Strength, &["back", "legs"], 7),
        ]);
        let profile = UserProfile {
            fitness_level: FitnessLevel::Advanced,
            ..UserProfile::default()
        };

        let plan = engine.generate(&profile, &[], SessionType::Cardio);

        assert_eq!(plan.exercises.len(), 1);
        let burpees = &plan.exercises[0];
        assert_eq!((burpees.sets, burpees.reps, burpees.rest_seconds), (4, 30, 45));
        // min(10, 6 + 1)
        assert_eq!(plan.difficulty_level, 7);
    }
}
