// ABOUTME: Plan-level derivations: duration, difficulty, adaptations, reasoning, fallback
// ABOUTME: Pure functions over the parameterized exercise list and the user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::models::{
    ExerciseCategory, ExerciseInstance, ExerciseRecord, FitnessLevel, SessionType, UserProfile,
    WorkoutRecommendation,
};

/// Warm-up plus cool-down allowance in seconds
pub const WARMUP_COOLDOWN_SECONDS: u64 = 600;
/// Seconds per repetition used for duration estimates
pub const SECONDS_PER_REP: u64 = 2;

/// Estimated minutes: `(Σ sets·(reps·2 + rest) + 600) / 60`, integer division
#[must_use]
pub fn estimate_duration(exercises: &[ExerciseInstance]) -> u32 {
    let work: u64 = exercises
        .iter()
        .map(|ex| {
            u64::from(ex.sets) * (u64::from(ex.reps) * SECONDS_PER_REP + u64::from(ex.rest_seconds))
        })
        .sum();
    let minutes = (work + WARMUP_COOLDOWN_SECONDS) / 60;
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Plan difficulty in [1, 10].
///
/// Mean exercise difficulty, shifted down two for beginners and up one for
/// advanced users, rounded half-to-even. An empty plan rates 1.
#[must_use]
pub fn assess_difficulty(exercises: &[ExerciseInstance], level: FitnessLevel) -> u8 {
    if exercises.is_empty() {
        return 1;
    }
    let total: f64 = exercises
        .iter()
        .map(|ex| f64::from(ex.exercise.difficulty_level))
        .sum();
    let mean = total / exercises.len() as f64;

    let adjusted = match level {
        FitnessLevel::Beginner => (mean - 2.0).max(1.0),
        FitnessLevel::Intermediate => mean,
        FitnessLevel::Advanced => (mean + 1.0).min(10.0),
    };

    adjusted.round_ties_even().clamp(1.0, 10.0) as u8
}

/// Scaling advice for the user's level
#[must_use]
pub fn adaptations(level: FitnessLevel) -> Vec<String> {
    let tiered: &[&str] = match level {
        FitnessLevel::Beginner => &[
            "Reduce sets by 1 if feeling too challenging.",
            "Take extra rest between exercises if needed.",
            "Focus on learning proper form before increasing intensity.",
        ],
        FitnessLevel::Advanced => &[
            "Add extra set if feeling too easy.",
            "Increase weight or resistance for strength exercises.",
            "Reduce rest time to increase intensity.",
        ],
        FitnessLevel::Intermediate => &[],
    };

    tiered
        .iter()
        .chain(&[
            "Replace equipment exercises with bodyweight alternatives if needed.",
            "Use household items as weights if dumbbells unavailable.",
        ])
        .map(|s| (*s).to_owned())
        .collect()
}

/// Explanation sentence for the plan
#[must_use]
pub fn reasoning(session: SessionType, profile: &UserProfile, exercise_count: usize) -> String {
    let mut text = format!(
        "This {session} workout was designed specifically for your {} fitness level",
        profile.fitness_level
    );
    if !profile.goals.is_empty() {
        text.push_str(" and your goals: ");
        text.push_str(&profile.goals.join(", "));
    }
    text.push_str(&format!(
        ". The workout includes {exercise_count} exercises targeting major muscle groups \
         with appropriate intensity and rest periods for optimal results."
    ));
    text
}

/// Fixed safe plan returned when generation fails
#[must_use]
pub fn fallback_plan() -> WorkoutRecommendation {
    let bodyweight = |id: &str, name: &str, groups: [&str; 2], difficulty: u8| ExerciseRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        category: ExerciseCategory::Strength,
        muscle_groups: groups.iter().map(|g| (*g).to_owned()).collect(),
        equipment: Vec::new(),
        difficulty_level: difficulty,
        calories_per_minute: None,
        instructions: None,
    };

    WorkoutRecommendation {
        exercises: vec![
            ExerciseInstance {
                exercise: bodyweight("fallback-push-ups", "Push-ups", ["chest", "triceps"], 3),
                sets: 3,
                reps: 10,
                rest_seconds: 60,
                notes: Vec::new(),
            },
            ExerciseInstance {
                exercise: bodyweight("fallback-squats", "Squats", ["legs", "glutes"], 2),
                sets: 3,
                reps: 15,
                rest_seconds: 60,
                notes: Vec::new(),
            },
        ],
        estimated_duration: 20,
        difficulty_level: 3,
        adaptations: vec!["Modify as needed based on fitness level".to_owned()],
        reasoning: "Basic fallback workout for general fitness".to_owned(),
    }
}
