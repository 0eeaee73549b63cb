// ABOUTME: Workout generation service loading the user's context and persisting the plan
// ABOUTME: Store read faults degrade to defaults; a failed insert omits the workout id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::progress_analysis::load_recent_progress;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use coach_core::models::{SessionType, UserProfile, WorkoutRecommendation};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{error, warn};

/// A generated plan and, when it was stored, its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    /// Id of the stored workout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    /// The plan itself
    #[serde(flatten)]
    pub plan: WorkoutRecommendation,
}

/// Load a user's profile, falling back to the default profile
pub async fn load_profile(resources: &ServerResources, user_id: &str) -> UserProfile {
    match resources.database.users().get_profile(user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => UserProfile::default(),
        Err(e) => {
            warn!(user.id = %user_id, error = %e, "Failed to load user profile, using defaults");
            UserProfile::default()
        }
    }
}

/// Build a plan for `user_id` and store it
pub async fn generate_workout(
    resources: &ServerResources,
    user_id: &str,
    session: SessionType,
) -> GeneratedWorkout {
    let profile = load_profile(resources, user_id).await;
    let progress = load_recent_progress(resources, user_id).await;

    let plan = resources
        .workout_engine
        .generate(&profile, &progress, session);

    let started = Instant::now();
    let stored = resources
        .database
        .workouts()
        .create_workout(user_id, session, &plan)
        .await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation("insert", "workouts", stored.is_ok(), elapsed_ms);

    let workout_id = match stored {
        Ok(id) => Some(id),
        Err(e) => {
            error!(user.id = %user_id, error = %e, "Failed to store workout");
            None
        }
    };

    AppLogger::log_workout_generated(
        user_id,
        session.as_str(),
        plan.exercises.len(),
        plan.estimated_duration,
        workout_id.is_some(),
    );

    GeneratedWorkout { workout_id, plan }
}
