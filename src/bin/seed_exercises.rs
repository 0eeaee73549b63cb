// ABOUTME: Exercise catalog seeding utility for the Pierre form coach
// ABOUTME: Upserts a starter catalog covering every target muscle group and difficulty band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog seeder.
//!
//! Running it twice leaves one copy of each exercise; existing entries are
//! updated in place.
//!
//! Usage:
//! ```bash
//! # Seed the catalog (uses DATABASE_URL from environment)
//! cargo run --bin seed-exercises
//!
//! # Override database URL
//! cargo run --bin seed-exercises -- --database-url sqlite:./data/form_coach.db
//!
//! # Verbose output
//! cargo run --bin seed-exercises -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use coach_core::constants::server::DEFAULT_DATABASE_URL;
use coach_core::models::{ExerciseCategory, ExerciseRecord};
use pierre_form_coach::config::environment::DatabaseUrl;
use pierre_form_coach::database::Database;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-exercises",
    about = "Pierre Form Coach Exercise Catalog Seeder",
    long_about = "Create the starter exercise catalog used for workout generation"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

struct ExerciseData {
    id: &'static str,
    name: &'static str,
    category: ExerciseCategory,
    muscle_groups: &'static [&'static str],
    equipment: &'static [&'static str],
    difficulty: u8,
    calories_per_minute: f64,
    instructions: &'static str,
}

const EXERCISES: &[ExerciseData] = &[
    ExerciseData {
        id: "push-ups",
        name: "Push-ups",
        category: ExerciseCategory::Strength,
        muscle_groups: &["chest", "arms", "shoulders"],
        equipment: &[],
        difficulty: 3,
        calories_per_minute: 7.0,
        instructions: "Lower your chest to just above the floor with a straight body, then press back up.",
    },
    ExerciseData {
        id: "knee-push-ups",
        name: "Knee Push-ups",
        category: ExerciseCategory::Strength,
        muscle_groups: &["chest", "arms"],
        equipment: &[],
        difficulty: 1,
        calories_per_minute: 5.0,
        instructions: "Perform a push-up with knees on the floor, keeping hips in line with shoulders.",
    },
    ExerciseData {
        id: "squats",
        name: "Bodyweight Squats",
        category: ExerciseCategory::Strength,
        muscle_groups: &["legs", "core"],
        equipment: &[],
        difficulty: 2,
        calories_per_minute: 6.0,
        instructions: "Sit the hips back until thighs are parallel to the floor, knees tracking over toes.",
    },
    ExerciseData {
        id: "lunges",
        name: "Walking Lunges",
        category: ExerciseCategory::Strength,
        muscle_groups: &["legs", "core"],
        equipment: &[],
        difficulty: 3,
        calories_per_minute: 6.5,
        instructions: "Step forward and lower the back knee toward the floor, then step through.",
    },
    ExerciseData {
        id: "plank",
        name: "Plank",
        category: ExerciseCategory::Strength,
        muscle_groups: &["core", "shoulders"],
        equipment: &[],
        difficulty: 2,
        calories_per_minute: 4.0,
        instructions: "Hold a straight line from head to heels on forearms and toes.",
    },
    ExerciseData {
        id: "superman",
        name: "Superman Hold",
        category: ExerciseCategory::Strength,
        muscle_groups: &["back", "core"],
        equipment: &[],
        difficulty: 1,
        calories_per_minute: 3.5,
        instructions: "Lying face down, lift arms and legs off the floor and hold.",
    },
    ExerciseData {
        id: "dumbbell-rows",
        name: "Dumbbell Rows",
        category: ExerciseCategory::Strength,
        muscle_groups: &["back", "arms"],
        equipment: &["dumbbells"],
        difficulty: 4,
        calories_per_minute: 5.5,
        instructions: "Hinge forward and pull the dumbbell to your hip, squeezing the shoulder blade.",
    },
    ExerciseData {
        id: "pull-ups",
        name: "Pull-ups",
        category: ExerciseCategory::Strength,
        muscle_groups: &["back", "arms", "shoulders"],
        equipment: &["pull-up bar"],
        difficulty: 7,
        calories_per_minute: 8.0,
        instructions: "Hang with straight arms and pull until the chin clears the bar.",
    },
    ExerciseData {
        id: "deadlifts",
        name: "Barbell Deadlifts",
        category: ExerciseCategory::Strength,
        muscle_groups: &["back", "legs", "core"],
        equipment: &["barbell"],
        difficulty: 6,
        calories_per_minute: 9.0,
        instructions: "Hinge at the hips with a neutral spine and stand up by driving through the heels.",
    },
    ExerciseData {
        id: "overhead-press",
        name: "Overhead Press",
        category: ExerciseCategory::Strength,
        muscle_groups: &["shoulders", "arms", "core"],
        equipment: &["dumbbells"],
        difficulty: 5,
        calories_per_minute: 6.0,
        instructions: "Press the weights overhead from shoulder height without arching the lower back.",
    },
    ExerciseData {
        id: "burpees",
        name: "Burpees",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["legs", "chest", "core", "shoulders"],
        equipment: &[],
        difficulty: 6,
        calories_per_minute: 12.0,
        instructions: "Drop to a plank, perform a push-up, jump the feet in, and jump up.",
    },
    ExerciseData {
        id: "jumping-jacks",
        name: "Jumping Jacks",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["legs", "shoulders"],
        equipment: &[],
        difficulty: 1,
        calories_per_minute: 8.5,
        instructions: "Jump the feet wide while raising the arms overhead, then return.",
    },
    ExerciseData {
        id: "mountain-climbers",
        name: "Mountain Climbers",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["core", "legs", "shoulders"],
        equipment: &[],
        difficulty: 4,
        calories_per_minute: 10.0,
        instructions: "From a high plank, drive the knees toward the chest in alternation.",
    },
    ExerciseData {
        id: "jump-squats",
        name: "Jump Squats",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["legs", "core"],
        equipment: &[],
        difficulty: 5,
        calories_per_minute: 11.0,
        instructions: "Squat down and explode upward, landing softly into the next squat.",
    },
    ExerciseData {
        id: "kettlebell-swings",
        name: "Kettlebell Swings",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["legs", "back", "core", "shoulders"],
        equipment: &["kettlebell"],
        difficulty: 8,
        calories_per_minute: 13.0,
        instructions: "Hinge and snap the hips forward to swing the bell to chest height.",
    },
    ExerciseData {
        id: "hip-flexor-stretch",
        name: "Hip Flexor Stretch",
        category: ExerciseCategory::Flexibility,
        muscle_groups: &["legs"],
        equipment: &[],
        difficulty: 1,
        calories_per_minute: 2.0,
        instructions: "Kneel in a lunge and press the hips forward until you feel a stretch.",
    },
];

impl ExerciseData {
    fn to_record(&self) -> ExerciseRecord {
        ExerciseRecord {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            category: self.category,
            muscle_groups: self.muscle_groups.iter().map(|m| (*m).to_owned()).collect(),
            equipment: self.equipment.iter().map(|e| (*e).to_owned()).collect(),
            difficulty_level: self.difficulty,
            calories_per_minute: Some(self.calories_per_minute),
            instructions: Some(self.instructions.to_owned()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Pierre Form Coach Exercise Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&DatabaseUrl::parse_url(&database_url)).await?;
    let exercises = database.exercises();

    let before = exercises.count().await?;
    for exercise in EXERCISES {
        exercises.upsert_exercise(&exercise.to_record()).await?;
        info!("  Seeded: {}", exercise.name);
    }
    let after = exercises.count().await?;

    info!(
        "Catalog now has {} exercises ({} new)",
        after,
        after.saturating_sub(before)
    );

    Ok(())
}
