// ABOUTME: Integration tests for the SQLite store
// ABOUTME: Covers catalog, profile, progress, workout, and form analysis persistence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::NaiveDate;
use coach_core::errors::ErrorCode;
use coach_core::models::{
    ExerciseCategory, FitnessLevel, FormAnalysisResult, LandmarkSet, ProgressRecord, SessionType,
    UserProfile,
};
use coach_intelligence::workout::fallback_plan;
use common::{create_test_database, sample_exercises};
use pierre_form_coach::config::environment::DatabaseUrl;
use pierre_form_coach::database::Database;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).expect("valid date")
}

#[tokio::test]
async fn test_catalog_preserves_insertion_order() -> Result<()> {
    let db = create_test_database().await?;
    let exercises = sample_exercises();

    for exercise in &exercises {
        db.exercises().upsert_exercise(exercise).await?;
    }

    let stored = db.exercises().list_exercises().await?;
    assert_eq!(stored, exercises);
    assert_eq!(db.exercises().count().await?, u64::try_from(exercises.len())?);

    Ok(())
}

#[tokio::test]
async fn test_upsert_exercise_updates_in_place() -> Result<()> {
    let db = create_test_database().await?;
    let mut push_ups = sample_exercises().remove(0);
    db.exercises().upsert_exercise(&push_ups).await?;

    push_ups.difficulty_level = 4;
    push_ups.category = ExerciseCategory::Cardio;
    db.exercises().upsert_exercise(&push_ups).await?;

    assert_eq!(db.exercises().count().await?, 1);
    let stored = db
        .exercises()
        .get_exercise("push-ups")
        .await?
        .expect("exercise stored");
    assert_eq!(stored.difficulty_level, 4);
    assert_eq!(stored.category, ExerciseCategory::Cardio);

    Ok(())
}

#[tokio::test]
async fn test_upsert_exercise_rejects_out_of_range_difficulty() -> Result<()> {
    let db = create_test_database().await?;
    let mut exercise = sample_exercises().remove(0);
    exercise.difficulty_level = 11;

    let err = db
        .exercises()
        .upsert_exercise(&exercise)
        .await
        .expect_err("difficulty 11 is invalid");
    assert_eq!(err.code, ErrorCode::InvalidInput);

    exercise.difficulty_level = 0;
    assert!(db.exercises().upsert_exercise(&exercise).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_missing_exercise_is_none() -> Result<()> {
    let db = create_test_database().await?;
    assert!(db.exercises().get_exercise("nope").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_profile_round_trip() -> Result<()> {
    let db = create_test_database().await?;
    assert!(db.users().get_profile("athlete").await?.is_none());

    let profile = UserProfile {
        fitness_level: FitnessLevel::Advanced,
        goals: vec!["strength".to_owned(), "weight_loss".to_owned()],
        medical_conditions: vec!["knee_issues".to_owned()],
        preferred_duration: 45,
    };
    db.users().upsert_profile("athlete", &profile).await?;
    assert_eq!(db.users().get_profile("athlete").await?, Some(profile.clone()));

    let beginner = UserProfile::default();
    db.users().upsert_profile("athlete", &beginner).await?;
    assert_eq!(db.users().get_profile("athlete").await?, Some(beginner));

    Ok(())
}

#[tokio::test]
async fn test_recent_progress_is_newest_first_and_limited() -> Result<()> {
    let db = create_test_database().await?;

    for d in 1..=10 {
        let mut record = ProgressRecord::new(day(d));
        record.total_workouts = 1;
        record.total_calories_burned = f64::from(d) * 100.0;
        record
            .metrics
            .strength_metrics
            .insert("push-ups".to_owned(), f64::from(d));
        db.progress().upsert_progress("athlete", &record).await?;
    }
    db.progress()
        .upsert_progress("someone-else", &ProgressRecord::new(day(20)))
        .await?;

    let recent = db.progress().recent_progress("athlete", 7).await?;
    assert_eq!(recent.len(), 7);
    assert_eq!(recent[0].date, day(10));
    assert_eq!(recent[6].date, day(4));
    assert!((recent[0].metrics.strength_metrics["push-ups"] - 10.0).abs() < f64::EPSILON);

    Ok(())
}

#[tokio::test]
async fn test_progress_upsert_replaces_same_day() -> Result<()> {
    let db = create_test_database().await?;

    let mut record = ProgressRecord::new(day(5));
    record.total_workouts = 1;
    db.progress().upsert_progress("athlete", &record).await?;
    record.total_workouts = 3;
    db.progress().upsert_progress("athlete", &record).await?;

    let recent = db.progress().recent_progress("athlete", 30).await?;
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].total_workouts, 3);

    Ok(())
}

#[tokio::test]
async fn test_workout_round_trip() -> Result<()> {
    let db = create_test_database().await?;
    let plan = fallback_plan();

    let id = db
        .workouts()
        .create_workout("athlete", SessionType::Strength, &plan)
        .await?;

    let stored = db.workouts().get_workout(&id).await?.expect("workout stored");
    assert_eq!(stored.user_id, "athlete");
    assert_eq!(stored.name, "AI Generated Strength Workout");
    assert_eq!(stored.workout_type, SessionType::Strength);
    assert_eq!(stored.exercises, plan.exercises);
    assert_eq!(stored.estimated_duration, plan.estimated_duration);
    assert_eq!(stored.difficulty_level, plan.difficulty_level);
    assert!(stored.ai_generated);

    let listed = db.workouts().list_user_workouts("athlete", 10).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert!(db.workouts().list_user_workouts("other", 10).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_form_analysis_round_trip() -> Result<()> {
    let db = create_test_database().await?;
    let result = FormAnalysisResult {
        form_score: 0.82,
        feedback: vec!["Excellent form! Keep it up!".to_owned()],
        corrections: vec!["Keep your back straight".to_owned()],
        rep_count: 4,
        confidence: 0.9,
        landmarks: LandmarkSet::empty(),
    };

    let id = db
        .analyses()
        .record_analysis("athlete", "push-ups", &result)
        .await?;

    let stored = db.analyses().list_user_analyses("athlete", 10).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].exercise_name, "push-ups");
    assert!((stored[0].form_score - 0.82).abs() < f64::EPSILON);
    assert_eq!(stored[0].feedback, result.feedback);
    assert_eq!(stored[0].corrections, result.corrections);
    assert_eq!(stored[0].rep_count, 4);

    Ok(())
}

#[tokio::test]
async fn test_file_database_creates_parent_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("coach.db");
    let url = DatabaseUrl::parse_url(&format!("sqlite:{}", path.display()));

    let db = Database::new(&url).await?;
    db.exercises()
        .upsert_exercise(&sample_exercises()[0])
        .await?;
    assert!(path.exists());

    // Reopening runs migrations again without losing data
    let reopened = Database::new(&url).await?;
    assert_eq!(reopened.exercises().count().await?, 1);

    Ok(())
}
