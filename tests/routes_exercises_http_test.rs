// ABOUTME: HTTP integration tests for the exercise library route
// ABOUTME: Checks GET /exercises filtering by category, muscle group, difficulty, and search
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use anyhow::Result;
use helpers::axum_test::AxumTestRequest;
use pierre_form_coach::routes::exercises::ExerciseListResponse;
use pierre_form_coach::routes::ExerciseRoutes;

async fn list(uri: &str) -> Result<ExerciseListResponse> {
    let resources = common::create_test_resources().await?;
    let response = AxumTestRequest::get(uri)
        .send(ExerciseRoutes::routes(resources))
        .await;
    assert_eq!(response.status(), 200);
    Ok(response.json())
}

fn ids(response: &ExerciseListResponse) -> Vec<&str> {
    response.exercises.iter().map(|ex| ex.id.as_str()).collect()
}

#[tokio::test]
async fn test_list_all_exercises_sorted_by_name() -> Result<()> {
    let response = list("/exercises").await?;

    assert_eq!(response.total, common::sample_exercises().len());
    assert_eq!(response.exercises.len(), response.total);

    let names: Vec<&str> = response.exercises.iter().map(|ex| ex.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    Ok(())
}

#[tokio::test]
async fn test_filter_by_category_is_case_insensitive() -> Result<()> {
    let response = list("/exercises?category=CARDIO").await?;

    assert_eq!(
        ids(&response),
        vec!["burpees", "jumping-jacks", "kettlebell-swings"]
    );
    assert_eq!(response.total, 3);

    Ok(())
}

#[tokio::test]
async fn test_filter_by_muscle_group_and_difficulty() -> Result<()> {
    let response = list("/exercises?muscle_group=back&difficulty=4").await?;

    assert_eq!(ids(&response), vec!["dumbbell-rows", "superman"]);

    Ok(())
}

#[tokio::test]
async fn test_filter_by_equipment() -> Result<()> {
    let response = list("/exercises?equipment=dumbbells").await?;

    assert_eq!(ids(&response), vec!["dumbbell-rows", "overhead-press"]);

    Ok(())
}

#[tokio::test]
async fn test_search_matches_name_substring() -> Result<()> {
    let response = list("/exercises?search=JUMP").await?;

    assert_eq!(ids(&response), vec!["jumping-jacks"]);

    Ok(())
}

#[tokio::test]
async fn test_unmatched_filter_returns_empty_list() -> Result<()> {
    let response = list("/exercises?category=balance").await?;

    assert!(response.exercises.is_empty());
    assert_eq!(response.total, 0);

    Ok(())
}

#[tokio::test]
async fn test_invalid_difficulty_is_rejected() -> Result<()> {
    let resources = common::create_test_resources().await?;

    let response = AxumTestRequest::get("/exercises?difficulty=hard")
        .send(ExerciseRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 400);

    Ok(())
}
