// ABOUTME: Criterion benchmarks for form scoring and workout generation
// ABOUTME: Measures per-frame scoring cost and plan generation across catalog sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the coaching pipelines.
//!
//! Per-frame scoring runs on every camera frame, so it has to stay well
//! under a millisecond. Workout generation scales with catalog size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use coach_core::models::landmark::FULL_BODY_LANDMARK_COUNT;
use coach_core::models::{
    ExerciseCategory, ExerciseRecord, FitnessLevel, Landmark, LandmarkSet, ProgressRecord,
    SessionType, UserProfile,
};
use coach_intelligence::form::{confidence, CorrectionAdvisor, FormScorer};
use coach_intelligence::{
    ExerciseCatalog, ExerciseFilter, ExerciseType, ProgressAnalyzer, WorkoutEngine,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

const MUSCLE_GROUPS: [&str; 6] = ["chest", "back", "legs", "shoulders", "arms", "core"];

/// A plausible standing body with full visibility
#[allow(clippy::cast_precision_loss)]
fn body_landmarks() -> LandmarkSet {
    (0..FULL_BODY_LANDMARK_COUNT)
        .map(|i| {
            let t = i as f64;
            Landmark::new(0.5 + 0.1 * t.sin(), 0.02 + 0.028 * t, 0.0, 0.95)
        })
        .collect::<Vec<_>>()
        .into()
}

/// Synthetic catalog of `count` exercises spread over categories and difficulties
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_catalog(count: usize) -> Vec<ExerciseRecord> {
    (0..count)
        .map(|index| {
            let category = match index % 3 {
                0 => ExerciseCategory::Strength,
                1 => ExerciseCategory::Cardio,
                _ => ExerciseCategory::Flexibility,
            };
            let groups = (0..=(index % 3))
                .map(|offset| MUSCLE_GROUPS[(index + offset) % MUSCLE_GROUPS.len()].to_owned())
                .collect();

            ExerciseRecord {
                id: format!("bench-exercise-{index}"),
                name: format!("Benchmark Exercise {index}"),
                category,
                muscle_groups: groups,
                equipment: Vec::new(),
                difficulty_level: (index % 10) as u8 + 1,
                calories_per_minute: Some(3.0 + (index % 12) as f64),
                instructions: None,
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn generate_progress(days: usize) -> Vec<ProgressRecord> {
    let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default();
    (0..days)
        .map(|index| {
            let mut record = ProgressRecord::new(today - Duration::days(index as i64));
            record.total_workouts = u32::from(index % 3 != 0);
            record.total_calories_burned = 150.0 + (index % 5) as f64 * 40.0;
            record
                .metrics
                .exercises_completed
                .push(format!("Benchmark Exercise {}", index * 7));
            record
                .metrics
                .strength_metrics
                .insert("squats".to_owned(), 60.0 - index as f64);
            record
        })
        .collect()
}

fn bench_form_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_scoring");
    let landmarks = body_landmarks();

    for exercise in ExerciseType::ALL {
        group.bench_with_input(
            BenchmarkId::new("score", exercise.as_str()),
            &landmarks,
            |b, landmarks| {
                b.iter(|| FormScorer::score(black_box(exercise), black_box(landmarks)));
            },
        );
    }

    group.bench_function("corrections_push_ups", |b| {
        b.iter(|| {
            CorrectionAdvisor::advise(black_box(ExerciseType::PushUps), black_box(&landmarks))
        });
    });

    group.bench_function("confidence", |b| {
        b.iter(|| confidence(black_box(&landmarks)));
    });

    group.finish();
}

fn bench_workout_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_generation");
    let profile = UserProfile {
        fitness_level: FitnessLevel::Intermediate,
        goals: vec!["strength".to_owned(), "weight_loss".to_owned()],
        medical_conditions: vec!["knee_issues".to_owned()],
        preferred_duration: 45,
    };
    let progress = generate_progress(30);

    for size in [16_usize, 200, 2_000] {
        let engine = WorkoutEngine::new(Arc::new(ExerciseCatalog::new(generate_catalog(size))));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("full_body", size), &engine, |b, engine| {
            b.iter(|| {
                engine.generate(
                    black_box(&profile),
                    black_box(&progress),
                    black_box(SessionType::FullBody),
                )
            });
        });
    }

    group.finish();
}

fn bench_catalog_filter(c: &mut Criterion) {
    let catalog = ExerciseCatalog::new(generate_catalog(2_000));
    let filter = ExerciseFilter {
        category: Some(ExerciseCategory::Strength),
        muscle_group: Some("legs".to_owned()),
        difficulty: Some(6),
        equipment: None,
        search: Some("exercise 1".to_owned()),
    };

    c.bench_function("catalog_filter_2000", |b| {
        b.iter(|| catalog.filter(black_box(&filter)));
    });
}

fn bench_progress_analysis(c: &mut Criterion) {
    let progress = generate_progress(30);

    c.bench_function("progress_analysis_30_days", |b| {
        b.iter(|| ProgressAnalyzer::analyze(black_box(&progress)));
    });
}

criterion_group!(
    benches,
    bench_form_scoring,
    bench_workout_generation,
    bench_catalog_filter,
    bench_progress_analysis
);
criterion_main!(benches);
