// ABOUTME: Daily progress records used for novelty scoring and progress analysis
// ABOUTME: Histories are ordered most recent first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of most recent progress records loaded for a user
pub const PROGRESS_WINDOW: usize = 30;

/// Number of most recent records considered "this week"
pub const RECENT_WINDOW: usize = 7;

/// Metrics captured for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressMetrics {
    /// Names of exercises completed that day
    #[serde(default)]
    pub exercises_completed: Vec<String>,
    /// Best measured value per exercise name, iterated by name
    #[serde(default)]
    pub strength_metrics: BTreeMap<String, f64>,
}

/// One day of a user's training history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// Day metrics
    #[serde(default)]
    pub metrics: ProgressMetrics,
    /// Previously generated insights
    #[serde(default)]
    pub ai_insights: Vec<String>,
    /// Consecutive training days
    #[serde(default)]
    pub workout_streak: u32,
    /// Workouts logged that day
    #[serde(default)]
    pub total_workouts: u32,
    /// Calories burned that day
    #[serde(default)]
    pub total_calories_burned: f64,
}

impl ProgressRecord {
    /// Empty record for a day
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            metrics: ProgressMetrics::default(),
            ai_insights: Vec::new(),
            workout_streak: 0,
            total_workouts: 0,
            total_calories_burned: 0.0,
        }
    }
}
