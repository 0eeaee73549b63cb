// ABOUTME: Progress insights from a user's recent training history
// ABOUTME: Frequency, strength progression, and weekly calorie tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::models::progress::RECENT_WINDOW;
use coach_core::models::{ProgressRecord, ProgressReport, ProgressTrends};

/// Active days in the recent window for a "consistent" schedule
pub const CONSISTENT_ACTIVE_DAYS: usize = 4;
/// Active days in the recent window for "good progress"
pub const REGULAR_ACTIVE_DAYS: usize = 2;
/// Weekly calories rated excellent
pub const EXCELLENT_WEEKLY_CALORIES: f64 = 1500.0;
/// Weekly calories rated good
pub const GOOD_WEEKLY_CALORIES: f64 = 1000.0;

/// Derives insights, trends, and recommendations from progress history
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressAnalyzer;

impl ProgressAnalyzer {
    /// Analyze a date-descending history
    #[must_use]
    pub fn analyze(progress: &[ProgressRecord]) -> ProgressReport {
        if progress.is_empty() {
            return ProgressReport {
                insights: vec![
                    "Not enough data for analysis. Complete more workouts to see insights."
                        .to_owned(),
                ],
                trends: ProgressTrends::default(),
                recommendations: vec![
                    "Keep working out consistently to track your progress!".to_owned(),
                ],
            };
        }

        let mut report = ProgressReport::default();
        let recent = &progress[..progress.len().min(RECENT_WINDOW)];

        Self::frequency(recent, &mut report);
        Self::strength(progress, &mut report);
        Self::calories(recent, &mut report);

        report
    }

    fn frequency(recent: &[ProgressRecord], report: &mut ProgressReport) {
        let active_days = recent.iter().filter(|p| p.total_workouts > 0).count();

        if active_days >= CONSISTENT_ACTIVE_DAYS {
            report
                .insights
                .push("Great job! You're maintaining a consistent workout schedule.".to_owned());
        } else if active_days >= REGULAR_ACTIVE_DAYS {
            report
                .insights
                .push("Good progress! Try to maintain regular workout frequency.".to_owned());
        } else {
            report
                .insights
                .push("Consider increasing workout frequency for better results.".to_owned());
            report
                .recommendations
                .push("Aim for at least 3 workouts per week.".to_owned());
        }
    }

    // Compares the newest record with the one a week back; improvements are
    // listed by exercise name
    fn strength(progress: &[ProgressRecord], report: &mut ProgressReport) {
        let (Some(latest), Some(week_ago)) = (progress.first(), progress.get(RECENT_WINDOW - 1))
        else {
            return;
        };
        let current = &latest.metrics.strength_metrics;
        let previous = &week_ago.metrics.strength_metrics;
        if current.is_empty() || previous.is_empty() {
            return;
        }

        let improved: Vec<&str> = current
            .iter()
            .filter(|(exercise, value)| **value > previous.get(*exercise).copied().unwrap_or(0.0))
            .map(|(exercise, _)| exercise.as_str())
            .collect();

        if !improved.is_empty() {
            report
                .insights
                .push(format!("Strength improvements in: {}", improved.join(", ")));
            report.trends.strength_improvement = Some(true);
        }
    }

    fn calories(recent: &[ProgressRecord], report: &mut ProgressReport) {
        let weekly: f64 = recent.iter().map(|p| p.total_calories_burned).sum();
        if weekly <= 0.0 || !weekly.is_finite() {
            return;
        }

        report.trends.weekly_calories = Some(weekly);
        if weekly > EXCELLENT_WEEKLY_CALORIES {
            report
                .insights
                .push("Excellent calorie burn this week!".to_owned());
        } else if weekly > GOOD_WEEKLY_CALORIES {
            report.insights.push("Good calorie burn this week.".to_owned());
        } else {
            report.recommendations.push(
                "Try adding more cardio exercises to increase calorie burn.".to_owned(),
            );
        }
    }
}
