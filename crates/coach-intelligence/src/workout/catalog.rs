// ABOUTME: Read-only snapshot of the exercise catalog
// ABOUTME: Loaded once at startup and shared by plan generation and library listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::models::{ExerciseCategory, ExerciseRecord};
use serde::Deserialize;

/// Filters for listing the exercise library
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseFilter {
    /// Exact category
    pub category: Option<ExerciseCategory>,
    /// Muscle group the exercise must target
    pub muscle_group: Option<String>,
    /// Maximum difficulty (inclusive)
    pub difficulty: Option<u8>,
    /// Equipment the exercise must use
    pub equipment: Option<String>,
    /// Case-insensitive substring of name or category
    pub search: Option<String>,
}

/// Immutable catalog snapshot in storage order
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<ExerciseRecord>,
}

impl ExerciseCatalog {
    /// Wrap records in their storage order
    #[must_use]
    pub const fn new(exercises: Vec<ExerciseRecord>) -> Self {
        Self { exercises }
    }

    /// All records in storage order
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// True when nothing was loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Records matching every set filter, sorted by name
    #[must_use]
    pub fn filter(&self, filter: &ExerciseFilter) -> Vec<ExerciseRecord> {
        let search = filter.search.as_ref().map(|s| s.to_lowercase());

        let mut matches: Vec<ExerciseRecord> = self
            .exercises
            .iter()
            .filter(|ex| filter.category.is_none_or(|c| ex.category == c))
            .filter(|ex| {
                filter
                    .muscle_group
                    .as_deref()
                    .is_none_or(|group| ex.targets(group))
            })
            .filter(|ex| filter.difficulty.is_none_or(|max| ex.difficulty_level <= max))
            .filter(|ex| {
                filter
                    .equipment
                    .as_deref()
                    .is_none_or(|item| ex.equipment.iter().any(|e| e == item))
            })
            .filter(|ex| {
                search.as_deref().is_none_or(|needle| {
                    ex.name.to_lowercase().contains(needle)
                        || ex.category.as_str().to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: ExerciseCategory, groups: &[&str], difficulty: u8) -> ExerciseRecord {
        ExerciseRecord {
            id: name.to_lowercase(),
            name: name.to_owned(),
            category,
            muscle_groups: groups.iter().map(|g| (*g).to_owned()).collect(),
            equipment: if name == "Bench Press" {
                vec!["barbell".to_owned()]
            } else {
                Vec::new()
            },
            difficulty_level: difficulty,
            calories_per_minute: None,
            instructions: None,
        }
    }

    fn catalog() -> ExerciseCatalog {
        ExerciseCatalog::new(vec![
            record("Squats", ExerciseCategory::Strength, &["legs", "glutes"], 2),
            record("Bench Press", ExerciseCategory::Strength, &["chest", "arms"], 5),
            record("Jumping Jacks", ExerciseCategory::Cardio, &["legs", "shoulders"], 1),
        ])
    }

    #[test]
    fn test_no_filter_sorts_by_name() {
        let names: Vec<String> = catalog()
            .filter(&ExerciseFilter::default())
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Bench Press", "Jumping Jacks", "Squats"]);
    }

    #[test]
    fn test_combined_filters() {
        let filter = ExerciseFilter {
            muscle_group: Some("legs".to_owned()),
            difficulty: Some(1),
            ..ExerciseFilter::default()
        };
        let result = catalog().filter(&filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Jumping Jacks");
    }

    #[test]
    fn test_search_matches_category() {
        let filter = ExerciseFilter {
            search: Some("CARD".to_owned()),
            ..ExerciseFilter::default()
        };
        assert_eq!(catalog().filter(&filter).len(), 1);
    }

    #[test]
    fn test_equipment_filter() {
        let filter = ExerciseFilter {
            equipment: Some("barbell".to_owned()),
            ..ExerciseFilter::default()
        };
        let result = catalog().filter(&filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bench Press");
    }
}
