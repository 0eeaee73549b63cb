// ABOUTME: Exercise catalog records and per-plan exercise instances
// ABOUTME: Categories are typed; unrecognized stored values map to Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Broad category of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExerciseCategory {
    /// Resistance and bodyweight strength work
    #[default]
    Strength,
    /// Conditioning work
    Cardio,
    /// Mobility and stretching
    Flexibility,
    /// Stability work
    Balance,
    /// Anything else stored in the catalog
    Other,
}

impl ExerciseCategory {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Flexibility => "Flexibility",
            Self::Balance => "Balance",
            Self::Other => "Other",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "strength" => Self::Strength,
            "cardio" => Self::Cardio,
            "flexibility" => Self::Flexibility,
            "balance" => Self::Balance,
            _ => Self::Other,
        }
    }
}

/// Catalog entry describing one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Stable identifier
    pub id: String,
    /// Display name, unique within the catalog
    pub name: String,
    /// Broad category
    pub category: ExerciseCategory,
    /// Muscle groups worked (e.g. "chest", "legs")
    pub muscle_groups: Vec<String>,
    /// Required equipment; empty for bodyweight
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Difficulty from 1 (easiest) to 10
    pub difficulty_level: u8,
    /// Energy expenditure estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_minute: Option<f64>,
    /// Free-form instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl ExerciseRecord {
    /// Whether the exercise lists the given muscle group
    #[must_use]
    pub fn targets(&self, muscle_group: &str) -> bool {
        self.muscle_groups.iter().any(|m| m == muscle_group)
    }

    /// Compound exercises work more than two muscle groups
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.muscle_groups.len() > 2
    }
}

/// A catalog exercise parameterized for one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInstance {
    /// The underlying catalog record
    #[serde(flatten)]
    pub exercise: ExerciseRecord,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
    /// Coaching notes
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_falls_back_to_other() {
        assert_eq!(ExerciseCategory::parse("cardio"), ExerciseCategory::Cardio);
        assert_eq!(ExerciseCategory::parse("Strength"), ExerciseCategory::Strength);
        assert_eq!(ExerciseCategory::parse("plyometric"), ExerciseCategory::Other);
    }

    #[test]
    fn test_instance_serializes_flat() {
        let instance = ExerciseInstance {
            exercise: ExerciseRecord {
                id: "1".to_owned(),
                name: "Push-ups".to_owned(),
                category: ExerciseCategory::Strength,
                muscle_groups: vec!["chest".to_owned(), "triceps".to_owned()],
                equipment: vec![],
                difficulty_level: 3,
                calories_per_minute: None,
                instructions: None,
            },
            sets: 3,
            reps: 10,
            rest_seconds: 60,
            notes: vec![],
        };

        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["name"], "Push-ups");
        assert_eq!(json["category"], "Strength");
        assert_eq!(json["sets"], 3);
        assert!(json.get("exercise").is_none());
        assert!(json.get("calories_per_minute").is_none());
    }
}
