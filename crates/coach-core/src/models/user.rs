// ABOUTME: User profile, fitness level, and workout session types
// ABOUTME: Unknown stored values fall back to beginner / full body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default session length in minutes
pub const DEFAULT_PREFERRED_DURATION_MINUTES: u32 = 30;

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced athlete
    Advanced,
}

impl FitnessLevel {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested workout focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Balanced across all muscle groups
    #[default]
    FullBody,
    /// Cardio-only exercises
    Cardio,
    /// Strength-only exercises
    Strength,
}

impl SessionType {
    /// Convert to wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullBody => "full_body",
            Self::Cardio => "cardio",
            Self::Strength => "strength",
        }
    }

    /// Parse from request string, unknown values mean full body
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Self::Cardio,
            "strength" => Self::Strength,
            _ => Self::FullBody,
        }
    }

    /// Title-cased label used in generated workout names
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training profile used to personalize plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Experience level
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    /// Goals such as "strength", "cardio", "weight_loss"
    #[serde(default)]
    pub goals: Vec<String>,
    /// Conditions such as "back_pain", "knee_issues"
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// Preferred session length in minutes
    #[serde(default = "default_preferred_duration")]
    pub preferred_duration: u32,
}

const fn default_preferred_duration() -> u32 {
    DEFAULT_PREFERRED_DURATION_MINUTES
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            fitness_level: FitnessLevel::Beginner,
            goals: Vec::new(),
            medical_conditions: Vec::new(),
            preferred_duration: DEFAULT_PREFERRED_DURATION_MINUTES,
        }
    }
}

impl UserProfile {
    /// Whether the profile lists the goal
    #[must_use]
    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|g| g == goal)
    }

    /// Whether the profile lists the medical condition
    #[must_use]
    pub fn has_condition(&self, condition: &str) -> bool {
        self.medical_conditions.iter().any(|c| c == condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_values_fall_back() {
        assert_eq!(FitnessLevel::parse("elite"), FitnessLevel::Beginner);
        assert_eq!(FitnessLevel::parse("Advanced"), FitnessLevel::Advanced);
        assert_eq!(SessionType::parse("yoga"), SessionType::FullBody);
        assert_eq!(SessionType::parse("cardio"), SessionType::Cardio);
    }

    #[test]
    fn test_profile_defaults_from_partial_json() {
        let profile: UserProfile = serde_json::from_str(r#"{"goals": ["strength"]}"#).unwrap();
        assert_eq!(profile.fitness_level, FitnessLevel::Beginner);
        assert_eq!(profile.preferred_duration, 30);
        assert!(profile.has_goal("strength"));
    }
}
