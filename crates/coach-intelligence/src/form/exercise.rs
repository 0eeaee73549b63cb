// ABOUTME: Supported exercise types and their static analysis configuration
// ABOUTME: Key points, angle definitions, and rep thresholds per exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;

/// Exercise types with dedicated form heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExerciseType {
    /// Push-ups
    #[serde(rename = "push-ups")]
    PushUps,
    /// Bodyweight or barbell squats
    #[serde(rename = "squats")]
    Squats,
    /// Deadlifts
    #[serde(rename = "deadlifts")]
    Deadlifts,
    /// Burpees
    #[serde(rename = "burpees")]
    Burpees,
}

impl ExerciseType {
    /// Every supported type, in a stable order
    pub const ALL: [Self; 4] = [Self::PushUps, Self::Squats, Self::Deadlifts, Self::Burpees];

    /// Wire name, also used in cache keys and model file names
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PushUps => "push-ups",
            Self::Squats => "squats",
            Self::Deadlifts => "deadlifts",
            Self::Burpees => "burpees",
        }
    }

    /// Case-insensitive parse; `None` means unsupported
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "push-ups" => Some(Self::PushUps),
            "squats" => Some(Self::Squats),
            "deadlifts" => Some(Self::Deadlifts),
            "burpees" => Some(Self::Burpees),
            _ => None,
        }
    }

    /// Static analysis configuration
    #[must_use]
    pub const fn config(&self) -> &'static ExerciseConfig {
        match self {
            Self::PushUps => &PUSH_UPS,
            Self::Squats => &SQUATS,
            Self::Deadlifts => &DEADLIFTS,
            Self::Burpees => &BURPEES,
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-exercise analysis configuration.
///
/// `rep_threshold` is carried for phase-based rep detection and is not read
/// by the current counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExerciseConfig {
    /// Body regions the heuristics look at
    pub key_points: &'static [&'static str],
    /// Named joint angles
    pub angles: &'static [&'static str],
    /// Threshold for rep detection
    pub rep_threshold: f64,
}

const PUSH_UPS: ExerciseConfig = ExerciseConfig {
    key_points: &["shoulders", "elbows", "wrists"],
    angles: &["elbow_angle", "body_alignment"],
    rep_threshold: 0.7,
};

const SQUATS: ExerciseConfig = ExerciseConfig {
    key_points: &["hips", "knees", "ankles"],
    angles: &["knee_angle", "hip_angle", "ankle_alignment"],
    rep_threshold: 0.6,
};

const DEADLIFTS: ExerciseConfig = ExerciseConfig {
    key_points: &["shoulders", "hips", "knees"],
    angles: &["back_angle", "hip_hinge", "knee_alignment"],
    rep_threshold: 0.8,
};

const BURPEES: ExerciseConfig = ExerciseConfig {
    key_points: &["nose", "shoulders", "hips"],
    angles: &["body_position", "jump_height"],
    rep_threshold: 0.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ExerciseType::parse("Push-Ups"), Some(ExerciseType::PushUps));
        assert_eq!(ExerciseType::parse("SQUATS"), Some(ExerciseType::Squats));
        assert_eq!(ExerciseType::parse("lunges"), None);
    }

    #[test]
    fn test_rep_thresholds() {
        assert!((ExerciseType::PushUps.config().rep_threshold - 0.7).abs() < f64::EPSILON);
        assert!((ExerciseType::Squats.config().rep_threshold - 0.6).abs() < f64::EPSILON);
        assert!((ExerciseType::Deadlifts.config().rep_threshold - 0.8).abs() < f64::EPSILON);
        assert!((ExerciseType::Burpees.config().rep_threshold - 0.5).abs() < f64::EPSILON);
    }
}
