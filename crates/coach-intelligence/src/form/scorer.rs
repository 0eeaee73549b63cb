// ABOUTME: Exercise-specific form heuristics over body landmarks
// ABOUTME: Produces a clamped [0,1] score, with faults resolved to a neutral 0.5
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Form Scorer
//!
//! Each supported exercise has a small geometric heuristic:
//!
//! | Exercise | Components |
//! |---|---|
//! | push-ups | elbow symmetry (0.6), shoulder/hip alignment (0.4) |
//! | squats | knee symmetry (0.5), depth ratio (0.5) |
//! | deadlifts | back alignment (0.6), hip movement (0.4) |
//! | burpees | vertical stacking of nose, shoulders, hips |
//!
//! The heuristics return `Result`; [`FormScorer::score`] is the one place
//! where a fault becomes the neutral score.

use super::exercise::ExerciseType;
use crate::errors::ScoringError;
use crate::geometry::try_angle;
use coach_core::models::landmark::index;
use coach_core::models::{Landmark, LandmarkSet};
use tracing::warn;

/// Score used when a heuristic cannot be evaluated
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Stateless form scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct FormScorer;

impl FormScorer {
    /// Score a frame, resolving any fault to [`NEUTRAL_SCORE`]
    #[must_use]
    pub fn score(exercise: ExerciseType, landmarks: &LandmarkSet) -> f64 {
        match Self::try_score(exercise, landmarks) {
            Ok(score) => score,
            Err(e) => {
                warn!(
                    exercise.type = %exercise,
                    error = %e,
                    "Form scoring fault, using neutral score"
                );
                NEUTRAL_SCORE
            }
        }
    }

    /// Score a frame, reporting faults
    ///
    /// # Errors
    ///
    /// Returns a [`ScoringError`] for missing landmarks, degenerate joint
    /// geometry, zero denominators, or non-finite arithmetic.
    pub fn try_score(exercise: ExerciseType, landmarks: &LandmarkSet) -> Result<f64, ScoringError> {
        let raw = match exercise {
            ExerciseType::PushUps => push_up_score(landmarks)?,
            ExerciseType::Squats => squat_score(landmarks)?,
            ExerciseType::Deadlifts => deadlift_score(landmarks)?,
            ExerciseType::Burpees => burpee_score(landmarks)?,
        };
        finite(raw, "form score").map(|s| s.clamp(0.0, 1.0))
    }
}

fn point(landmarks: &LandmarkSet, idx: usize) -> Result<&Landmark, ScoringError> {
    landmarks.get(idx).ok_or(ScoringError::MissingLandmark {
        index: idx,
        available: landmarks.len(),
    })
}

fn mid_y(landmarks: &LandmarkSet, left: usize, right: usize) -> Result<f64, ScoringError> {
    Ok((point(landmarks, left)?.y + point(landmarks, right)?.y) / 2.0)
}

fn joint_angle(
    landmarks: &LandmarkSet,
    a: usize,
    b: usize,
    c: usize,
) -> Result<f64, ScoringError> {
    Ok(try_angle(
        point(landmarks, a)?,
        point(landmarks, b)?,
        point(landmarks, c)?,
    )?)
}

fn finite(value: f64, quantity: &'static str) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::NonFinite { quantity })
    }
}

/// Symmetry between left and right joint angles, 1.0 when equal
fn symmetry(left: f64, right: f64) -> f64 {
    1.0 - (left - right).abs() / 180.0
}

fn push_up_score(landmarks: &LandmarkSet) -> Result<f64, ScoringError> {
    let left_elbow = joint_angle(
        landmarks,
        index::LEFT_SHOULDER,
        index::LEFT_ELBOW,
        index::LEFT_WRIST,
    )?;
    let right_elbow = joint_angle(
        landmarks,
        index::RIGHT_SHOULDER,
        index::RIGHT_ELBOW,
        index::RIGHT_WRIST,
    )?;
    let angle_score = symmetry(left_elbow, right_elbow);

    let shoulder_y = mid_y(landmarks, index::LEFT_SHOULDER, index::RIGHT_SHOULDER)?;
    let hip_y = mid_y(landmarks, index::LEFT_HIP, index::RIGHT_HIP)?;
    let alignment_score = 5.0f64.mul_add(-(shoulder_y - hip_y).abs(), 1.0).max(0.0);

    Ok(0.6f64.mul_add(angle_score, 0.4 * alignment_score))
}

fn squat_score(landmarks: &LandmarkSet) -> Result<f64, ScoringError> {
    let left_knee = joint_angle(
        landmarks,
        index::LEFT_HIP,
        index::LEFT_KNEE,
        index::LEFT_ANKLE,
    )?;
    let right_knee = joint_angle(
        landmarks,
        index::RIGHT_HIP,
        index::RIGHT_KNEE,
        index::RIGHT_ANKLE,
    )?;

    let hip_y = mid_y(landmarks, index::LEFT_HIP, index::RIGHT_HIP)?;
    let knee_y = mid_y(landmarks, index::LEFT_KNEE, index::RIGHT_KNEE)?;
    let depth_ratio = if knee_y > 0.0 {
        finite(hip_y / knee_y, "squat depth ratio")?
    } else {
        1.0
    };
    let depth_score = if depth_ratio <= 1.0 {
        depth_ratio.min(1.0)
    } else {
        (2.0 - depth_ratio).max(0.5)
    };

    let angle_consistency = symmetry(left_knee, right_knee);
    Ok(0.5f64.mul_add(angle_consistency, 0.5 * depth_score))
}

fn deadlift_score(landmarks: &LandmarkSet) -> Result<f64, ScoringError> {
    let shoulder_y = mid_y(landmarks, index::LEFT_SHOULDER, index::RIGHT_SHOULDER)?;
    let hip_y = mid_y(landmarks, index::LEFT_HIP, index::RIGHT_HIP)?;
    let knee_y = mid_y(landmarks, index::LEFT_KNEE, index::RIGHT_KNEE)?;

    let back_alignment = 2.0f64.mul_add(-(shoulder_y - hip_y).abs(), 1.0);

    if knee_y.abs() < f64::EPSILON {
        return Err(ScoringError::DivisionByZero {
            quantity: "hip/knee ratio",
        });
    }
    let hip_knee_ratio = finite(hip_y / knee_y, "hip/knee ratio")?;
    let hip_movement = 2.0 * (hip_knee_ratio - 0.5).clamp(0.0, 1.0);

    Ok(0.6f64.mul_add(back_alignment, 0.4 * hip_movement))
}

fn burpee_score(landmarks: &LandmarkSet) -> Result<f64, ScoringError> {
    let nose_y = point(landmarks, index::NOSE)?.y;
    let shoulder_y = mid_y(landmarks, index::LEFT_SHOULDER, index::RIGHT_SHOULDER)?;
    let hip_y = mid_y(landmarks, index::LEFT_HIP, index::RIGHT_HIP)?;

    let vertical_alignment = (nose_y - shoulder_y).abs() + (shoulder_y - hip_y).abs();
    Ok(3.0f64.mul_add(-vertical_alignment, 1.0).max(0.0))
}
