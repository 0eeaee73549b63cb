// ABOUTME: Body pose landmark types with fixed anatomical indices
// ABOUTME: A LandmarkSet is the per-frame output of the pose estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Number of landmarks produced by a full-body pose model
pub const FULL_BODY_LANDMARK_COUNT: usize = 33;

/// Minimum visibility for a landmark to count as "visible"
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Fixed landmark indices. Never reordered.
pub mod index {
    /// Nose
    pub const NOSE: usize = 0;
    /// Left shoulder
    pub const LEFT_SHOULDER: usize = 11;
    /// Right shoulder
    pub const RIGHT_SHOULDER: usize = 12;
    /// Left elbow
    pub const LEFT_ELBOW: usize = 13;
    /// Right elbow
    pub const RIGHT_ELBOW: usize = 14;
    /// Left wrist
    pub const LEFT_WRIST: usize = 15;
    /// Right wrist
    pub const RIGHT_WRIST: usize = 16;
    /// Left hip
    pub const LEFT_HIP: usize = 23;
    /// Right hip
    pub const RIGHT_HIP: usize = 24;
    /// Left knee
    pub const LEFT_KNEE: usize = 25;
    /// Right knee
    pub const RIGHT_KNEE: usize = 26;
    /// Left ankle
    pub const LEFT_ANKLE: usize = 27;
    /// Right ankle
    pub const RIGHT_ANKLE: usize = 28;
}

/// A single body landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downwards)
    pub y: f64,
    /// Depth relative to the hips
    pub z: f64,
    /// Likelihood the landmark is visible, in [0, 1]
    pub visibility: f64,
}

impl Landmark {
    /// Build a landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    /// Whether the landmark passes the visibility threshold
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility > VISIBILITY_THRESHOLD
    }
}

/// Ordered landmarks for one frame.
///
/// Nominally 33 entries. Shorter sets are accepted; reading a missing index
/// returns `None` and it is up to the caller to treat that as a fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet(Vec<Landmark>);

impl LandmarkSet {
    /// Wrap a vector of landmarks
    #[must_use]
    pub const fn new(landmarks: Vec<Landmark>) -> Self {
        Self(landmarks)
    }

    /// Empty set, meaning no pose was detected
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Landmark at `idx`, if present
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Landmark> {
        self.0.get(idx)
    }

    /// Number of landmarks
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no pose was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of landmarks above the visibility threshold
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.0.iter().filter(|lm| lm.is_visible()).count()
    }

    /// Iterate over the landmarks in index order
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.0.iter()
    }

    /// Borrow as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Landmark] {
        &self.0
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self(landmarks)
    }
}
