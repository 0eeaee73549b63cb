// ABOUTME: Detection confidence as the share of visible landmarks
// ABOUTME: Empty landmark sets have zero confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::models::LandmarkSet;

/// Share of landmarks with visibility above 0.5, capped at 1.0
#[must_use]
pub fn confidence(landmarks: &LandmarkSet) -> f64 {
    if landmarks.is_empty() {
        return 0.0;
    }
    (landmarks.visible_count() as f64 / landmarks.len() as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::models::Landmark;

    #[test]
    fn test_empty_is_zero() {
        assert!(confidence(&LandmarkSet::empty()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monotonic_in_visible_count() {
        let mut previous = 0.0;
        for visible in 0..=33 {
            let mut points = vec![Landmark::new(0.0, 0.0, 0.0, 1.0); visible];
            points.extend(vec![Landmark::new(0.0, 0.0, 0.0, 0.2); 33 - visible]);
            let value = confidence(&LandmarkSet::new(points));
            assert!(value >= previous);
            assert!(value <= 1.0);
            previous = value;
        }
        assert!((previous - 1.0).abs() < f64::EPSILON);
    }
}
