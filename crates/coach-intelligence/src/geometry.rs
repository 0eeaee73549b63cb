// ABOUTME: Joint angle computation from three pose landmarks
// ABOUTME: Angles are measured at the middle point in the image plane
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::GeometryError;
use coach_core::models::Landmark;
use tracing::debug;

/// Angle at `b` formed by `a-b-c`, in degrees within [0, 180].
///
/// Uses the x/y image-plane coordinates. The cosine is clamped to [-1, 1]
/// before `acos` to absorb floating-point drift.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] when `a` or `c` coincides with `b`,
/// and [`GeometryError::NonFinite`] when any coordinate is NaN or infinite.
pub fn try_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> Result<f64, GeometryError> {
    let coords = [a.x, a.y, b.x, b.y, c.x, c.y];
    if coords.iter().any(|v| !v.is_finite()) {
        return Err(GeometryError::NonFinite);
    }

    let (bax, bay) = (a.x - b.x, a.y - b.y);
    let (bcx, bcy) = (c.x - b.x, c.y - b.y);

    let mag_ba = bax.hypot(bay);
    let mag_bc = bcx.hypot(bcy);
    if mag_ba < f64::EPSILON || mag_bc < f64::EPSILON {
        return Err(GeometryError::Degenerate);
    }

    let cosine = (bax.mul_add(bcx, bay * bcy) / (mag_ba * mag_bc)).clamp(-1.0, 1.0);
    let degrees = cosine.acos().to_degrees();
    if degrees.is_finite() {
        Ok(degrees)
    } else {
        Err(GeometryError::NonFinite)
    }
}

/// Infallible angle: degenerate or non-finite input yields `0.0`.
#[must_use]
pub fn angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    try_angle(a, b, c).unwrap_or_else(|e| {
        debug!(error = %e, "Angle computation degenerate, returning 0");
        0.0
    })
}
