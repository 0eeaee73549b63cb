// ABOUTME: HTTP route modules for the coaching API
// ABOUTME: One router per domain, merged by the server module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route definitions
//!
//! Each domain exposes a `*Routes::routes(resources)` constructor returning
//! an axum `Router`. Handlers stay thin and delegate to the service layer.

/// Form and progress analysis
pub mod analysis;
/// Exercise library listing
pub mod exercises;
/// Liveness and readiness
pub mod health;
/// Workout plan generation
pub mod workouts;

pub use analysis::AnalysisRoutes;
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use workouts::WorkoutRoutes;

use crate::errors::{AppError, AppResult};
use axum::http::HeaderMap;

/// Header carrying the caller's user identifier
pub const USER_ID_HEADER: &str = "x-user-id";

/// The `X-User-ID` header, if present and non-blank
#[must_use]
pub fn user_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

/// The `X-User-ID` header, rejecting the request when it is absent
///
/// # Errors
///
/// Returns `MissingRequiredField` (HTTP 400) if the header is missing or blank
pub fn require_user_id(headers: &HeaderMap) -> AppResult<String> {
    user_id_from_headers(headers).ok_or_else(|| AppError::missing_field("User ID required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_blank_user_id_is_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("   "));
        assert!(user_id_from_headers(&headers).is_none());
        assert_eq!(require_user_id(&headers).unwrap_err().http_status(), 400);
    }

    #[test]
    fn test_user_id_is_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static(" user-7 "));
        assert_eq!(user_id_from_headers(&headers).as_deref(), Some("user-7"));
    }
}
