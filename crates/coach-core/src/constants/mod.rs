// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the form coach grouped by concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small per-domain modules rather than one flat file.

/// Cache-related constants (TTL, sizes, key namespace)
pub mod cache;

/// Service identity used in logs and health responses
pub mod service_names {
    /// Service name of the HTTP server
    pub const FORM_COACH: &str = "pierre-form-coach";
}

/// Redis connection configuration
pub mod redis {
    /// Redis connection timeout in seconds
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;
    /// Redis response timeout in seconds
    pub const RESPONSE_TIMEOUT_SECS: u64 = 5;
    /// Number of reconnection retries
    pub const RECONNECTION_RETRIES: usize = 5;
    /// Exponential backoff base for retry delays
    pub const RETRY_EXPONENT_BASE: u64 = 2;
    /// Maximum retry delay in milliseconds
    pub const MAX_RETRY_DELAY_MS: u64 = 30_000;
    /// Initial connection retry count
    pub const INITIAL_CONNECTION_RETRIES: u32 = 3;
    /// Initial retry delay in milliseconds
    pub const INITIAL_RETRY_DELAY_MS: u64 = 500;
}

/// Server defaults
pub mod server {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/form_coach.db";
    /// Largest accepted request body (base64 frames are large)
    pub const DEFAULT_MAX_FRAME_BYTES: usize = 10 * 1024 * 1024;
}

/// Pose estimation collaborator defaults
pub mod pose {
    /// Request timeout for the remote estimator
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    /// Path appended to the estimator base URL
    pub const LANDMARKS_PATH: &str = "/landmarks";
}

/// Trained classifier model discovery
pub mod models {
    /// Default directory holding form classifier files
    pub const DEFAULT_MODEL_PATH: &str = "/app/models";
    /// File suffix for per-exercise classifiers
    pub const CLASSIFIER_SUFFIX: &str = "_form_classifier.h5";
}
