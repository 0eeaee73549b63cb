// ABOUTME: Pose estimation collaborator turning an image frame into body landmarks
// ABOUTME: Remote HTTP estimator plus a disabled estimator used when no service is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::PoseServiceConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use coach_core::constants::pose::LANDMARKS_PATH;
use coach_core::models::{Landmark, LandmarkSet};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Extracts body landmarks from a decoded image frame
#[async_trait]
pub trait PoseEstimator: Send + Sync {
    /// Estimate landmarks for one frame
    ///
    /// An empty set means no person was detected.
    ///
    /// # Errors
    ///
    /// Returns an error if the estimator backend is unreachable or answers badly
    async fn estimate(&self, frame: &[u8]) -> AppResult<LandmarkSet>;

    /// Short backend name for readiness reporting
    fn name(&self) -> &'static str;
}

#[derive(Serialize)]
struct LandmarkRequest<'a> {
    frame: &'a str,
}

#[derive(Deserialize)]
struct LandmarkResponse {
    #[serde(default)]
    landmarks: Vec<Landmark>,
}

/// Pose estimator backed by an HTTP landmark service
///
/// Sends `{"frame": <base64>}` to `<base_url>/landmarks` and expects
/// `{"landmarks": [{x, y, z, visibility}, ...]}` back.
pub struct RemotePoseEstimator {
    client: Client,
    endpoint: String,
}

impl RemotePoseEstimator {
    /// Create an estimator for the given service
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: &str, config: &PoseServiceConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::config(format!("Failed to build pose service client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}{LANDMARKS_PATH}", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl PoseEstimator for RemotePoseEstimator {
    #[instrument(skip(self, frame), fields(service = "pose", frame.bytes = frame.len()))]
    async fn estimate(&self, frame: &[u8]) -> AppResult<LandmarkSet> {
        let encoded = STANDARD.encode(frame);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&LandmarkRequest { frame: &encoded })
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("pose", format!("Failed to send landmark request: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                "pose",
                format!("Landmark service returned status: {status}"),
            ));
        }

        let body: LandmarkResponse = response.json().await.map_err(|e| {
            AppError::external_service("pose", format!("Failed to parse landmark response: {e}"))
        })?;

        debug!(landmarks = body.landmarks.len(), "Pose estimated");
        Ok(LandmarkSet::new(body.landmarks))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

/// Estimator used when no pose service is configured; never detects anyone
pub struct DisabledPoseEstimator;

#[async_trait]
impl PoseEstimator for DisabledPoseEstimator {
    async fn estimate(&self, _frame: &[u8]) -> AppResult<LandmarkSet> {
        Ok(LandmarkSet::empty())
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Build the estimator selected by configuration
///
/// # Errors
///
/// Returns an error if the remote client cannot be built
pub fn from_config(config: &PoseServiceConfig) -> AppResult<Arc<dyn PoseEstimator>> {
    match config.url.as_deref() {
        Some(url) => {
            info!(url, timeout_secs = config.timeout_secs, "Using remote pose service");
            Ok(Arc::new(RemotePoseEstimator::new(url, config)?))
        }
        None => {
            info!("POSE_SERVICE_URL not set; pose estimation disabled");
            Ok(Arc::new(DisabledPoseEstimator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_estimator_detects_nothing() {
        let estimator = DisabledPoseEstimator;
        let landmarks = estimator.estimate(b"frame").await.unwrap();
        assert!(landmarks.is_empty());
    }

    #[test]
    fn test_remote_endpoint_joins_path() {
        let config = PoseServiceConfig::default();
        let estimator = RemotePoseEstimator::new("http://pose:8080/", &config).unwrap();
        assert_eq!(estimator.endpoint, "http://pose:8080/landmarks");
    }

    #[test]
    fn test_from_config_without_url_is_disabled() {
        let estimator = from_config(&PoseServiceConfig::default()).unwrap();
        assert_eq!(estimator.name(), "disabled");
    }

    #[test]
    fn test_response_tolerates_missing_landmarks() {
        let body: LandmarkResponse = serde_json::from_str("{}").unwrap();
        assert!(body.landmarks.is_empty());
    }
}
