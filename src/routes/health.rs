// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness reports the service name; readiness reports cache, catalog, and model status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` never touches a dependency. `/ready` checks the cache backend
//! and reports what was loaded at startup.

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use coach_core::constants::service_names::FORM_COACH;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": FORM_COACH,
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        let cache_healthy = match resources.cache.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Cache health check failed");
                false
            }
        };

        Json(serde_json::json!({
            "status": "ready",
            "cache": {
                "backend": resources.cache.backend_name(),
                "healthy": cache_healthy
            },
            "catalog_size": resources.catalog.len(),
            "pose_estimator": resources.pose_estimator.name(),
            "form_models": resources.form_models.availability(),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
