// ABOUTME: HTTP server assembly merging domain routers with tracing, CORS, and body-limit layers
// ABOUTME: Serves the router on the configured address until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{AnalysisRoutes, ExerciseRoutes, HealthRoutes, WorkoutRoutes};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let max_body = resources.config.max_frame_bytes;
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AnalysisRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(ExerciseRoutes::routes(resources))
        // The Json extractor has its own 2 MiB default; the layer below is the real cap
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve HTTP until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {addr}: {e}")))?;

    info!("HTTP server listening on {addr}");
    display_available_endpoints(&addr);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
        return;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(addr: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Form Analysis:     POST http://{addr}/analyze/form");
    info!("   Progress Analysis: POST http://{addr}/analyze/progress");
    info!("   Generate Workout:  POST http://{addr}/generate/workout");
    info!("   Exercise Library:  GET  http://{addr}/exercises");
    info!("   Health:            GET  http://{addr}/health");
    info!("   Readiness:         GET  http://{addr}/ready");
    info!("=== End of Endpoint List ===");
}
