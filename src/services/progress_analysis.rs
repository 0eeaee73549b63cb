// ABOUTME: Progress analysis service reading recent history and summarizing trends
// ABOUTME: A history read fault is treated as an empty history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use coach_core::models::progress::PROGRESS_WINDOW;
use coach_core::models::{ProgressRecord, ProgressReport};
use coach_intelligence::ProgressAnalyzer;
use tracing::{debug, warn};

/// The user's most recent progress records, newest first
pub async fn load_recent_progress(resources: &ServerResources, user_id: &str) -> Vec<ProgressRecord> {
    match resources
        .database
        .progress()
        .recent_progress(user_id, PROGRESS_WINDOW)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            warn!(user.id = %user_id, error = %e, "Failed to load progress history, using empty history");
            Vec::new()
        }
    }
}

/// Analyze a user's recent training
pub async fn analyze_progress(resources: &ServerResources, user_id: &str) -> ProgressReport {
    let history = load_recent_progress(resources, user_id).await;
    let report = ProgressAnalyzer::analyze(&history);

    debug!(
        user.id = %user_id,
        progress.records = history.len(),
        progress.insights = report.insights.len(),
        "Progress analyzed"
    );

    report
}
