// ABOUTME: Domain service layer between HTTP handlers and the engines and stores
// ABOUTME: Applies the degrade-to-default policy for collaborator faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Handlers stay thin and delegate here. Services load context from the
//! store, run the pure engines, and persist results, logging and absorbing
//! faults the client should never see.

/// Frame decoding, pose estimation, scoring, and background persistence
pub mod form_analysis;

/// Progress history loading and trend analysis
pub mod progress_analysis;

/// Cache-backed rep tracker
pub mod rep_counter;

/// Profile and history loading, plan generation, and workout persistence
pub mod workout_generation;
