// ABOUTME: Main library entry point for the Pierre form coach HTTP service
// ABOUTME: Exercise form scoring, rep tracking, workout generation, and progress analysis over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Form Coach
//!
//! An HTTP service that scores exercise form from camera frames, counts
//! repetitions per user, and builds personalized workout plans from an
//! exercise catalog.
//!
//! ## Architecture
//!
//! - **coach-core**: errors, domain records, and constants
//! - **coach-intelligence**: pure scoring, selection, and analysis engines
//! - this crate: configuration, logging, `SQLite` storage, the rep-counter
//!   cache, the pose estimator client, services, and axum routes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_form_coach::config::environment::ServerConfig;
//! use pierre_form_coach::errors::AppResult;
//! use pierre_form_coach::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::initialize(config).await?);
//!     pierre_form_coach::server::run(resources).await
//! }
//! ```

/// Rep-counter cache with in-memory and Redis backends
pub mod cache;

/// Form classifier model discovery
pub mod classifiers;

/// Environment-driven configuration
pub mod config;

/// `SQLite` persistence
pub mod database;

/// Unified error handling re-exported from coach-core
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Pose estimation collaborator
pub mod pose;

/// Shared server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Domain services between routes and engines
pub mod services;
