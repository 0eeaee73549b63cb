// ABOUTME: Core types and constants for the Pierre form coach
// ABOUTME: Foundation crate with error handling, domain records, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Core
//!
//! Foundation crate shared by the intelligence engines and the HTTP server.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Landmarks, exercise catalog records, profiles, progress, and engine outputs
//! - **constants**: Defaults organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
