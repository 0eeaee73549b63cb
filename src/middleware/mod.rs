// ABOUTME: HTTP middleware for the coaching API
// ABOUTME: CORS configuration layered onto the router by the server module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
