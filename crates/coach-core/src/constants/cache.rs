// ABOUTME: Cache-related constants for TTL, capacity, and cleanup intervals
// ABOUTME: Shared by the in-memory and Redis rep counter backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default maximum cache entries for in-memory cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Rep counter lifetime after the last update (5 minutes)
pub const TTL_REP_COUNT_SECS: u64 = 300;

/// Cache key prefix for namespacing
pub const CACHE_KEY_PREFIX: &str = "pierre:coach:";
