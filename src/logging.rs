// ABOUTME: Structured logging setup for the form coach service
// ABOUTME: Chooses output format and filter directives from the environment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging with `tracing`
//!
//! `RUST_LOG` wins over the configured level. `LOG_FORMAT` picks `json`,
//! `compact` or the default pretty output.

use crate::errors::{AppError, AppResult};
use coach_core::constants::service_names;
use std::env;
use std::io;
use tracing::{info, warn, Level};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Third-party targets held to a quieter level
const QUIET_TARGETS: [(&str, Level); 5] = [
    ("hyper", Level::WARN),
    ("reqwest", Level::WARN),
    ("redis", Level::WARN),
    ("sqlx", Level::INFO),
    ("tower_http", Level::INFO),
];

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Multi-field human-readable output
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`; anything unrecognized is pretty
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        }
    }
}

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level for this crate when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Emit file, line and thread of each event
    pub verbose: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// `development` or `production`
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            verbose: false,
            include_spans: false,
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_VERBOSE`, `LOG_INCLUDE_SPANS` and `ENVIRONMENT`
    ///
    /// Production turns on verbose output and span events.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned());
        let production = environment.eq_ignore_ascii_case("production");

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
            format: env::var("LOG_FORMAT").map_or(LogFormat::Pretty, |f| LogFormat::parse(&f)),
            verbose: production || env::var("LOG_VERBOSE").is_ok(),
            include_spans: production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            environment,
        }
    }

    /// `RUST_LOG` (or the configured level) plus quieter third-party targets
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        let own: Directive = format!("pierre_form_coach={}", self.level)
            .parse()
            .unwrap_or_else(|_| Level::INFO.into());

        QUIET_TARGETS
            .iter()
            .filter_map(|(target, level)| format!("{target}={level}").parse::<Directive>().ok())
            .fold(EnvFilter::new(base), EnvFilter::add_directive)
            .add_directive(own)
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let spans = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(io::stdout)
            .with_file(self.verbose)
            .with_line_number(self.verbose)
            .with_thread_ids(self.verbose)
            .with_span_events(spans);
        let registry = Registry::default().with(self.env_filter());

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init(),
            LogFormat::Pretty => registry.with(layer).try_init(),
            LogFormat::Compact => registry.with(layer.compact().with_target(false)).try_init(),
        }
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

        info!(
            service.name = service_names::FORM_COACH,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = self.format.as_str(),
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> AppResult<()> {
    LoggingConfig::from_env().init()
}

/// Domain events with stable field names
pub struct AppLogger;

impl AppLogger {
    /// One analyzed frame
    pub fn log_form_analysis(
        user_id: Option<&str>,
        exercise_type: &str,
        form_score: f64,
        rep_count: u32,
        confidence: f64,
    ) {
        info!(
            user.id = user_id.unwrap_or("anonymous"),
            exercise.type = %exercise_type,
            form.score = form_score,
            form.rep_count = rep_count,
            form.confidence = confidence,
            "Form analysis"
        );
    }

    /// One generated plan
    pub fn log_workout_generated(
        user_id: &str,
        session_type: &str,
        exercise_count: usize,
        duration_minutes: u32,
        persisted: bool,
    ) {
        info!(
            user.id = %user_id,
            session.type = %session_type,
            workout.exercises = exercise_count,
            workout.duration_min = duration_minutes,
            workout.persisted = persisted,
            "Workout generated"
        );
    }

    /// A timed write to the store
    pub fn log_database_operation(operation: &str, table: &str, success: bool, duration_ms: u64) {
        if success {
            info!(
                db.operation = operation,
                db.table = table,
                db.duration_ms = duration_ms,
                "Database write"
            );
        } else {
            warn!(
                db.operation = operation,
                db.table = table,
                db.duration_ms = duration_ms,
                "Database write failed"
            );
        }
    }
}
