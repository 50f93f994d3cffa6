//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! `RUST_LOG` always wins over the configured default directives.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for this workspace's crates
    pub level: Level,
    /// Level for HTTP request spans from tower-http
    pub http_level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include span close events with timings
    pub span_events: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            http_level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Debug logging with readable output
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            http_level: Level::DEBUG,
            json: false,
            span_events: true,
            file_line: true,
        }
    }

    /// Structured JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            http_level: Level::INFO,
            json: true,
            span_events: false,
            file_line: false,
        }
    }

    /// Preset matching the deployment environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Staging => Self::default(),
            Environment::Production => Self::production(),
        }
    }

    /// Filter used when `RUST_LOG` is unset
    #[must_use]
    pub fn default_directives(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        let http = self.http_level.as_str().to_lowercase();
        format!(
            "warn,volunteer_api={level},volunteer_service={level},volunteer_db={level},\
             volunteer_common={level},tower_http={http},sqlx=warn"
        )
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Try to initialize tracing; safe to call more than once (tests do)
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(&TracingConfig::default())
}

/// Try to initialize tracing with custom configuration
pub fn try_init_tracing_with_config(config: &TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_file(config.file_line)
                    .with_line_number(config.file_line)
                    .with_span_events(config.span_events()),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(config.file_line)
                    .with_line_number(config.file_line)
                    .with_span_events(config.span_events()),
            )
            .try_init()
    };

    result.map_err(TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(#[source] TryInitError),
}
