//! # volunteer-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{validate_password, AccessToken, Claims, JwtService, Passwords};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
