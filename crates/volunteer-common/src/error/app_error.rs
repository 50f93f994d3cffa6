//! Errors raised outside the domain model
//!
//! Credential checks, token handling, startup configuration and the
//! infrastructure around the stores. Domain rule violations pass through
//! unchanged in [`AppError::Domain`].

use volunteer_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Email/password pair did not verify
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Input rejected before reaching a store, e.g. an empty password
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status this error maps to
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => e.http_status(),
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
