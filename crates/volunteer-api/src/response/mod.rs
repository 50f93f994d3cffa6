//! Response types and error handling for API endpoints
//!
//! Every failure leaves the server as `{"error": {"code", "message", "details"?}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;
use volunteer_common::AppError;
use volunteer_core::DomainError;
use volunteer_service::ServiceError;

/// Every way a request can fail, as seen by a handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    /// DTO field checks from `validator`
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => e.http_status(),
            Self::Validation(_)
            | Self::InvalidPath(_)
            | Self::InvalidQuery(_)
            | Self::InvalidBody(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody(_) => "INVALID_REQUEST_BODY",
        }
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Structured details for the error body.
    ///
    /// DTO validation failures carry the validator's report; profile
    /// rejections carry the field to message map.
    fn details(&self) -> Option<serde_json::Value> {
        let domain = match self {
            Self::Validation(errors) => return serde_json::to_value(errors).ok(),
            Self::Domain(e) => Some(e),
            Self::Service(e) => e.as_domain(),
            Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        }?;
        domain
            .field_errors()
            .and_then(|fields| serde_json::to_value(fields).ok())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store failures are logged in full and reported opaquely
        let message = if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
