//! Errors returned by the service layer

use volunteer_common::AppError;
use volunteer_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A rule of the volunteer model was broken, or a store failed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Hashing, tokens or credentials
    #[error(transparent)]
    App(#[from] AppError),

    /// Request input a service rejects before touching a store, such as an
    /// unknown sort column or an empty volunteer list
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => e.http_status(),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// The domain error underneath, however it was wrapped
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use volunteer_core::{EventId, MatchStatus, UserId};

    #[test]
    fn test_domain_status_codes() {
        let err = ServiceError::from(DomainError::EventNotFound(EventId::new(1)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_EVENT");

        let err = ServiceError::from(DomainError::MatchNotUpcoming(MatchStatus::Missed));
        assert_eq!(err.status_code(), 409);

        let err = ServiceError::from(DomainError::PastDate(chrono::NaiveDate::MIN));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "PAST_DATE");

        let err = ServiceError::from(DomainError::DatabaseError("boom".to_string()));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_app_errors_pass_through() {
        let err = ServiceError::from(AppError::InvalidCredentials);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("invalid sort column: age");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Validation error: invalid sort column: age");
    }

    #[test]
    fn test_as_domain_through_app_error() {
        let err = ServiceError::App(AppError::Domain(DomainError::UserNotFound(UserId::new(3))));
        assert!(err.as_domain().is_some_and(DomainError::is_not_found));
        assert!(ServiceError::validation("x").as_domain().is_none());
    }
}
