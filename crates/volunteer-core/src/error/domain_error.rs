//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::validation::FieldErrors;
use crate::value_objects::{EventId, MatchStatus, NotificationId, SkillId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Skill not found: {0}")]
    SkillNotFound(SkillId),

    #[error("Profile not found for user: {0}")]
    ProfileNotFound(UserId),

    #[error("Volunteer {user_id} is not matched to event {event_id}")]
    MatchNotFound { event_id: EventId, user_id: UserId },

    #[error("Notification not found: {0}")]
    NotificationNotFound(NotificationId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Profile validation failed")]
    InvalidProfile(FieldErrors),

    #[error("Event date {0} is in the past")]
    PastDate(NaiveDate),

    #[error("Unknown skill ids: {}", join_ids(.0))]
    UnknownSkills(Vec<SkillId>),

    #[error("Cannot change status from {from} to {to}")]
    InvalidStatusTransition { from: MatchStatus, to: MatchStatus },

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Invalid email or password")]
    InvalidCredentials,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Skill already exists: {0}")]
    SkillAlreadyExists(String),

    #[error("Volunteer already attending this event")]
    AlreadyMatched,

    #[error("Only upcoming events can be left (current status: {0})")]
    MatchNotUpcoming(MatchStatus),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

fn join_ids(ids: &[SkillId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::SkillNotFound(_) => "UNKNOWN_SKILL",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::MatchNotFound { .. } => "UNKNOWN_MATCH",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidProfile(_) => "INVALID_PROFILE",
            Self::PastDate(_) => "PAST_DATE",
            Self::UnknownSkills(_) => "UNKNOWN_SKILLS",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",

            // Authentication
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SkillAlreadyExists(_) => "SKILL_ALREADY_EXISTS",
            Self::AlreadyMatched => "ALREADY_MATCHED",
            Self::MatchNotUpcoming(_) => "MATCH_NOT_UPCOMING",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::EventNotFound(_)
                | Self::SkillNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::MatchNotFound { .. }
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidProfile(_)
                | Self::PastDate(_)
                | Self::UnknownSkills(_)
                | Self::InvalidStatusTransition { .. }
        )
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::SkillAlreadyExists(_)
                | Self::AlreadyMatched
                | Self::MatchNotUpcoming(_)
        )
    }

    /// HTTP status a client sees for this error
    pub fn http_status(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authentication() {
            401
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }

    /// Per-field messages, when the error carries them
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::InvalidProfile(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::EventNotFound(EventId::new(1));
        assert_eq!(err.code(), "UNKNOWN_EVENT");

        let err = DomainError::PastDate(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(err.code(), "PAST_DATE");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(UserId::new(1)).is_not_found());
        assert!(DomainError::MatchNotFound {
            event_id: EventId::new(1),
            user_id: UserId::new(2)
        }
        .is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::UnknownSkills(vec![SkillId::new(9)]).is_validation());
        assert!(DomainError::MatchNotUpcoming(MatchStatus::Attended).is_conflict());
        assert!(DomainError::InvalidCredentials.is_authentication());
        assert!(!DomainError::DatabaseError("x".into()).is_validation());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(DomainError::SkillNotFound(SkillId::new(2)).http_status(), 404);
        assert_eq!(DomainError::InvalidCredentials.http_status(), 401);
        assert_eq!(DomainError::InvalidEmail.http_status(), 400);
        assert_eq!(DomainError::AlreadyMatched.http_status(), 409);
        assert_eq!(DomainError::InternalError("x".into()).http_status(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UnknownSkills(vec![SkillId::new(4), SkillId::new(5)]);
        assert_eq!(err.to_string(), "Unknown skill ids: 4, 5");

        let err = DomainError::PastDate(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(err.to_string(), "Event date 2024-05-01 is in the past");
    }

    #[test]
    fn test_field_errors() {
        let mut fields = FieldErrors::new();
        fields.insert("city".into(), "City is required".into());
        let err = DomainError::InvalidProfile(fields);
        assert_eq!(err.field_errors().map(FieldErrors::len), Some(1));
        assert!(DomainError::InvalidEmail.field_errors().is_none());
    }
}
