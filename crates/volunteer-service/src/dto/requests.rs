//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize`, and `Validate` where the shape alone
//! can be checked. Profile submissions use `volunteer_core::ProfileSubmission`.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;
use volunteer_core::{DomainError, EventDraft, SkillId, Urgency};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,

    /// `"admin"` registers an administrator; anything else a volunteer
    pub role: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Skill Requests
// ============================================================================

/// Create skill request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[serde(alias = "skill_name", alias = "skillName", default)]
    #[validate(length(max = 100, message = "Skill name must be at most 100 characters"))]
    pub name: String,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create or fully replace an event
///
/// Missing text fields deserialize as empty so the service can report every
/// missing field in one message.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventRequest {
    #[serde(alias = "eventName", default)]
    #[validate(length(max = 100, message = "Event name must be at most 100 characters"))]
    pub event_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub location: String,

    /// `high`, `medium` or `low` (any case); defaults to medium
    pub urgency: Option<String>,

    /// Calendar date, `YYYY-MM-DD`
    #[serde(alias = "eventDate", alias = "date")]
    pub event_date: Option<NaiveDate>,

    #[serde(alias = "required_skills", alias = "skillIds", default)]
    pub skills: Vec<i64>,
}

impl EventRequest {
    /// Convert to a draft, parsing the urgency and de-duplicating skill ids.
    ///
    /// # Errors
    /// `ValidationError` if the date is missing or the urgency is unknown
    pub fn into_draft(self) -> Result<EventDraft, DomainError> {
        let Some(date) = self.event_date else {
            return Err(DomainError::ValidationError(
                "Missing required fields: event_date".to_string(),
            ));
        };
        let urgency = match self.urgency.as_deref().map(str::trim) {
            None | Some("") => Urgency::default(),
            Some(raw) => raw
                .parse()
                .map_err(|e: volunteer_core::UnknownVariant| {
                    DomainError::ValidationError(e.to_string())
                })?,
        };

        let mut draft = EventDraft {
            name: self.event_name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            urgency,
            date,
            required_skills: self.skills.into_iter().map(SkillId::new).collect(),
        };
        draft.dedup_skills();
        Ok(draft)
    }
}

// ============================================================================
// Matching Requests
// ============================================================================

/// Attach volunteers to an event
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchVolunteersRequest {
    #[serde(alias = "eventId")]
    #[validate(range(min = 1, message = "event_id must be a positive integer"))]
    pub event_id: i64,

    #[serde(alias = "volunteerIds", alias = "user_ids", default)]
    #[validate(length(min = 1, message = "At least one volunteer is required"))]
    pub volunteers: Vec<i64>,
}

/// Self-service join
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JoinEventRequest {
    #[serde(alias = "userId")]
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i64,

    #[serde(alias = "eventId")]
    #[validate(range(min = 1, message = "event_id must be a positive integer"))]
    pub event_id: i64,
}

/// Admin participation update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMatchStatusRequest {
    /// `Upcoming`, `Attended` or `Missed` (any case)
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

// ============================================================================
// Report Requests
// ============================================================================

/// Query string of `GET /reports`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    /// `Upcoming`, `Attended`, `Missed` or `None`
    pub status: Option<String>,
    /// Column to sort by
    pub sort: Option<String>,
    /// `asc` (default) or `desc`
    pub order: Option<String>,
}
