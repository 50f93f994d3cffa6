//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are plain
//! integers and dates are `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use volunteer_core::{MatchOutcome, MatchStatus, Role, Urgency, Weekday};

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Returned by registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

/// Returned by login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Volunteer option for matching forms
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerResponse {
    pub user_id: i64,
    pub full_name: String,
}

// ============================================================================
// Skill Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub skill_id: i64,
    pub skill_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedSkillResponse {
    pub message: String,
    pub skill_id: i64,
    pub skill_name: String,
}

// ============================================================================
// Event Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub event_id: i64,
    pub event_name: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub event_date: NaiveDate,
    /// Skill names joined with ", "; deleted skills are omitted
    pub required_skills: String,
    pub skills: Vec<SkillResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedEventResponse {
    pub message: String,
    pub event_id: i64,
}

// ============================================================================
// Matching Responses
// ============================================================================

/// Outcome for one requested volunteer
#[derive(Debug, Clone, Serialize)]
pub struct MatchPairResponse {
    pub user_id: i64,
    pub outcome: &'static str,
}

/// Outcome of a matching request
#[derive(Debug, Clone, Serialize)]
pub struct MatchResultResponse {
    pub message: String,
    pub event_id: i64,
    pub results: Vec<MatchPairResponse>,
}

impl MatchResultResponse {
    pub fn new(event_id: i64, outcomes: Vec<(i64, MatchOutcome)>) -> Self {
        let created = outcomes.iter().filter(|(_, o)| o.is_new()).count();
        let message = if created == 0 {
            "No new matches were created".to_string()
        } else {
            format!("Matched {created} volunteer(s)")
        };
        Self {
            message,
            event_id,
            results: outcomes
                .into_iter()
                .map(|(user_id, outcome)| MatchPairResponse {
                    user_id,
                    outcome: outcome.as_str(),
                })
                .collect(),
        }
    }

    /// Whether at least one new match was created
    pub fn any_new(&self) -> bool {
        self.results
            .iter()
            .any(|r| r.outcome == MatchOutcome::Matched.as_str())
    }
}

/// Self-service join/leave result
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub message: String,
    pub event_id: i64,
    pub user_id: i64,
    /// `joined`, `already_attending`, `left` or `not_attending`
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchStatusResponse {
    pub message: String,
    pub event_id: i64,
    pub user_id: i64,
    pub participated: MatchStatus,
}

// ============================================================================
// History Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryResponse {
    pub event_id: i64,
    pub event_name: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub event_date: NaiveDate,
    pub participated: MatchStatus,
}

// ============================================================================
// Profile Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: i64,
    pub full_name: String,
    pub address_1: String,
    pub address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub skills: Vec<i64>,
    pub preferences: Option<String>,
    pub availability: Vec<Weekday>,
}

// ============================================================================
// Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub volunteer_id: i64,
    pub title: String,
    pub message: String,
    pub unread: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DismissAllResponse {
    pub message: String,
    pub updated: u64,
}

// ============================================================================
// Report Responses
// ============================================================================

/// One report line; absent values render as `"None"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRowResponse {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub event_name: String,
    pub event_date: String,
    pub participated: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    /// `database` is `None` when the store is in-process
    pub fn ready(database: Option<bool>) -> Self {
        let database_status = match database {
            Some(true) => "healthy",
            Some(false) => "unhealthy",
            None => "not_configured",
        };
        Self {
            status: if Self::is_ready_with(database) { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: database_status.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }

    fn is_ready_with(database: Option<bool>) -> bool {
        database.unwrap_or(true)
    }
}
