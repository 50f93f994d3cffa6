//! Test fixtures and data generators
//!
//! Request bodies and the response shapes the tests read back.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Suffix unique within a run and across runs sharing a database
pub fn unique_suffix() -> String {
    format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Date `days` from today
pub fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            email: format!("volunteer{}@example.com", unique_suffix()),
            password: "TestPass123!".to_string(),
            role: None,
        }
    }

    pub fn admin() -> Self {
        Self {
            email: format!("admin{}@example.com", unique_suffix()),
            password: "AdminPass123!".to_string(),
            role: Some("admin".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub user_id: i64,
    pub role: String,
}

// ============================================================================
// Skills and events
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateSkillRequest {
    pub name: String,
}

impl CreateSkillRequest {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedSkillResponse {
    pub skill_id: i64,
    pub skill_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventRequest {
    pub event_name: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    pub event_date: NaiveDate,
    pub skills: Vec<i64>,
}

impl EventRequest {
    /// Event a week out
    pub fn new(name: &str, skills: &[i64]) -> Self {
        Self {
            event_name: name.to_string(),
            description: format!("{name} description"),
            location: "Galveston, TX".to_string(),
            urgency: None,
            event_date: days_from_today(7),
            skills: skills.to_vec(),
        }
    }

    pub fn with_urgency(mut self, urgency: &str) -> Self {
        self.urgency = Some(urgency.to_string());
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.event_date = date;
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedEventResponse {
    pub event_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SkillResponse {
    pub skill_id: i64,
    pub skill_name: String,
}

#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub event_id: i64,
    pub event_name: String,
    pub urgency: String,
    pub event_date: NaiveDate,
    pub required_skills: String,
    pub skills: Vec<SkillResponse>,
}

// ============================================================================
// Matching and history
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MatchRequest {
    pub event_id: i64,
    pub volunteers: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MatchPair {
    pub user_id: i64,
    pub outcome: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchResultResponse {
    pub event_id: i64,
    pub results: Vec<MatchPair>,
}

#[derive(Debug, Serialize)]
pub struct JoinRequest {
    pub user_id: i64,
    pub event_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryEntry {
    pub event_id: i64,
    pub event_name: String,
    pub participated: String,
}

#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub title: String,
    pub unread: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReportRow {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub event_name: String,
    pub event_date: String,
    pub participated: String,
}

// ============================================================================
// Profiles
// ============================================================================

/// A profile body that passes every field check
pub fn valid_profile(user_id: i64) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "full_name": "Jane Volunteer",
        "address_1": "100 Main St",
        "city": "Houston",
        "state": "TX",
        "zip_code": "77002",
        "skills": [],
        "preferences": "Weekends only",
        "availability": ["Saturday", "Sunday"]
    })
}
