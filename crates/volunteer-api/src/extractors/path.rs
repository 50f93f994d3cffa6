//! Path parameter extractors
//!
//! Path segments are taken as strings and parsed into typed ids so a
//! malformed id is a 400 with the shared error body rather than axum's
//! plain-text rejection.

use serde::Deserialize;
use volunteer_core::{EventId, NotificationId, SkillId, UserId};

use crate::response::ApiError;

fn parse_id<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// Single `:id` segment
#[derive(Debug, Deserialize)]
pub struct IdPath {
    pub id: String,
}

impl IdPath {
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        parse_id(&self.id, "user_id")
    }

    pub fn event_id(&self) -> Result<EventId, ApiError> {
        parse_id(&self.id, "event_id")
    }

    pub fn skill_id(&self) -> Result<SkillId, ApiError> {
        parse_id(&self.id, "skill_id")
    }

    pub fn notification_id(&self) -> Result<NotificationId, ApiError> {
        parse_id(&self.id, "notification_id")
    }
}

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        parse_id(&self.user_id, "user_id")
    }
}

/// Path parameters naming one volunteer/event pair, in either order
#[derive(Debug, Deserialize)]
pub struct MatchPath {
    pub event_id: String,
    pub user_id: String,
}

impl MatchPath {
    /// Parse event_id
    pub fn event_id(&self) -> Result<EventId, ApiError> {
        parse_id(&self.event_id, "event_id")
    }

    /// Parse user_id
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        parse_id(&self.user_id, "user_id")
    }

    /// Both ids, event first
    pub fn ids(&self) -> Result<(EventId, UserId), ApiError> {
        Ok((self.event_id()?, self.user_id()?))
    }
}
