//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use std::collections::HashMap;

use volunteer_core::entities::{
    Event, HistoryEntry, Notification, Profile, ReportRow, Skill, User, Volunteer,
};
use volunteer_core::SkillId;

use super::responses::{
    EventResponse, HistoryEntryResponse, NotificationResponse, ProfileResponse,
    ReportRowResponse, SkillResponse, UserResponse, VolunteerResponse,
};

/// Placeholder for absent report values
pub const NONE_LABEL: &str = "None";

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.into_inner(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<&Volunteer> for VolunteerResponse {
    fn from(volunteer: &Volunteer) -> Self {
        Self {
            user_id: volunteer.user_id.into_inner(),
            full_name: volunteer.display_name().to_string(),
        }
    }
}

// ============================================================================
// Skill Mappers
// ============================================================================

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            skill_id: skill.id.into_inner(),
            skill_name: skill.name.clone(),
        }
    }
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            skill_id: skill.id.into_inner(),
            skill_name: skill.name,
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

/// An event paired with the skill catalog used to name its skills
#[derive(Debug, Clone, Copy)]
pub struct EventWithSkills<'a> {
    pub event: &'a Event,
    pub catalog: &'a HashMap<SkillId, String>,
}

impl<'a> EventWithSkills<'a> {
    pub fn new(event: &'a Event, catalog: &'a HashMap<SkillId, String>) -> Self {
        Self { event, catalog }
    }
}

impl From<EventWithSkills<'_>> for EventResponse {
    fn from(data: EventWithSkills<'_>) -> Self {
        let event = data.event;
        Self {
            event_id: event.id.into_inner(),
            event_name: event.name.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            urgency: event.urgency,
            event_date: event.date,
            required_skills: event.skill_names(data.catalog).join(", "),
            skills: event
                .resolve_skills(data.catalog)
                .into_iter()
                .map(SkillResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// History Mappers
// ============================================================================

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            event_id: entry.event_id.into_inner(),
            event_name: entry.event_name,
            description: entry.description,
            location: entry.location,
            urgency: entry.urgency,
            event_date: entry.event_date,
            participated: entry.status,
        }
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id.into_inner(),
            full_name: profile.full_name,
            address_1: profile.address_1,
            address_2: profile.address_2,
            city: profile.city,
            state: profile.state,
            zip_code: profile.zip_code,
            skills: profile.skills.into_iter().map(SkillId::into_inner).collect(),
            preferences: profile.preferences,
            availability: profile.availability,
        }
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.into_inner(),
            volunteer_id: notification.volunteer_id.into_inner(),
            title: notification.title,
            message: notification.message,
            unread: notification.unread,
            created_at: notification.created_at,
        }
    }
}

// ============================================================================
// Report Mappers
// ============================================================================

impl From<&ReportRow> for ReportRowResponse {
    fn from(row: &ReportRow) -> Self {
        let or_none = |value: Option<String>| value.unwrap_or_else(|| NONE_LABEL.to_string());
        Self {
            user_id: row.user_id.into_inner(),
            full_name: or_none(row.full_name.clone()),
            email: row.email.clone(),
            event_name: or_none(row.event_name.clone()),
            event_date: or_none(row.event_date.map(|d| d.to_string())),
            participated: or_none(row.participated.map(|s| s.as_str().to_string())),
        }
    }
}
