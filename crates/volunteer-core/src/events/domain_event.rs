//! Domain events - events emitted when matching state changes
//!
//! Each event names the volunteers it concerns and renders into the
//! notifications those volunteers receive.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::NewNotification;
use crate::value_objects::{EventId, UserId};

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    VolunteerMatched(VolunteerMatchedEvent),
    VolunteerUnmatched(VolunteerUnmatchedEvent),
    EventCancelled(EventCancelledEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::VolunteerMatched(_) => "VOLUNTEER_MATCHED",
            Self::VolunteerUnmatched(_) => "VOLUNTEER_UNMATCHED",
            Self::EventCancelled(_) => "EVENT_CANCELLED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::VolunteerMatched(e) => e.timestamp,
            Self::VolunteerUnmatched(e) => e.timestamp,
            Self::EventCancelled(e) => e.timestamp,
        }
    }

    /// One notification per affected volunteer
    pub fn notifications(&self) -> Vec<NewNotification> {
        match self {
            Self::VolunteerMatched(e) => vec![NewNotification {
                volunteer_id: e.user_id,
                title: "New Event Assignment".to_string(),
                message: format!(
                    "You have been assigned to \"{}\" on {}.",
                    e.event_name, e.event_date
                ),
            }],
            Self::VolunteerUnmatched(e) => vec![NewNotification {
                volunteer_id: e.user_id,
                title: "Assignment Removed".to_string(),
                message: format!("You are no longer assigned to \"{}\".", e.event_name),
            }],
            Self::EventCancelled(e) => e
                .volunteer_ids
                .iter()
                .map(|volunteer_id| NewNotification {
                    volunteer_id: *volunteer_id,
                    title: "Event Cancelled".to_string(),
                    message: format!(
                        "\"{}\" scheduled for {} has been cancelled.",
                        e.event_name, e.event_date
                    ),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerMatchedEvent {
    pub event_id: EventId,
    pub user_id: UserId,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerUnmatchedEvent {
    pub event_id: EventId,
    pub user_id: UserId,
    pub event_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCancelledEvent {
    pub event_id: EventId,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub volunteer_ids: Vec<UserId>,
    pub timestamp: DateTime<Utc>,
}
