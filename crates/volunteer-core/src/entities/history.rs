//! Matches between volunteers and events, and the history view built from them

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{EventId, MatchStatus, Urgency, UserId};

/// One volunteer attached to one event. Unique per `(event_id, user_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub event_id: EventId,
    pub user_id: UserId,
    pub status: MatchStatus,
    pub matched_at: DateTime<Utc>,
}

impl Match {
    pub fn new(event_id: EventId, user_id: UserId) -> Self {
        Self {
            event_id,
            user_id,
            status: MatchStatus::Upcoming,
            matched_at: Utc::now(),
        }
    }
}

/// A match joined with the event it refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub event_id: EventId,
    pub event_name: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub event_date: NaiveDate,
    pub status: MatchStatus,
}

/// Outcome of attaching one volunteer to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    AlreadyMatched,
    UnknownVolunteer,
}

impl MatchOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::AlreadyMatched => "already_matched",
            Self::UnknownVolunteer => "unknown_volunteer",
        }
    }

    #[inline]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::Matched)
    }
}
