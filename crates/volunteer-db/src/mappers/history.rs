//! Match, history and report mappers

use volunteer_core::entities::{HistoryEntry, Match, ReportRow};
use volunteer_core::value_objects::{EventId, MatchStatus, UserId};

use crate::models::{HistoryEntryModel, MatchModel, ReportRowModel};

impl From<MatchModel> for Match {
    fn from(model: MatchModel) -> Self {
        Match {
            event_id: EventId::new(model.event_id),
            user_id: UserId::new(model.user_id),
            status: model.participated.parse().unwrap_or_default(),
            matched_at: model.matched_at,
        }
    }
}

impl From<HistoryEntryModel> for HistoryEntry {
    fn from(model: HistoryEntryModel) -> Self {
        HistoryEntry {
            event_id: EventId::new(model.event_id),
            event_name: model.event_name,
            description: model.description,
            location: model.location,
            urgency: model.urgency.parse().unwrap_or_default(),
            event_date: model.event_date,
            status: model.participated.parse().unwrap_or_default(),
        }
    }
}

impl From<ReportRowModel> for ReportRow {
    fn from(model: ReportRowModel) -> Self {
        ReportRow {
            user_id: UserId::new(model.user_id),
            full_name: model.full_name,
            email: model.email,
            event_name: model.event_name,
            event_date: model.event_date,
            participated: model
                .participated
                .and_then(|s| s.parse::<MatchStatus>().ok()),
        }
    }
}
