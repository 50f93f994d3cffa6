//! Event entity <-> model mapper

use volunteer_core::entities::{Event, EventDraft};
use volunteer_core::value_objects::{EventId, SkillId};

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: EventId::new(model.event_id),
            name: model.event_name,
            description: model.description,
            location: model.location,
            urgency: model.urgency.parse().unwrap_or_default(),
            date: model.event_date,
            required_skills: model.skill_ids.into_iter().map(SkillId::new).collect(),
        }
    }
}

/// Draft values ready for binding
pub struct EventWrite<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub urgency: &'static str,
    pub date: chrono::NaiveDate,
    pub skill_ids: Vec<i64>,
}

impl<'a> EventWrite<'a> {
    pub fn new(draft: &'a EventDraft) -> Self {
        Self {
            name: draft.name.trim(),
            description: draft.description.trim(),
            location: draft.location.trim(),
            urgency: draft.urgency.as_str(),
            date: draft.date,
            skill_ids: draft
                .required_skills
                .iter()
                .map(|id| id.into_inner())
                .collect(),
        }
    }
}
