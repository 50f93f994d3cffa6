//! Event entity - a dated volunteering opportunity requiring skills

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::entities::Skill;
use crate::error::DomainError;
use crate::value_objects::{EventId, SkillId, Urgency};

/// Persisted event with its required skill ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub date: NaiveDate,
    pub required_skills: Vec<SkillId>,
}

impl Event {
    /// Listing order: urgency rank, then date, then id
    fn listing_key(&self) -> (u8, NaiveDate, EventId) {
        (self.urgency.rank(), self.date, self.id)
    }

    /// Resolve required skill ids to names, dropping ids whose skill was deleted
    pub fn skill_names(&self, catalog: &HashMap<SkillId, String>) -> Vec<String> {
        self.required_skills
            .iter()
            .filter_map(|id| catalog.get(id).cloned())
            .collect()
    }

    /// Resolved skills in association order, orphans dropped
    pub fn resolve_skills(&self, catalog: &HashMap<SkillId, String>) -> Vec<Skill> {
        self.required_skills
            .iter()
            .filter_map(|id| {
                catalog.get(id).map(|name| Skill {
                    id: *id,
                    name: name.clone(),
                })
            })
            .collect()
    }
}

/// Sort events for the public listing: high urgency first, soonest first
pub fn sort_for_listing(events: &mut [Event]) {
    events.sort_by_key(Event::listing_key);
}

/// Field values for creating or fully replacing an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub urgency: Urgency,
    pub date: NaiveDate,
    pub required_skills: Vec<SkillId>,
}

impl EventDraft {
    /// Check required fields and the date rule against `today`.
    ///
    /// Skill existence is checked by the caller against the store.
    pub fn validate(&self, today: NaiveDate) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("event_name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.required_skills.is_empty() {
            missing.push("skills");
        }
        if !missing.is_empty() {
            return Err(DomainError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        ensure_not_past(self.date, today)
    }

    /// Drop repeated skill ids, keeping first occurrence order
    pub fn dedup_skills(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.required_skills.retain(|id| seen.insert(*id));
    }
}

/// Reject dates before `today`. Only the calendar date is compared.
pub fn ensure_not_past(date: NaiveDate, today: NaiveDate) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::PastDate(date));
    }
    Ok(())
}
