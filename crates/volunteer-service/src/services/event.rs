//! Event service
//!
//! Event CRUD with skill resolution, the listing order, and the past-date
//! rule. Deleting an event notifies every volunteer matched to it.

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};
use volunteer_core::events::EventCancelledEvent;
use volunteer_core::{sort_for_listing, DomainError, DomainEvent, Event, EventDraft, EventId};

use crate::dto::{
    CreatedEventResponse, EventRequest, EventResponse, EventWithSkills, MessageResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::notification::NotificationService;
use super::skill::SkillService;

/// Current calendar date used for the past-date rule
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All events, high urgency first, then soonest first
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> ServiceResult<Vec<EventResponse>> {
        let mut events = self.ctx.event_repo().list().await?;
        sort_for_listing(&mut events);

        let catalog = SkillService::new(self.ctx).catalog().await?;
        Ok(events
            .iter()
            .map(|event| EventResponse::from(EventWithSkills::new(event, &catalog)))
            .collect())
    }

    /// One event with resolved skill names
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: EventId) -> ServiceResult<EventResponse> {
        let event = self.find(event_id).await?;
        let catalog = SkillService::new(self.ctx).catalog().await?;
        Ok(EventResponse::from(EventWithSkills::new(&event, &catalog)))
    }

    /// Event entity by id
    pub async fn find(&self, event_id: EventId) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id).into())
    }

    /// Create an event with its required skills
    #[instrument(skip(self, request))]
    pub async fn create_event(&self, request: EventRequest) -> ServiceResult<CreatedEventResponse> {
        let draft = self.checked_draft(request, today()).await?;
        let event_id = self.ctx.event_repo().create(&draft).await?;

        info!(event_id = %event_id, name = %draft.name, "Event created");

        Ok(CreatedEventResponse {
            message: "Event created successfully".to_string(),
            event_id: event_id.into_inner(),
        })
    }

    /// Replace every field and the full skill set of an event
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: EventId,
        request: EventRequest,
    ) -> ServiceResult<EventResponse> {
        let draft = self.checked_draft(request, today()).await?;
        if !self.ctx.event_repo().update(event_id, &draft).await? {
            return Err(DomainError::EventNotFound(event_id).into());
        }

        info!(event_id = %event_id, "Event updated");
        self.get_event(event_id).await
    }

    /// Delete an event and its matches, then tell the matched volunteers
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: EventId) -> ServiceResult<MessageResponse> {
        let event = self.find(event_id).await?;
        let volunteer_ids = self
            .ctx
            .match_repo()
            .list_for_event(event_id)
            .await?
            .into_iter()
            .map(|m| m.user_id)
            .collect::<Vec<_>>();

        if !self.ctx.event_repo().delete(event_id).await? {
            return Err(DomainError::EventNotFound(event_id).into());
        }

        info!(event_id = %event_id, matched = volunteer_ids.len(), "Event deleted");

        if !volunteer_ids.is_empty() {
            let cancelled = DomainEvent::EventCancelled(EventCancelledEvent {
                event_id,
                event_name: event.name,
                event_date: event.date,
                volunteer_ids,
                timestamp: Utc::now(),
            });
            NotificationService::new(self.ctx).publish(&cancelled).await;
        }

        Ok(MessageResponse::new("Event deleted successfully"))
    }

    /// Field checks, the date rule, then skill existence
    async fn checked_draft(
        &self,
        request: EventRequest,
        today: NaiveDate,
    ) -> ServiceResult<EventDraft> {
        let draft = request.into_draft()?;
        draft.validate(today)?;
        SkillService::new(self.ctx)
            .ensure_exist(&draft.required_skills)
            .await?;
        Ok(draft)
    }
}
