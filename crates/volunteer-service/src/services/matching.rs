//! Matching service
//!
//! Attaches volunteers to events, removes them, and records participation.
//! Uniqueness of a `(event, volunteer)` pair is left to the store's
//! insert-if-absent; this service never checks before inserting.

use chrono::Utc;
use tracing::{info, instrument, warn};
use volunteer_core::events::{VolunteerMatchedEvent, VolunteerUnmatchedEvent};
use volunteer_core::{DomainError, DomainEvent, EventId, MatchOutcome, MatchStatus, UserId};

use crate::dto::{
    MatchResultResponse, MatchStatusResponse, MatchVolunteersRequest, MessageResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::event::EventService;
use super::notification::NotificationService;

/// Matching service
pub struct MatchingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchingService<'a> {
    /// Create a new MatchingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attach each requested volunteer to the event.
    ///
    /// Every pair gets its own outcome; a pair that already exists or a user
    /// that does not exist does not fail the batch. Newly matched volunteers
    /// are notified.
    #[instrument(skip(self, request), fields(event_id = request.event_id))]
    pub async fn match_volunteers(
        &self,
        request: MatchVolunteersRequest,
    ) -> ServiceResult<MatchResultResponse> {
        if request.volunteers.is_empty() {
            return Err(ServiceError::validation("At least one volunteer is required"));
        }

        let event_id = EventId::new(request.event_id);
        let event = EventService::new(self.ctx).find(event_id).await?;

        let mut seen = std::collections::HashSet::new();
        let mut outcomes = Vec::with_capacity(request.volunteers.len());
        for raw in request.volunteers {
            if !seen.insert(raw) {
                continue;
            }
            let user_id = UserId::new(raw);
            let outcome = match self.ctx.match_repo().insert_if_absent(event_id, user_id).await {
                Ok(true) => MatchOutcome::Matched,
                Ok(false) => MatchOutcome::AlreadyMatched,
                Err(DomainError::UserNotFound(_)) => {
                    warn!(user_id = %user_id, "Skipping unknown volunteer");
                    MatchOutcome::UnknownVolunteer
                }
                Err(e) => return Err(e.into()),
            };
            outcomes.push((raw, outcome));
        }

        let notifications = NotificationService::new(self.ctx);
        for (raw, outcome) in &outcomes {
            if outcome.is_new() {
                let matched = DomainEvent::VolunteerMatched(VolunteerMatchedEvent {
                    event_id,
                    user_id: UserId::new(*raw),
                    event_name: event.name.clone(),
                    event_date: event.date,
                    timestamp: Utc::now(),
                });
                notifications.publish(&matched).await;
            }
        }

        let response = MatchResultResponse::new(event_id.into_inner(), outcomes);
        info!(event_id = %event_id, new = response.any_new(), "Volunteers matched");
        Ok(response)
    }

    /// Remove a match whatever its status and notify the volunteer
    #[instrument(skip(self))]
    pub async fn unmatch(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> ServiceResult<MessageResponse> {
        let event = EventService::new(self.ctx).find(event_id).await?;

        if !self.ctx.match_repo().delete(event_id, user_id).await? {
            return Err(DomainError::MatchNotFound { event_id, user_id }.into());
        }

        info!(event_id = %event_id, user_id = %user_id, "Volunteer unmatched");

        let unmatched = DomainEvent::VolunteerUnmatched(VolunteerUnmatchedEvent {
            event_id,
            user_id,
            event_name: event.name,
            timestamp: Utc::now(),
        });
        NotificationService::new(self.ctx).publish(&unmatched).await;

        Ok(MessageResponse::new("Volunteer unmatched successfully"))
    }

    /// Record participation for a match
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        status: &str,
    ) -> ServiceResult<MatchStatusResponse> {
        let next: MatchStatus = status
            .parse()
            .map_err(|e: volunteer_core::UnknownVariant| ServiceError::validation(e.to_string()))?;

        let repo = self.ctx.match_repo();

        // Compare-and-set: a concurrent change makes the write miss and the
        // transition is checked again against the fresh status
        loop {
            let current = repo
                .find(event_id, user_id)
                .await?
                .ok_or(DomainError::MatchNotFound { event_id, user_id })?
                .status;

            if !current.can_transition_to(next) {
                return Err(DomainError::InvalidStatusTransition {
                    from: current,
                    to: next,
                }
                .into());
            }

            if repo.set_status(event_id, user_id, current, next).await? {
                break;
            }
        }

        info!(
            event_id = %event_id,
            user_id = %user_id,
            status = next.as_str(),
            "Participation recorded"
        );

        Ok(MatchStatusResponse {
            message: "Participation status updated".to_string(),
            event_id: event_id.into_inner(),
            user_id: user_id.into_inner(),
            participated: next,
        })
    }
}
