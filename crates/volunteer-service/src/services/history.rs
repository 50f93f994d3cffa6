//! Volunteer history service
//!
//! Self-service join and leave, and the per-volunteer history view.

use tracing::{info, instrument};
use volunteer_core::{DomainError, EventId, MatchStatus, UserId};

use crate::dto::{AttendanceResponse, HistoryEntryResponse, JoinEventRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// History service
pub struct HistoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HistoryService<'a> {
    /// Create a new HistoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A volunteer's matches with event details, soonest event first
    #[instrument(skip(self))]
    pub async fn get_history(&self, user_id: UserId) -> ServiceResult<Vec<HistoryEntryResponse>> {
        let entries = self.ctx.match_repo().history_for_user(user_id).await?;
        Ok(entries.into_iter().map(HistoryEntryResponse::from).collect())
    }

    /// Join an event. Joining twice succeeds and reports the existing match.
    #[instrument(
        skip(self, request),
        fields(user_id = request.user_id, event_id = request.event_id)
    )]
    pub async fn join_event(&self, request: JoinEventRequest) -> ServiceResult<AttendanceResponse> {
        let user_id = UserId::new(request.user_id);
        let event_id = EventId::new(request.event_id);

        let inserted = self.ctx.match_repo().insert_if_absent(event_id, user_id).await?;
        let (message, status) = if inserted {
            info!("Volunteer joined event");
            ("Successfully joined the event", "joined")
        } else {
            ("Already attending this event", "already_attending")
        };

        Ok(AttendanceResponse {
            message: message.to_string(),
            event_id: event_id.into_inner(),
            user_id: user_id.into_inner(),
            status,
        })
    }

    /// Leave an upcoming event.
    ///
    /// Leaving an event one is not attending succeeds. A match that already
    /// has a participation outcome is kept and the call is a conflict.
    #[instrument(skip(self))]
    pub async fn leave_event(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> ServiceResult<AttendanceResponse> {
        let repo = self.ctx.match_repo();
        let status = if repo
            .delete_with_status(event_id, user_id, MatchStatus::Upcoming)
            .await?
        {
            info!("Volunteer left event");
            "left"
        } else if let Some(existing) = repo.find(event_id, user_id).await? {
            return Err(DomainError::MatchNotUpcoming(existing.status).into());
        } else {
            "not_attending"
        };

        let message = if status == "left" {
            "Successfully left the event"
        } else {
            "Not attending this event"
        };

        Ok(AttendanceResponse {
            message: message.to_string(),
            event_id: event_id.into_inner(),
            user_id: user_id.into_inner(),
            status,
        })
    }
}
