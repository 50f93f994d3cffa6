//! Notification service
//!
//! Lists and dismisses notifications, and turns domain events into
//! notifications for the volunteers they concern.

use tracing::{debug, info, instrument, warn};
use volunteer_core::{DomainError, DomainEvent, NotificationId, UserId};

use crate::dto::{DismissAllResponse, NotificationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A user's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
        user_id: UserId,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self.ctx.notification_repo().list_for_user(user_id).await?;
        Ok(notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect())
    }

    /// Delete one notification
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: NotificationId) -> ServiceResult<()> {
        if !self.ctx.notification_repo().delete(id).await? {
            return Err(DomainError::NotificationNotFound(id).into());
        }
        Ok(())
    }

    /// Mark every unread notification of a user as read
    #[instrument(skip(self))]
    pub async fn dismiss_all(&self, user_id: UserId) -> ServiceResult<DismissAllResponse> {
        let updated = self.ctx.notification_repo().mark_all_read(user_id).await?;
        info!(user_id = %user_id, updated, "Notifications marked as read");
        Ok(DismissAllResponse {
            message: "All notifications dismissed".to_string(),
            updated,
        })
    }

    /// Store the notifications an event produces.
    ///
    /// Delivery is best-effort: the change that raised the event has already
    /// been committed, so failures are logged and skipped. Returns the number
    /// delivered.
    pub async fn publish(&self, event: &DomainEvent) -> usize {
        let mut delivered = 0;
        for notification in event.notifications() {
            match self.ctx.notification_repo().create(&notification).await {
                Ok(_) => delivered += 1,
                Err(e) => warn!(
                    event_type = event.event_type(),
                    volunteer_id = %notification.volunteer_id,
                    error = %e,
                    "Failed to deliver notification"
                ),
            }
        }
        debug!(event_type = event.event_type(), delivered, "Notifications published");
        delivered
    }
}
