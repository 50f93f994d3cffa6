//! Notification entity <-> model mapper

use volunteer_core::entities::Notification;
use volunteer_core::value_objects::{NotificationId, UserId};

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: NotificationId::new(model.id),
            volunteer_id: UserId::new(model.volunteer_id),
            title: model.title,
            message: model.message,
            unread: model.unread,
            created_at: model.created_at,
        }
    }
}
