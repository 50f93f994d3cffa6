//! Notifications delivered to volunteers

use chrono::{DateTime, Utc};

use crate::value_objects::{NotificationId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub volunteer_id: UserId,
    pub title: String,
    pub message: String,
    pub unread: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification content before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub volunteer_id: UserId,
    pub title: String,
    pub message: String,
}
