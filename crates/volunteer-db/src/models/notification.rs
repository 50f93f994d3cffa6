//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub volunteer_id: i64,
    pub title: String,
    pub message: String,
    pub unread: bool,
    pub created_at: DateTime<Utc>,
}
