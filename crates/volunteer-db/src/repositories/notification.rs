//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use volunteer_core::entities::{NewNotification, Notification};
use volunteer_core::error::DomainError;
use volunteer_core::traits::{NotificationRepository, RepoResult};
use volunteer_core::value_objects::{NotificationId, UserId};

use crate::models::NotificationModel;

use super::error::{map_db_error, map_foreign_key_violation};

#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, notification), fields(volunteer_id = %notification.volunteer_id))]
    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification> {
        let row = sqlx::query_as::<_, NotificationModel>(
            r"
            INSERT INTO notification (volunteer_id, title, message)
            VALUES ($1, $2, $3)
            RETURNING id, volunteer_id, title, message, unread, created_at
            ",
        )
        .bind(notification.volunteer_id.into_inner())
        .bind(&notification.title)
        .bind(&notification.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::UserNotFound(notification.volunteer_id))
        })?;

        Ok(Notification::from(row))
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: UserId) -> RepoResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, volunteer_id, title, message, unread, created_at
            FROM notification
            WHERE volunteer_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: NotificationId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM notification WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, user_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            "UPDATE notification SET unread = FALSE WHERE volunteer_id = $1 AND unread",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
