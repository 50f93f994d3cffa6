//! PostgreSQL implementation of MatchRepository over `history_table`

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use volunteer_core::entities::{HistoryEntry, Match, ReportRow};
use volunteer_core::error::DomainError;
use volunteer_core::traits::{MatchRepository, RepoResult};
use volunteer_core::value_objects::{EventId, MatchStatus, UserId};

use crate::models::{HistoryEntryModel, MatchModel, ReportRowModel};

use super::error::{map_db_error, map_foreign_key_violation};

#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    /// Uniqueness is enforced by the primary key, never by a prior SELECT
    #[instrument(skip(self))]
    async fn insert_if_absent(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO history_table (event_id, user_id, participated)
            VALUES ($1, $2, $3)
            ON CONFLICT (event_id, user_id) DO NOTHING
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .bind(MatchStatus::Upcoming.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let user_fk = e
                .as_database_error()
                .and_then(|db| db.constraint())
                .is_some_and(|c| c.contains("user_id"));
            map_foreign_key_violation(e, || {
                if user_fk {
                    DomainError::UserNotFound(user_id)
                } else {
                    DomainError::EventNotFound(event_id)
                }
            })
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find(&self, event_id: EventId, user_id: UserId) -> RepoResult<Option<Match>> {
        let row = sqlx::query_as::<_, MatchModel>(
            r"
            SELECT event_id, user_id, participated, matched_at
            FROM history_table
            WHERE event_id = $1 AND user_id = $2
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Match::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM history_table WHERE event_id = $1 AND user_id = $2")
            .bind(event_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_with_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        status: MatchStatus,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM history_table
            WHERE event_id = $1 AND user_id = $2 AND participated = $3
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        event_id: EventId,
        user_id: UserId,
        from: MatchStatus,
        to: MatchStatus,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE history_table
            SET participated = $4
            WHERE event_id = $1 AND user_id = $2 AND participated = $3
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_for_event(&self, event_id: EventId) -> RepoResult<Vec<Match>> {
        let rows = sqlx::query_as::<_, MatchModel>(
            r"
            SELECT event_id, user_id, participated, matched_at
            FROM history_table
            WHERE event_id = $1
            ORDER BY user_id
            ",
        )
        .bind(event_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Match::from).collect())
    }

    #[instrument(skip(self))]
    async fn history_for_user(&self, user_id: UserId) -> RepoResult<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryEntryModel>(
            r"
            SELECT e.event_id, e.event_name, e.description, e.location, e.urgency,
                   e.event_date, h.participated
            FROM history_table h
            JOIN events e ON e.event_id = h.event_id
            WHERE h.user_id = $1
            ORDER BY e.event_date, e.event_id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(HistoryEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn report_rows(&self) -> RepoResult<Vec<ReportRow>> {
        let rows = sqlx::query_as::<_, ReportRowModel>(
            r"
            SELECT u.user_id, p.full_name, u.email,
                   e.event_name, e.event_date, h.participated
            FROM history_table h
            JOIN users u ON u.user_id = h.user_id
            JOIN events e ON e.event_id = h.event_id
            LEFT JOIN user_profile p ON p.user_id = u.user_id
            UNION ALL
            SELECT u.user_id, p.full_name, u.email,
                   NULL::TEXT, NULL::DATE, NULL::TEXT
            FROM users u
            LEFT JOIN user_profile p ON p.user_id = u.user_id
            WHERE NOT EXISTS (SELECT 1 FROM history_table h WHERE h.user_id = u.user_id)
            ORDER BY user_id, event_date NULLS LAST
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ReportRow::from).collect())
    }
}
