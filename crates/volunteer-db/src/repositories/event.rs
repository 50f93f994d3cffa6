//! PostgreSQL implementation of EventRepository
//!
//! An event and its `event_skills` rows are always written in one transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use volunteer_core::entities::{Event, EventDraft};
use volunteer_core::traits::{EventRepository, RepoResult};
use volunteer_core::value_objects::EventId;

use crate::mappers::EventWrite;
use crate::models::EventModel;

use super::error::map_db_error;

const SELECT_EVENTS: &str = r"
    SELECT e.event_id, e.event_name, e.description, e.location, e.urgency, e.event_date,
           COALESCE(
               ARRAY_AGG(es.skill_id ORDER BY es.position) FILTER (WHERE es.skill_id IS NOT NULL),
               '{}'
           ) AS skill_ids
    FROM events e
    LEFT JOIN event_skills es ON es.event_id = e.event_id
";

#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_skills(
        tx: &mut Transaction<'_, Postgres>,
        event_id: i64,
        skill_ids: &[i64],
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO event_skills (event_id, skill_id, position)
            SELECT $1, s.skill_id, (s.ord - 1)::INT
            FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS s(skill_id, ord)
            ON CONFLICT (event_id, skill_id) DO NOTHING
            ",
        )
        .bind(event_id)
        .bind(skill_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventModel>(&format!(
            "{SELECT_EVENTS} GROUP BY e.event_id ORDER BY e.event_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventModel>(&format!(
            "{SELECT_EVENTS} WHERE e.event_id = $1 GROUP BY e.event_id"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Event::from))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &EventDraft) -> RepoResult<EventId> {
        let write = EventWrite::new(draft);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let event_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO events (event_name, description, location, urgency, event_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING event_id
            ",
        )
        .bind(write.name)
        .bind(write.description)
        .bind(write.location)
        .bind(write.urgency)
        .bind(write.date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        Self::insert_skills(&mut tx, event_id, &write.skill_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(EventId::new(event_id))
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: EventId, draft: &EventDraft) -> RepoResult<bool> {
        let write = EventWrite::new(draft);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE events
            SET event_name = $2, description = $3, location = $4, urgency = $5, event_date = $6
            WHERE event_id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(write.name)
        .bind(write.description)
        .bind(write.location)
        .bind(write.urgency)
        .bind(write.date)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Ok(false);
        }

        sqlx::query("DELETE FROM event_skills WHERE event_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        Self::insert_skills(&mut tx, id.into_inner(), &write.skill_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EventId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
