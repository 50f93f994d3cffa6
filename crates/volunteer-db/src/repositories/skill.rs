//! PostgreSQL implementation of SkillRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use volunteer_core::entities::Skill;
use volunteer_core::error::DomainError;
use volunteer_core::traits::{RepoResult, SkillRepository};
use volunteer_core::value_objects::SkillId;

use crate::models::SkillModel;

use super::error::{map_db_error, map_unique_violation};

#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, SkillModel>(
            "SELECT skill_id, skill_name FROM skills ORDER BY skill_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: SkillId) -> RepoResult<Option<Skill>> {
        let row = sqlx::query_as::<_, SkillModel>(
            "SELECT skill_id, skill_name FROM skills WHERE skill_id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Skill::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<Skill> {
        let row = sqlx::query_as::<_, SkillModel>(
            r"
            INSERT INTO skills (skill_name)
            VALUES ($1)
            RETURNING skill_id, skill_name
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SkillAlreadyExists(name.to_string())))?;

        Ok(Skill::from(row))
    }

    /// event_skills and user_profile.skills keep the id; readers drop it
    #[instrument(skip(self))]
    async fn delete(&self, id: SkillId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE skill_id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn existing_ids(&self, ids: &[SkillId]) -> RepoResult<Vec<SkillId>> {
        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT skill_id FROM skills WHERE skill_id = ANY($1) ORDER BY skill_id",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(found.into_iter().map(SkillId::new).collect())
    }
}
