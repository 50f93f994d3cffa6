//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use volunteer_core::entities::Profile;
use volunteer_core::error::DomainError;
use volunteer_core::traits::{ProfileRepository, RepoResult};
use volunteer_core::value_objects::UserId;

use crate::mappers::ProfileArrays;
use crate::models::ProfileModel;

use super::error::{map_db_error, map_foreign_key_violation};

#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn upsert(&self, profile: &Profile) -> RepoResult<()> {
        let arrays = ProfileArrays::new(profile);

        sqlx::query(
            r"
            INSERT INTO user_profile
                (user_id, full_name, address_1, address_2, city, state, zip_code,
                 skills, preferences, availability)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                address_1 = EXCLUDED.address_1,
                address_2 = EXCLUDED.address_2,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                zip_code = EXCLUDED.zip_code,
                skills = EXCLUDED.skills,
                preferences = EXCLUDED.preferences,
                availability = EXCLUDED.availability
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.full_name)
        .bind(&profile.address_1)
        .bind(&profile.address_2)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.zip_code)
        .bind(&arrays.skills)
        .bind(&profile.preferences)
        .bind(&arrays.availability)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(profile.user_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT user_id, full_name, address_1, address_2, city, state, zip_code,
                   skills, preferences, availability
            FROM user_profile
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Profile::from))
    }
}
