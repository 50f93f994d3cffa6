//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use volunteer_core::entities::{normalize_email, NewUser, User, Volunteer};
use volunteer_core::error::DomainError;
use volunteer_core::traits::{RepoResult, UserRepository};
use volunteer_core::value_objects::{Role, UserId};

use crate::models::{UserModel, VolunteerModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT user_id, email, role, created_at
            FROM users
            WHERE user_id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT user_id, email, role, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING user_id, email, role, created_at
            ",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE user_id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            "SELECT user_id, email, role, created_at FROM users ORDER BY user_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Profile, history and notifications go with the row via ON DELETE CASCADE
    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_volunteers(&self) -> RepoResult<Vec<Volunteer>> {
        let rows = sqlx::query_as::<_, VolunteerModel>(
            r"
            SELECT u.user_id, p.full_name
            FROM users u
            LEFT JOIN user_profile p ON p.user_id = u.user_id
            WHERE u.role = $1
            ORDER BY u.user_id
            ",
        )
        .bind(Role::User.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Volunteer::from).collect())
    }
}
