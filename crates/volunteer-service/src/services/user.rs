//! User service
//!
//! Account listing and removal, and the volunteer picker.

use tracing::{info, instrument};
use volunteer_core::{DomainError, UserId};

use crate::dto::{MessageResponse, UserResponse, VolunteerResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All accounts ordered by id
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Delete an account with its profile, matches and notifications
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<MessageResponse> {
        if !self.ctx.user_repo().delete(user_id).await? {
            return Err(DomainError::UserNotFound(user_id).into());
        }
        info!(user_id = %user_id, "User deleted");
        Ok(MessageResponse::new("User deleted successfully"))
    }

    /// Non-admin users with their display name
    #[instrument(skip(self))]
    pub async fn list_volunteers(&self) -> ServiceResult<Vec<VolunteerResponse>> {
        let volunteers = self.ctx.user_repo().list_volunteers().await?;
        Ok(volunteers.iter().map(VolunteerResponse::from).collect())
    }
}
