//! Volunteer profile service

use tracing::{info, instrument, warn};
use volunteer_core::{parse_profile, DomainError, ProfileSubmission, UserId};

use crate::dto::{MessageResponse, ProfileResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate a submission and store it, replacing any previous profile.
    ///
    /// All field violations are reported together as `InvalidProfile`.
    #[instrument(skip(self, submission))]
    pub async fn save_profile(
        &self,
        submission: ProfileSubmission,
    ) -> ServiceResult<MessageResponse> {
        let profile = parse_profile(&submission).map_err(|errors| {
            warn!(fields = errors.len(), "Profile rejected");
            DomainError::InvalidProfile(errors)
        })?;

        self.ctx.profile_repo().upsert(&profile).await?;
        info!(user_id = %profile.user_id, "Profile saved");

        Ok(MessageResponse::new("Profile saved successfully"))
    }

    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: UserId) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(user_id))?;
        Ok(ProfileResponse::from(profile))
    }
}
