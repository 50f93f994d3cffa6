//! Volunteer profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use volunteer_core::ProfileSubmission;
use volunteer_service::{MessageResponse, ProfileResponse, ProfileService};

use crate::extractors::{JsonBody, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create or replace a profile
///
/// POST /profile
///
/// Field checks run in the domain so that every violation is reported at
/// once under `error.details`.
pub async fn save_profile(
    State(state): State<AppState>,
    JsonBody(submission): JsonBody<ProfileSubmission>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.save_profile(submission).await?))
}

/// GET /profile/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = path.user_id()?;
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.get_profile(user_id).await?))
}
