//! User handlers
//!
//! Account listing for administrators and the volunteer directory used by
//! the matching screen.

use axum::{
    extract::{Path, State},
    Json,
};
use volunteer_service::{MessageResponse, UserResponse, UserService, VolunteerResponse};

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List every account
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list_users().await?))
}

/// Delete an account and everything hanging off it
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = path.user_id()?;
    let service = UserService::new(state.service_context());
    Ok(Json(service.delete_user(user_id).await?))
}

/// GET /volunteers
pub async fn list_volunteers(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<VolunteerResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list_volunteers().await?))
}
