//! Volunteer history handlers
//!
//! Self-service join and leave, and a volunteer's history view.

use axum::{
    extract::{Path, State},
    Json,
};
use volunteer_service::{
    AttendanceResponse, HistoryEntryResponse, HistoryService, JoinEventRequest,
};

use crate::extractors::{MatchPath, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /history/{user_id}
pub async fn get_history(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<HistoryEntryResponse>>> {
    let user_id = path.user_id()?;
    let service = HistoryService::new(state.service_context());
    Ok(Json(service.get_history(user_id).await?))
}

/// Join an event
///
/// POST /history
pub async fn join_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<JoinEventRequest>,
) -> ApiResult<Json<AttendanceResponse>> {
    let service = HistoryService::new(state.service_context());
    Ok(Json(service.join_event(request).await?))
}

/// Leave an upcoming event
///
/// DELETE /history/{user_id}/{event_id}
pub async fn leave_event(
    State(state): State<AppState>,
    Path(path): Path<MatchPath>,
) -> ApiResult<Json<AttendanceResponse>> {
    let (event_id, user_id) = path.ids()?;
    let service = HistoryService::new(state.service_context());
    Ok(Json(service.leave_event(user_id, event_id).await?))
}
