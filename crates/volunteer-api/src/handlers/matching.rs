//! Matching handlers
//!
//! Administrator endpoints attaching volunteers to events and recording
//! whether they showed up.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use volunteer_service::{
    MatchResultResponse, MatchStatusResponse, MatchVolunteersRequest, MatchingService,
    MessageResponse, UpdateMatchStatusRequest,
};

use crate::extractors::{MatchPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Match volunteers to an event
///
/// POST /match-volunteer
///
/// Responds 201 when at least one new match was made, 200 when every pair
/// already existed or was skipped.
pub async fn match_volunteers(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MatchVolunteersRequest>,
) -> ApiResult<(StatusCode, Json<MatchResultResponse>)> {
    let service = MatchingService::new(state.service_context());
    let response = service.match_volunteers(request).await?;
    let status = if response.any_new() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)))
}

/// DELETE /unmatch-volunteer/{event_id}/{user_id}
pub async fn unmatch_volunteer(
    State(state): State<AppState>,
    Path(path): Path<MatchPath>,
) -> ApiResult<Json<MessageResponse>> {
    let (event_id, user_id) = path.ids()?;
    let service = MatchingService::new(state.service_context());
    Ok(Json(service.unmatch(event_id, user_id).await?))
}

/// Record participation for a match
///
/// PUT /matches/{event_id}/{user_id}/status
pub async fn update_match_status(
    State(state): State<AppState>,
    Path(path): Path<MatchPath>,
    ValidatedJson(request): ValidatedJson<UpdateMatchStatusRequest>,
) -> ApiResult<Json<MatchStatusResponse>> {
    let (event_id, user_id) = path.ids()?;
    let service = MatchingService::new(state.service_context());
    let response = service
        .set_status(event_id, user_id, &request.status)
        .await?;
    Ok(Json(response))
}
