//! Event handlers
//!
//! Endpoints for event management.

use axum::{
    extract::{Path, State},
    Json,
};
use volunteer_service::{
    CreatedEventResponse, EventRequest, EventResponse, EventService, MessageResponse,
};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List events, most urgent first
///
/// GET /events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    Ok(Json(service.list_events().await?))
}

/// Get event by ID
///
/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = path.event_id()?;
    let service = EventService::new(state.service_context());
    Ok(Json(service.get_event(event_id).await?))
}

/// Create a new event
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EventRequest>,
) -> ApiResult<Created<Json<CreatedEventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.create_event(request).await?;
    Ok(Created(Json(response)))
}

/// Replace an event's fields and required skills
///
/// PUT /events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<EventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = path.event_id()?;
    let service = EventService::new(state.service_context());
    Ok(Json(service.update_event(event_id, request).await?))
}

/// Delete an event; matched volunteers are notified
///
/// DELETE /events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let event_id = path.event_id()?;
    let service = EventService::new(state.service_context());
    Ok(Json(service.delete_event(event_id).await?))
}
