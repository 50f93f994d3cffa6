//! Notification handlers

use axum::{
    extract::{Path, State},
    Json,
};
use volunteer_service::{
    DismissAllResponse, MessageResponse, NotificationResponse, NotificationService,
};

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Notifications for a user, newest first
///
/// GET /users/{id}/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let user_id = path.user_id()?;
    let service = NotificationService::new(state.service_context());
    Ok(Json(service.list_notifications(user_id).await?))
}

/// Mark every notification of a user as read
///
/// DELETE /users/{id}/notifications
pub async fn dismiss_all(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<DismissAllResponse>> {
    let user_id = path.user_id()?;
    let service = NotificationService::new(state.service_context());
    Ok(Json(service.dismiss_all(user_id).await?))
}

/// DELETE /notifications/{id}
pub async fn dismiss(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let notification_id = path.notification_id()?;
    NotificationService::new(state.service_context())
        .dismiss(notification_id)
        .await?;
    Ok(Json(MessageResponse::new("Notification dismissed")))
}
