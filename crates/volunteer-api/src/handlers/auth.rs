//! Authentication handlers
//!
//! Endpoints for account registration and login.

use axum::{extract::State, Json};
use volunteer_service::{AuthService, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
