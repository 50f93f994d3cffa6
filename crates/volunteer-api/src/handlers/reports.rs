//! Report handlers

use axum::extract::State;
use axum::Json;
use volunteer_service::{ReportQuery, ReportRowResponse, ReportService};

use crate::extractors::QueryParams;
use crate::response::ApiResult;
use crate::state::AppState;

/// Volunteer participation report
///
/// GET /reports?status=&sort=&order=
pub async fn volunteer_report(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ReportQuery>,
) -> ApiResult<Json<Vec<ReportRowResponse>>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.volunteer_report(&query).await?))
}
