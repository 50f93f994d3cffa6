//! Skill catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};
use volunteer_service::{
    CreateSkillRequest, CreatedSkillResponse, MessageResponse, SkillResponse, SkillService,
};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /skills
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Json<Vec<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    Ok(Json(service.list_skills().await?))
}

/// Add a skill to the catalog
///
/// POST /skills
pub async fn create_skill(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSkillRequest>,
) -> ApiResult<Created<Json<CreatedSkillResponse>>> {
    let service = SkillService::new(state.service_context());
    let response = service.create_skill(request).await?;
    Ok(Created(Json(response)))
}

/// Remove a skill; events that required it keep their other skills
///
/// DELETE /skills/{id}
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let skill_id = path.skill_id()?;
    SkillService::new(state.service_context())
        .delete_skill(skill_id)
        .await?;
    Ok(Json(MessageResponse::new("Skill deleted successfully")))
}
