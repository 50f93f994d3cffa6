//! Skill catalog service

use std::collections::HashMap;

use tracing::{info, instrument};
use volunteer_core::{normalize_skill_name, DomainError, SkillId};

use crate::dto::{CreateSkillRequest, CreatedSkillResponse, SkillResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Skill service
pub struct SkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillService<'a> {
    /// Create a new SkillService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All skills ordered by id
    #[instrument(skip(self))]
    pub async fn list_skills(&self) -> ServiceResult<Vec<SkillResponse>> {
        let skills = self.ctx.skill_repo().list().await?;
        Ok(skills.into_iter().map(SkillResponse::from).collect())
    }

    /// Id to name lookup used when rendering events
    pub async fn catalog(&self) -> ServiceResult<HashMap<SkillId, String>> {
        let skills = self.ctx.skill_repo().list().await?;
        Ok(skills.into_iter().map(|s| (s.id, s.name)).collect())
    }

    /// Add a skill; the trimmed name must be non-blank and unused
    #[instrument(skip(self, request))]
    pub async fn create_skill(
        &self,
        request: CreateSkillRequest,
    ) -> ServiceResult<CreatedSkillResponse> {
        let name = normalize_skill_name(&request.name)?;
        let skill = self.ctx.skill_repo().create(&name).await?;

        info!(skill_id = %skill.id, name = %skill.name, "Skill created");

        Ok(CreatedSkillResponse {
            message: "Skill added successfully".to_string(),
            skill_id: skill.id.into_inner(),
            skill_name: skill.name,
        })
    }

    /// Delete a skill. Events keep the id; listings drop it.
    #[instrument(skip(self))]
    pub async fn delete_skill(&self, skill_id: SkillId) -> ServiceResult<()> {
        if !self.ctx.skill_repo().delete(skill_id).await? {
            return Err(DomainError::SkillNotFound(skill_id).into());
        }
        info!(skill_id = %skill_id, "Skill deleted");
        Ok(())
    }

    /// Fail with `UnknownSkills` unless every id exists
    pub async fn ensure_exist(&self, ids: &[SkillId]) -> ServiceResult<()> {
        let existing = self.ctx.skill_repo().existing_ids(ids).await?;
        let unknown: Vec<SkillId> = ids
            .iter()
            .filter(|id| !existing.contains(id))
            .copied()
            .collect();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(DomainError::UnknownSkills(unknown).into())
        }
    }
}
