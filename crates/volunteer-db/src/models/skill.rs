//! Skill database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub skill_id: i64,
    pub skill_name: String,
}
