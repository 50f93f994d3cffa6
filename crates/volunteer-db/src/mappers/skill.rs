//! Skill entity <-> model mapper

use volunteer_core::entities::Skill;
use volunteer_core::value_objects::SkillId;

use crate::models::SkillModel;

impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: SkillId::new(model.skill_id),
            name: model.skill_name,
        }
    }
}
