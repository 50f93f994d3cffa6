//! Skill entity

use crate::error::DomainError;
use crate::value_objects::SkillId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

/// Trim a proposed skill name and reject blanks
pub fn normalize_skill_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::ValidationError(
            "Skill name is required".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
