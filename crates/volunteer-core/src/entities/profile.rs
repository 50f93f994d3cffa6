//! Volunteer profile - one per user, replaced wholesale on save

use crate::value_objects::{SkillId, UserId, Weekday};

/// Validated profile as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: UserId,
    pub full_name: String,
    pub address_1: String,
    pub address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub skills: Vec<SkillId>,
    pub preferences: Option<String>,
    pub availability: Vec<Weekday>,
}

impl Profile {
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.availability.contains(&day)
    }
}
