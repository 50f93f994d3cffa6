//! Profile entity <-> model mapper

use volunteer_core::entities::Profile;
use volunteer_core::value_objects::{SkillId, UserId, Weekday};

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            user_id: UserId::new(model.user_id),
            full_name: model.full_name,
            address_1: model.address_1,
            address_2: model.address_2,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
            skills: model.skills.into_iter().map(SkillId::new).collect(),
            preferences: model.preferences,
            availability: model
                .availability
                .iter()
                .filter_map(|day| day.parse::<Weekday>().ok())
                .collect(),
        }
    }
}

/// Array columns in their bound form
pub struct ProfileArrays {
    pub skills: Vec<i64>,
    pub availability: Vec<String>,
}

impl ProfileArrays {
    pub fn new(profile: &Profile) -> Self {
        Self {
            skills: profile.skills.iter().map(|id| id.into_inner()).collect(),
            availability: profile
                .availability
                .iter()
                .map(|day| day.as_str().to_string())
                .collect(),
        }
    }
}
