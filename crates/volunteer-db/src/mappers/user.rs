//! User entity <-> model mapper

use volunteer_core::entities::{User, Volunteer};
use volunteer_core::value_objects::{Role, UserId};

use crate::models::{UserModel, VolunteerModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.user_id),
            email: model.email,
            // Column has a CHECK constraint; anything else is treated as a plain user
            role: model.role.parse().unwrap_or(Role::User),
            created_at: model.created_at,
        }
    }
}

impl From<VolunteerModel> for Volunteer {
    fn from(model: VolunteerModel) -> Self {
        Volunteer {
            user_id: UserId::new(model.user_id),
            full_name: model.full_name,
        }
    }
}
