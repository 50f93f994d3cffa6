//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: i64,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Row of the volunteer listing (users LEFT JOIN user_profile)
#[derive(Debug, Clone, FromRow)]
pub struct VolunteerModel {
    pub user_id: i64,
    pub full_name: Option<String>,
}
