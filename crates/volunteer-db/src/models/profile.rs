//! Profile database model

use sqlx::FromRow;

/// Database model for user_profile table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub user_id: i64,
    pub full_name: String,
    pub address_1: String,
    pub address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub skills: Vec<i64>,
    pub preferences: Option<String>,
    pub availability: Vec<String>,
}
