//! Event database models

use chrono::NaiveDate;
use sqlx::FromRow;

/// Event row with its skill ids aggregated in association order
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub event_id: i64,
    pub event_name: String,
    pub description: String,
    pub location: String,
    pub urgency: String,
    pub event_date: NaiveDate,
    pub skill_ids: Vec<i64>,
}
