//! Match, history and report database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for history_table
#[derive(Debug, Clone, FromRow)]
pub struct MatchModel {
    pub event_id: i64,
    pub user_id: i64,
    pub participated: String,
    pub matched_at: DateTime<Utc>,
}

/// history_table joined with events
#[derive(Debug, Clone, FromRow)]
pub struct HistoryEntryModel {
    pub event_id: i64,
    pub event_name: String,
    pub description: String,
    pub location: String,
    pub urgency: String,
    pub event_date: NaiveDate,
    pub participated: String,
}

/// Row of the participation report union
#[derive(Debug, Clone, FromRow)]
pub struct ReportRowModel {
    pub user_id: i64,
    pub full_name: Option<String>,
    pub email: String,
    pub event_name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub participated: Option<String>,
}
