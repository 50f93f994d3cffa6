//! Participation report rows

use chrono::NaiveDate;

use crate::value_objects::{MatchStatus, UserId};

/// One `(user, event)` pair, or a user with no match at all.
///
/// A user without matches has `event_name`, `event_date` and `participated`
/// all `None`; a user without a profile has `full_name` `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub email: String,
    pub event_name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub participated: Option<MatchStatus>,
}

impl ReportRow {
    #[inline]
    pub fn has_match(&self) -> bool {
        self.participated.is_some()
    }
}
