//! Volunteer participation report
//!
//! The store yields one row per match plus one row per user without any.
//! This service filters by participation and orders the rows.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::{debug, instrument};
use volunteer_core::{MatchStatus, ReportRow};

use crate::dto::{ReportQuery, ReportRowResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Which rows to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationFilter {
    Status(MatchStatus),
    /// Users with no match at all
    Unmatched,
}

impl ParticipationFilter {
    fn keeps(self, row: &ReportRow) -> bool {
        match self {
            Self::Status(status) => row.participated == Some(status),
            Self::Unmatched => !row.has_match(),
        }
    }
}

impl FromStr for ParticipationFilter {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Self::Unmatched);
        }
        s.parse()
            .map(Self::Status)
            .map_err(|e: volunteer_core::UnknownVariant| ServiceError::validation(e.to_string()))
    }
}

/// Sortable report columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportColumn {
    FullName,
    Email,
    EventName,
    EventDate,
    Participated,
}

impl FromStr for ReportColumn {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full_name" | "fullName" | "name" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "event_name" | "eventName" | "event" => Ok(Self::EventName),
            "event_date" | "eventDate" | "date" => Ok(Self::EventDate),
            "participated" | "status" => Ok(Self::Participated),
            other => Err(ServiceError::validation(format!("invalid sort column: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ServiceError::validation(format!("invalid sort order: {other}"))),
        }
    }
}

/// Parsed report query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub filter: Option<ParticipationFilter>,
    pub sort: Option<ReportColumn>,
    pub order: SortOrder,
}

impl TryFrom<&ReportQuery> for ReportOptions {
    type Error = ServiceError;

    fn try_from(query: &ReportQuery) -> Result<Self, Self::Error> {
        fn parse<T: FromStr<Err = ServiceError>>(
            raw: Option<&str>,
        ) -> Result<Option<T>, ServiceError> {
            raw.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .transpose()
        }

        Ok(Self {
            filter: parse(query.status.as_deref())?,
            sort: parse(query.sort.as_deref())?,
            order: parse(query.order.as_deref())?.unwrap_or_default(),
        })
    }
}

/// Filter and order report rows.
///
/// Ties, and the whole report when no column is chosen, are ordered by event
/// date ascending with undated rows last.
pub fn arrange(mut rows: Vec<ReportRow>, options: ReportOptions) -> Vec<ReportRow> {
    if let Some(filter) = options.filter {
        rows.retain(|row| filter.keeps(row));
    }
    rows.sort_by(|a, b| {
        let primary = options
            .sort
            .map_or(Ordering::Equal, |column| compare_column(a, b, column, options.order));
        primary
            .then_with(|| compare_dates(a.event_date, b.event_date, SortOrder::Asc))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    rows
}

fn compare_column(
    a: &ReportRow,
    b: &ReportRow,
    column: ReportColumn,
    order: SortOrder,
) -> Ordering {
    let ordering = match column {
        ReportColumn::EventDate => return compare_dates(a.event_date, b.event_date, order),
        ReportColumn::FullName => {
            text_key(a.full_name.as_deref()).cmp(&text_key(b.full_name.as_deref()))
        }
        ReportColumn::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
        ReportColumn::EventName => {
            text_key(a.event_name.as_deref()).cmp(&text_key(b.event_name.as_deref()))
        }
        ReportColumn::Participated => status_key(a.participated).cmp(status_key(b.participated)),
    };
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Dated rows first in either direction
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(&b),
            SortOrder::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn text_key(value: Option<&str>) -> String {
    value.unwrap_or(crate::dto::NONE_LABEL).to_lowercase()
}

fn status_key(status: Option<MatchStatus>) -> &'static str {
    status.map_or(crate::dto::NONE_LABEL, MatchStatus::as_str)
}

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the participation report for every user
    #[instrument(skip(self))]
    pub async fn volunteer_report(
        &self,
        query: &ReportQuery,
    ) -> ServiceResult<Vec<ReportRowResponse>> {
        let options = ReportOptions::try_from(query)?;
        let rows = self.ctx.match_repo().report_rows().await?;
        let rows = arrange(rows, options);
        debug!(rows = rows.len(), "Report generated");
        Ok(rows.iter().map(ReportRowResponse::from).collect())
    }
}
