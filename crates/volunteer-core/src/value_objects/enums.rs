//! Closed enumerations used across the domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error when a string does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Urgency
// ============================================================================

/// Event urgency. Declaration order is the listing order: high first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    #[default]
    Medium,
    Low,
}

impl Urgency {
    /// Sort rank, lower sorts first
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(UnknownVariant::new("urgency", s)),
        }
    }
}

// ============================================================================
// Match status
// ============================================================================

/// Lifecycle of a volunteer's match to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Attended,
    Missed,
}

impl MatchStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Attended => "Attended",
            Self::Missed => "Missed",
        }
    }

    /// Whether `self -> next` is a permitted change.
    ///
    /// Upcoming resolves to Attended or Missed, and a resolved match may be
    /// corrected to the other outcome. Nothing goes back to Upcoming.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Upcoming, Self::Upcoming)
                | (Self::Upcoming | Self::Missed, Self::Attended)
                | (Self::Upcoming | Self::Attended, Self::Missed)
                | (Self::Attended, Self::Attended)
                | (Self::Missed, Self::Missed)
        )
    }

    /// Only upcoming matches can be withdrawn by the volunteer
    #[inline]
    pub const fn is_upcoming(self) -> bool {
        matches!(self, Self::Upcoming)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "attended" => Ok(Self::Attended),
            "missed" => Ok(Self::Missed),
            _ => Err(UnknownVariant::new("status", s)),
        }
    }
}

// ============================================================================
// Role
// ============================================================================

/// Account role, fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Anything other than an explicit "admin" registers as a plain user
    pub fn from_registration(requested: Option<&str>) -> Self {
        match requested {
            Some(role) if role.trim().eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::User,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownVariant::new("role", s)),
        }
    }
}

// ============================================================================
// Weekday
// ============================================================================

/// Day of week a volunteer is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant::new("weekday", s))
    }
}
