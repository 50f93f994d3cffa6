//! Domain entities - core business objects

mod event;
mod history;
mod notification;
mod profile;
mod report;
mod skill;
mod user;

pub use event::{ensure_not_past, sort_for_listing, Event, EventDraft};
pub use history::{HistoryEntry, Match, MatchOutcome};
pub use notification::{NewNotification, Notification};
pub use profile::Profile;
pub use report::ReportRow;
pub use skill::{normalize_skill_name, Skill};
pub use user::{normalize_email, NewUser, User, Volunteer};
