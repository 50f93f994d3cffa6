//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod history;
mod notification;
mod profile;
mod skill;
mod user;

pub use event::EventModel;
pub use history::{HistoryEntryModel, MatchModel, ReportRowModel};
pub use notification::NotificationModel;
pub use profile::ProfileModel;
pub use skill::SkillModel;
pub use user::{UserModel, VolunteerModel};
