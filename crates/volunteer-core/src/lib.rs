//! # volunteer-core
//!
//! Domain layer containing entities, value objects, profile validation,
//! repository traits, and domain events. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ensure_not_past, normalize_email, normalize_skill_name, sort_for_listing, Event, EventDraft,
    HistoryEntry, Match, MatchOutcome, NewNotification, NewUser, Notification, Profile, ReportRow,
    Skill, User, Volunteer,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    EventRepository, MatchRepository, NotificationRepository, ProfileRepository, RepoResult,
    SkillRepository, UserRepository,
};
pub use validation::{parse_profile, validate_profile, FieldErrors, ProfileSubmission};
pub use value_objects::{
    EventId, IdParseError, MatchStatus, NotificationId, Role, SkillId, UnknownVariant, Urgency,
    UserId, Weekday,
};
