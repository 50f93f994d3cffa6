//! Value objects - immutable types that represent domain concepts

mod enums;
mod ids;
mod us_state;

pub use enums::{MatchStatus, Role, UnknownVariant, Urgency, Weekday};
pub use ids::{EventId, IdParseError, NotificationId, SkillId, UserId};
pub use us_state::{is_valid_state, US_STATE_CODES};
