//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in volunteer-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod event;
mod matching;
mod notification;
mod profile;
mod skill;
mod user;

pub use event::PgEventRepository;
pub use matching::PgMatchRepository;
pub use notification::PgNotificationRepository;
pub use profile::PgProfileRepository;
pub use skill::PgSkillRepository;
pub use user::PgUserRepository;
