//! Ports implemented by the persistence layer

mod repositories;

pub use repositories::{
    EventRepository, MatchRepository, NotificationRepository, ProfileRepository, RepoResult,
    SkillRepository, UserRepository,
};
