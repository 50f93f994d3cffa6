//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod event;
pub mod history;
pub mod matching;
pub mod notification;
pub mod profile;
pub mod report;
pub mod skill;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use history::HistoryService;
pub use matching::MatchingService;
pub use notification::NotificationService;
pub use profile::ProfileService;
pub use report::{ParticipationFilter, ReportColumn, ReportOptions, ReportService, SortOrder};
pub use skill::SkillService;
pub use user::UserService;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Duration;
    use volunteer_common::JwtService;
    use volunteer_core::{EventId, NewUser, Role, SkillId, UserId};
    use volunteer_db::MemoryStore;

    use super::ServiceContext;
    use crate::dto::{CreateSkillRequest, EventRequest};

    pub fn test_context() -> ServiceContext {
        ServiceContext::in_memory(MemoryStore::new(), JwtService::new("test-secret", 900))
    }

    /// Insert a volunteer directly, skipping password hashing
    pub async fn register_user(ctx: &ServiceContext, email: &str) -> UserId {
        ctx.user_repo()
            .create(&NewUser::new(email, "unused-hash".to_string(), Role::User))
            .await
            .unwrap()
            .id
    }

    pub async fn create_skill(ctx: &ServiceContext, name: &str) -> SkillId {
        let created = super::SkillService::new(ctx)
            .create_skill(CreateSkillRequest {
                name: name.to_string(),
            })
            .await
            .unwrap();
        SkillId::new(created.skill_id)
    }

    /// Event request dated `days_ahead` from today
    pub fn event_request(name: &str, days_ahead: i64, skills: &[SkillId]) -> EventRequest {
        EventRequest {
            event_name: name.to_string(),
            description: "Help out".to_string(),
            location: "Houston".to_string(),
            urgency: None,
            event_date: Some(super::event::today() + Duration::days(days_ahead)),
            skills: skills.iter().map(|s| s.into_inner()).collect(),
        }
    }

    /// Event a week out requiring one fresh skill
    pub async fn create_event(ctx: &ServiceContext, name: &str) -> EventId {
        let skill = create_skill(ctx, &format!("{name} skill")).await;
        let created = super::EventService::new(ctx)
            .create_event(event_request(name, 7, &[skill]))
            .await
            .unwrap();
        EventId::new(created.event_id)
    }
}
