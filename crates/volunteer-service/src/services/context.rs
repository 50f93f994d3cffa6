//! Service context - dependency container for services
//!
//! Holds the repositories, the optional database pool and the JWT service.

use std::sync::Arc;

use volunteer_common::auth::JwtService;
use volunteer_core::traits::{
    EventRepository, MatchRepository, NotificationRepository, ProfileRepository,
    SkillRepository, UserRepository,
};
use volunteer_db::{
    MemoryStore, PgEventRepository, PgMatchRepository, PgNotificationRepository, PgPool,
    PgProfileRepository, PgSkillRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Every service borrows this. The repositories are trait objects so the
/// PostgreSQL and in-memory backends run the same service code.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (absent for the memory backend)
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    event_repo: Arc<dyn EventRepository>,
    match_repo: Arc<dyn MatchRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            skill_repo: Arc::new(PgSkillRepository::new(pool.clone())),
            event_repo: Arc::new(PgEventRepository::new(pool.clone())),
            match_repo: Arc::new(PgMatchRepository::new(pool.clone())),
            profile_repo: Arc::new(PgProfileRepository::new(pool.clone())),
            notification_repo: Arc::new(PgNotificationRepository::new(pool.clone())),
            pool: Some(pool),
            jwt_service: Arc::new(jwt_service),
        }
    }

    /// Context backed by a single in-process store
    pub fn in_memory(store: MemoryStore, jwt_service: JwtService) -> Self {
        Self {
            pool: None,
            user_repo: Arc::new(store.clone()),
            skill_repo: Arc::new(store.clone()),
            event_repo: Arc::new(store.clone()),
            match_repo: Arc::new(store.clone()),
            profile_repo: Arc::new(store.clone()),
            notification_repo: Arc::new(store),
            jwt_service: Arc::new(jwt_service),
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if this context uses one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Check database connectivity. `None` when no database is configured.
    pub async fn database_healthy(&self) -> Option<bool> {
        let pool = self.pool.as_ref()?;
        Some(sqlx::query("SELECT 1").execute(pool).await.is_ok())
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the skill repository
    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the match repository
    pub fn match_repo(&self) -> &dyn MatchRepository {
        self.match_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    skill_repo: Option<Arc<dyn SkillRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    match_repo: Option<Arc<dyn MatchRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Use one memory store for every repository not set explicitly
    pub fn memory_store(mut self, store: &MemoryStore) -> Self {
        self.user_repo.get_or_insert_with(|| Arc::new(store.clone()));
        self.skill_repo.get_or_insert_with(|| Arc::new(store.clone()));
        self.event_repo.get_or_insert_with(|| Arc::new(store.clone()));
        self.match_repo.get_or_insert_with(|| Arc::new(store.clone()));
        self.profile_repo.get_or_insert_with(|| Arc::new(store.clone()));
        self.notification_repo
            .get_or_insert_with(|| Arc::new(store.clone()));
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn skill_repo(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skill_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn match_repo(mut self, repo: Arc<dyn MatchRepository>) -> Self {
        self.match_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: JwtService) -> Self {
        self.jwt_service = Some(Arc::new(service));
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            skill_repo: self.skill_repo.ok_or_else(|| missing("skill_repo"))?,
            event_repo: self.event_repo.ok_or_else(|| missing("event_repo"))?,
            match_repo: self.match_repo.ok_or_else(|| missing("match_repo"))?,
            profile_repo: self.profile_repo.ok_or_else(|| missing("profile_repo"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| missing("notification_repo"))?,
            jwt_service: self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
        })
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::validation(format!("{dependency} is required"))
}
