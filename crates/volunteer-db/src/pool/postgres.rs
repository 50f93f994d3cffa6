//! PostgreSQL pool construction and schema migrations

use std::path::Path;
use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

/// Tuning for the shared connection pool
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl PoolSettings {
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
    const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Self::ACQUIRE_TIMEOUT,
            idle_timeout: Self::IDLE_TIMEOUT,
        }
    }

    #[must_use]
    pub fn connections(mut self, min: u32, max: u32) -> Self {
        self.min_connections = min.min(max);
        self.max_connections = max;
        self
    }
}

impl From<&volunteer_common::DatabaseConfig> for PoolSettings {
    fn from(config: &volunteer_common::DatabaseConfig) -> Self {
        Self::new(config.url.clone()).connections(config.min_connections, config.max_connections)
    }
}

/// Connect eagerly so a bad URL fails at startup rather than on first request
pub async fn create_pool(settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    debug!(
        max = settings.max_connections,
        min = settings.min_connections,
        "Opening PostgreSQL pool"
    );
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .connect(&settings.url)
        .await
}

/// Apply every pending migration under `dir`
pub async fn run_migrations(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrateError> {
    let dir = dir.as_ref();
    Migrator::new(dir).await?.run(pool).await?;
    info!(dir = %dir.display(), "Database migrations applied");
    Ok(())
}
