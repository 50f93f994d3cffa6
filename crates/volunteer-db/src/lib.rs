//! # volunteer-db
//!
//! Persistence layer implementing the repository traits of `volunteer-core`.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx, with `FromRow` models and mappers
//! - Connection pool creation and SQL migrations (`migrations/`)
//! - `MemoryStore`, an in-process implementation of every repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use volunteer_db::pool::{create_pool, run_migrations, PoolSettings};
//! use volunteer_db::repositories::PgEventRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolSettings::new("postgresql://localhost/volunteers")).await?;
//!     run_migrations(&pool, "./crates/volunteer-db/migrations").await?;
//!     let events = PgEventRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolSettings};
pub use repositories::{
    PgEventRepository, PgMatchRepository, PgNotificationRepository, PgProfileRepository,
    PgSkillRepository, PgUserRepository,
};
