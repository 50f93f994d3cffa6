//! SQLx error translation shared by the Postgres repositories

use sqlx::error::{DatabaseError, Error as SqlxError};
use volunteer_core::error::DomainError;

pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// `on_match()` when the database error satisfies `is_kind`, else a store failure
fn map_constraint<F>(
    e: SqlxError,
    is_kind: fn(&dyn DatabaseError) -> bool,
    on_match: F,
) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if is_kind(db_err) => on_match(),
        _ => map_db_error(e),
    }
}

/// Duplicate key, e.g. a taken email or skill name
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    map_constraint(e, |db| db.is_unique_violation(), on_unique)
}

/// Missing parent row, e.g. a match for a user deleted mid-request
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    map_constraint(e, |db| db.is_foreign_key_violation(), on_fk)
}
