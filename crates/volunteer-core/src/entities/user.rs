//! User entity - an account that can volunteer or administer

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, UserId};

/// Registered account. The password hash never leaves the repository layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data needed to insert a user; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    /// Emails are compared case-insensitively, so they are stored lowercased
    pub fn new(email: &str, password_hash: String, role: Role) -> Self {
        Self {
            email: normalize_email(email),
            password_hash,
            role,
        }
    }
}

/// Canonical form used for uniqueness checks and lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A user with role `user`, as listed for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volunteer {
    pub user_id: UserId,
    pub full_name: Option<String>,
}

impl Volunteer {
    /// Profile name, or "Unknown" for volunteers that never filled one in
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Unknown")
    }
}
