//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod events;
pub mod health;
pub mod history;
pub mod matching;
pub mod notifications;
pub mod profile;
pub mod reports;
pub mod skills;
pub mod users;
