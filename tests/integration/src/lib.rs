//! Integration test utilities for the volunteer API
//!
//! Spawns the full axum application on a local port and drives it over
//! HTTP with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
