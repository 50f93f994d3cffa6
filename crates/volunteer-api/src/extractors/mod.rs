//! Axum extractors for request handling
//!
//! Custom extractors for request bodies, query strings and typed path ids.

mod path;
mod query;
mod validated;

pub use path::{IdPath, MatchPath, UserIdPath};
pub use query::QueryParams;
pub use validated::{JsonBody, ValidatedJson};
