//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Write`/`*Arrays` structs: Prepare entity data for binding

mod event;
mod history;
mod notification;
mod profile;
mod skill;
mod user;

pub use event::EventWrite;
pub use profile::ProfileArrays;
