//! Domain events emitted by state changes

mod domain_event;

pub use domain_event::{
    DomainEvent, EventCancelledEvent, VolunteerMatchedEvent, VolunteerUnmatchedEvent,
};
