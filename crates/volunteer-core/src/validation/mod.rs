//! Pure validation routines with no side effects

mod profile;

pub use profile::{
    parse_profile, validate_profile, FieldErrors, ProfileSubmission, FULL_NAME_MAX_CHARS,
};
