//! Profile form validation
//!
//! Submissions arrive loosely typed so that every malformed field can be
//! reported at once instead of failing on the first deserialization error.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::entities::Profile;
use crate::value_objects::{is_valid_state, SkillId, UserId, Weekday};

/// Field name to human-readable message, ordered by field name
pub type FieldErrors = BTreeMap<String, String>;

pub const FULL_NAME_MAX_CHARS: usize = 50;

lazy_static! {
    static ref ZIP_CODE_REGEX: Regex = Regex::new(r"^\d{5}(-\d{4})?$").unwrap();
}

/// Profile form exactly as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSubmission {
    #[serde(default, alias = "userId", alias = "userID")]
    pub user_id: Option<Value>,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<Value>,
    #[serde(default, alias = "address1")]
    pub address_1: Option<Value>,
    #[serde(default, alias = "address2")]
    pub address_2: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default, alias = "zipCode")]
    pub zip_code: Option<Value>,
    #[serde(default)]
    pub skills: Option<Value>,
    #[serde(default)]
    pub preferences: Option<Value>,
    #[serde(default)]
    pub availability: Option<Value>,
}

/// Check a submission, returning `None` when it is valid.
///
/// Every violated field contributes its own entry; array elements are keyed
/// as `field[index]`.
pub fn validate_profile(submission: &ProfileSubmission) -> Option<FieldErrors> {
    parse_profile(submission).err()
}

/// Validate and convert in one pass
pub fn parse_profile(submission: &ProfileSubmission) -> Result<Profile, FieldErrors> {
    let mut errors = FieldErrors::new();

    let user_id = match submission.user_id.as_ref().and_then(positive_int) {
        Some(id) => Some(UserId::new(id)),
        None => {
            errors.insert(
                "user_id".into(),
                "User ID is required and must be a positive number.".into(),
            );
            None
        }
    };

    let full_name = required_text(&submission.full_name, "full_name", "Full Name", &mut errors);
    if let Some(name) = &full_name {
        if name.chars().count() > FULL_NAME_MAX_CHARS {
            errors.insert(
                "full_name".into(),
                format!("Full Name must be {FULL_NAME_MAX_CHARS} characters or less."),
            );
        }
    }

    let address_1 = required_text(&submission.address_1, "address_1", "Address 1", &mut errors);

    let address_2 = match &submission.address_2 {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        value => required_text(value, "address_2", "Address 2", &mut errors),
    };

    let city = required_text(&submission.city, "city", "City", &mut errors);

    let state = match submission.state.as_ref().and_then(Value::as_str) {
        Some(code) if is_valid_state(code) => Some(code.to_string()),
        _ => {
            errors.insert("state".into(), "Invalid state selection.".into());
            None
        }
    };

    let zip_code = match submission.zip_code.as_ref().and_then(Value::as_str) {
        Some(zip) if zip.trim().is_empty() => {
            errors.insert(
                "zip_code".into(),
                "Zip Code is required and must be a string.".into(),
            );
            None
        }
        Some(zip) if ZIP_CODE_REGEX.is_match(zip.trim()) => Some(zip.trim().to_string()),
        Some(_) => {
            errors.insert("zip_code".into(), "Invalid Zip Code format.".into());
            None
        }
        None => {
            errors.insert(
                "zip_code".into(),
                "Zip Code is required and must be a string.".into(),
            );
            None
        }
    };

    let skills = parse_skills(submission.skills.as_ref(), &mut errors);

    let preferences = match &submission.preferences {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Some(_) => {
            errors.insert("preferences".into(), "Preferences must be a string.".into());
            None
        }
    };

    let availability = parse_availability(submission.availability.as_ref(), &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    // All required pieces are present once no errors were recorded.
    match (user_id, full_name, address_1, city, state, zip_code) {
        (Some(user_id), Some(full_name), Some(address_1), Some(city), Some(state), Some(zip_code)) => {
            Ok(Profile {
                user_id,
                full_name,
                address_1,
                address_2,
                city,
                state,
                zip_code,
                skills,
                preferences,
                availability,
            })
        }
        _ => Err(errors),
    }
}

fn required_text(
    value: &Option<Value>,
    key: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => {
            errors.insert(
                key.to_string(),
                format!("{label} is required and must be a string."),
            );
            None
        }
    }
}

/// Positive integer given as a JSON number or numeric string
fn positive_int(value: &Value) -> Option<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.filter(|v| *v > 0)
}

fn parse_skills(value: Option<&Value>, errors: &mut FieldErrors) -> Vec<SkillId> {
    let items = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.insert("skills".into(), "Skills must be an array.".into());
            return Vec::new();
        }
    };

    let mut skills = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match positive_int(item) {
            Some(id) => {
                let id = SkillId::new(id);
                if !skills.contains(&id) {
                    skills.push(id);
                }
            }
            None => {
                errors.insert(
                    format!("skills[{index}]"),
                    "Each skill must be a numeric skill id.".into(),
                );
            }
        }
    }
    skills
}

fn parse_availability(value: Option<&Value>, errors: &mut FieldErrors) -> Vec<Weekday> {
    let items = match value {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => {
            errors.insert(
                "availability".into(),
                "At least one available day is required.".into(),
            );
            return Vec::new();
        }
    };

    let mut days = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_str().and_then(|s| s.parse::<Weekday>().ok()) {
            Some(day) => {
                if !days.contains(&day) {
                    days.push(day);
                }
            }
            None => {
                errors.insert(
                    format!("availability[{index}]"),
                    "Availability must be a day of the week.".into(),
                );
            }
        }
    }
    days
}
