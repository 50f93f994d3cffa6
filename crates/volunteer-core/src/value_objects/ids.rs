//! Typed identifiers - one newtype per table key
//!
//! All ids are positive 64-bit integers assigned by the store. They serialize
//! as plain JSON numbers and parse from path segments via `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an id from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Store-assigned ids start at 1
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }

            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                match s.trim().parse::<i64>() {
                    Ok(value) if value > 0 => Ok(Self(value)),
                    _ => Err(IdParseError::InvalidFormat),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(
    /// Primary key of a user account
    UserId
);
define_id!(
    /// Primary key of a volunteer event
    EventId
);
define_id!(
    /// Primary key of a skill
    SkillId
);
define_id!(
    /// Primary key of a notification
    NotificationId
);
