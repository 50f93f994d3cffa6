//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{AccessToken, Claims, JwtService};
pub use password::{validate_password, Passwords, MAX_PASSWORD_LEN};
