//! Argon2id credential hashing for registered accounts

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Longest password accepted; argon2 cost grows with input length
pub const MAX_PASSWORD_LEN: usize = 128;

/// Hashes new passwords and checks login attempts against stored hashes
#[derive(Debug, Clone, Copy, Default)]
pub struct Passwords;

impl Passwords {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Argon2id, version 0x13, default cost parameters
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }

    /// PHC-format hash with a fresh random salt
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Self::argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(anyhow::anyhow!("argon2 hash: {e}")))?;
        Ok(phc.to_string())
    }

    /// `Ok(())` when `password` produced `stored`.
    ///
    /// A mismatch is [`AppError::InvalidCredentials`]; a stored value that is
    /// not a PHC string is an internal error.
    pub fn check(&self, password: &str, stored: &str) -> AppResult<()> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(anyhow::anyhow!("stored hash unreadable: {e}")))?;

        Self::argon2()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AppError::InvalidCredentials)
    }
}

/// Registration rule: non-blank and at most [`MAX_PASSWORD_LEN`] bytes
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.trim().is_empty() {
        Err(AppError::Validation("Password is required".to_string()))
    } else if password.len() > MAX_PASSWORD_LEN {
        Err(AppError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters long"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "beach cleanup 2024";

    #[test]
    fn test_hash_is_salted_argon2() {
        let passwords = Passwords::new();
        let first = passwords.hash(SECRET).unwrap();
        let second = passwords.hash(SECRET).unwrap();

        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_check_accepts_matching_password() {
        let passwords = Passwords::new();
        let stored = passwords.hash(SECRET).unwrap();
        assert!(passwords.check(SECRET, &stored).is_ok());
    }

    #[test]
    fn test_check_rejects_wrong_password() {
        let passwords = Passwords::new();
        let stored = passwords.hash(SECRET).unwrap();
        assert!(matches!(
            passwords.check("beach cleanup 2025", &stored),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_check_with_garbage_hash_is_internal() {
        let err = Passwords::new().check(SECRET, "plaintext").unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("x").is_ok());
        assert!(validate_password(&"a".repeat(MAX_PASSWORD_LEN)).is_ok());

        let blank = validate_password("   ");
        assert!(matches!(blank, Err(AppError::Validation(msg)) if msg.contains("required")));

        let long = validate_password(&"a".repeat(MAX_PASSWORD_LEN + 1));
        assert!(matches!(long, Err(AppError::Validation(msg)) if msg.contains("at most")));
    }
}
