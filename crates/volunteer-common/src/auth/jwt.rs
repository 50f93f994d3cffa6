//! JWT utilities for authentication
//!
//! Login issues a signed access token carrying the user's id and role.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use volunteer_core::{Role, UserId};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signed token handed to the client after login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry (seconds)
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Issue an access token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user_id: UserId, email: &str, role: Role) -> Result<AccessToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(AccessToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }

    /// Verify a token produced by [`issue`](Self::issue) and return its claims.
    ///
    /// The API serves no bearer-protected routes, so nothing in this
    /// workspace calls this outside tests. It is the check a client or
    /// gateway holding the same secret runs on tokens from `POST /login`.
    ///
    /// # Errors
    /// [`AppError::TokenExpired`] past `exp`, otherwise
    /// [`AppError::InvalidToken`] for a bad signature or malformed token
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 900)
    }

    #[test]
    fn test_issue_token() {
        let service = create_test_service();
        let token = service
            .issue(UserId::new(42), "admin@example.com", Role::Admin)
            .unwrap();

        assert!(!token.token.is_empty());
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 900);
    }

    #[test]
    fn test_decode_round_trip() {
        let service = create_test_service();
        let token = service
            .issue(UserId::new(42), "admin@example.com", Role::Admin)
            .unwrap();
        let claims = service.decode_token(&token.token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.decode_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_test_service()
            .issue(UserId::new(1), "a@b.com", Role::User)
            .unwrap();
        let other = JwtService::new("a-completely-different-secret", 900);
        assert!(matches!(
            other.decode_token(&token.token),
            Err(AppError::InvalidToken)
        ));
    }
}
