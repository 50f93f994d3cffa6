//! Authentication service
//!
//! Handles registration and login.

use tracing::{info, instrument, warn};
use validator::ValidateEmail;
use volunteer_common::auth::{validate_password, Passwords};
use volunteer_core::{normalize_email, DomainError, NewUser, Role};

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
    passwords: Passwords,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            passwords: Passwords::new(),
        }
    }

    /// Register a new user. A taken email is a conflict.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        let email = normalize_email(&request.email);
        if !email.validate_email() {
            return Err(DomainError::InvalidEmail.into());
        }
        validate_password(&request.password)?;

        let role = Role::from_registration(request.role.as_deref());
        let password_hash = self.passwords.hash(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::new(&email, password_hash, role))
            .await?;

        info!(user_id = %user.id, role = role.as_str(), "User registered successfully");

        Ok(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.id.into_inner(),
            email: user.email,
            role: user.role,
        })
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                DomainError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                DomainError::InvalidCredentials
            })?;

        if let Err(e) = self.passwords.check(&request.password, &password_hash) {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        let token = self.ctx.jwt_service().issue(user.id, &user.email, user.role)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user_id: user.id.into_inner(),
            email: user.email,
            role: user.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::test_context;

    fn register_request(email: &str, role: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "correct horse".to_string(),
            role: role.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        let registered = service
            .register(register_request(" Jane@Example.com ", Some("ADMIN")))
            .await
            .unwrap();
        assert_eq!(registered.email, "jane@example.com");
        assert_eq!(registered.role, Role::Admin);

        let login = service
            .login(LoginRequest {
                email: "JANE@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(login.user_id, registered.user_id);

        let claims = ctx.jwt_service().decode_token(&login.token).unwrap();
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.sub, registered.user_id.to_string());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);
        service
            .register(register_request("jane@example.com", None))
            .await
            .unwrap();

        let err = service
            .register(register_request("JANE@example.com", None))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        let err = service
            .register(register_request("nope", None))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_EMAIL");

        let mut request = register_request("jane@example.com", None);
        request.password = "   ".to_string();
        let err = service.register(request).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);
        service
            .register(register_request("jane@example.com", None))
            .await
            .unwrap();

        let err = service
            .login(LoginRequest {
                email: "jane@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);

        let err = service
            .login(LoginRequest {
                email: "ghost@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
