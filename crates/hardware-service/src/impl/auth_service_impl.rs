//! Authentication service implementation.

use crate::auth_service::AuthService;
use crate::dto::{LoginRequest, LoginResponse, LoginUser};
use async_trait::async_trait;
use hardware_core::{Email, HardwareError, HardwareResult};
use hardware_repository::UserRepository;
use hardware_security::{Claims, PasswordHasherInterface, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication service implementation.
pub struct AuthServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasherInterface>,
    token_provider: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, request: LoginRequest) -> HardwareResult<LoginResponse> {
        let (email, password) = request.into_credentials()?;
        debug!("Login attempt for: {}", email);

        // A malformed address cannot belong to any account.
        let user = match Email::parse(&email) {
            Ok(email) => self.user_repository.find_by_email(&email).await?,
            Err(_) => None,
        };
        let Some(user) = user else {
            warn!("Login failed: user not found - {}", email);
            return Err(HardwareError::not_found("User", email));
        };

        let hasher = Arc::clone(&self.password_hasher);
        let stored_hash = user.password_hash.clone();
        let password_matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| HardwareError::Internal(format!("Password verification task failed: {}", e)))??;

        if !password_matches {
            warn!("Login failed: invalid password - {}", user.id);
            return Err(HardwareError::InvalidCredentials);
        }

        let token = self.token_provider.generate_access_token(&user)?;
        info!("User logged in: {}", user.id);

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            user: LoginUser::from(&user),
            access_token: token.token,
            token_type: token.token_type.to_string(),
            expires_in: token.expires_in,
        })
    }

    async fn authenticate(&self, token: &str) -> HardwareResult<Claims> {
        self.token_provider.validate_access_token(token)
    }
}

impl std::fmt::Debug for AuthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryUserRepository, MockUserRepo};
    use hardware_config::SecurityConfig;
    use hardware_core::{NewUser, UserId, UserRole};
    use hardware_security::PasswordHasher;

    fn test_config() -> SecurityConfig {
        SecurityConfig {
            secret_key: "test-secret-key-for-testing-only-0123456789".to_string(),
            token_issuer: "test-issuer".to_string(),
            ..SecurityConfig::default()
        }
    }

    async fn service_with_user(password: &str) -> AuthServiceImpl {
        let hasher = Arc::new(PasswordHasher::with_cost(1));
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.save(NewUser::new(
            "testuser",
            Email::parse("test@example.com").unwrap(),
            hasher.hash(password).unwrap(),
            UserRole::Regular,
        ))
        .await
        .unwrap();
        AuthServiceImpl::new(repo, hasher, Arc::new(TokenProvider::new(&test_config())))
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = service_with_user("Password123").await;

        let response = service.login(login("test@example.com", "Password123")).await.unwrap();
        assert_eq!(response.message, "Login successful");
        assert_eq!(response.user.id, UserId::new(1));
        assert_eq!(response.user.username, "testuser");
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_email_is_case_insensitive() {
        let service = service_with_user("Password123").await;
        assert!(service.login(login(" TEST@example.com", "Password123")).await.is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = service_with_user("Password123").await;

        let err = service.login(login("test@example.com", "WrongPassword")).await.unwrap_err();
        assert!(matches!(err, HardwareError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid password");
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let service = service_with_user("Password123").await;

        let err = service.login(login("nobody@example.com", "Password123")).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_login_malformed_email_is_not_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().never();
        let service = AuthServiceImpl::new(
            Arc::new(repo),
            Arc::new(PasswordHasher::with_cost(1)),
            Arc::new(TokenProvider::new(&test_config())),
        );

        let err = service.login(login("not-an-email", "x")).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let service = service_with_user("Password123").await;
        let request = LoginRequest {
            email: Some("test@example.com".to_string()),
            password: None,
        };

        let err = service.login(request).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing field: password");
    }

    #[tokio::test]
    async fn test_authenticate_round_trip() {
        let service = service_with_user("Password123").await;
        let response = service.login(login("test@example.com", "Password123")).await.unwrap();

        let claims = service.authenticate(&response.access_token).await.unwrap();
        assert_eq!(claims.user_id(), Some(UserId::new(1)));
        assert_eq!(claims.username, "testuser");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, UserRole::Regular);
        assert_eq!(claims.iss, "test-issuer");
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage() {
        let service = service_with_user("Password123").await;
        let err = service.authenticate("invalid-token").await.unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_token_from_other_secret() {
        let service = service_with_user("Password123").await;
        let response = service.login(login("test@example.com", "Password123")).await.unwrap();

        let other = AuthServiceImpl::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(PasswordHasher::with_cost(1)),
            Arc::new(TokenProvider::new(&SecurityConfig {
                secret_key: "a-completely-different-signing-secret-value".to_string(),
                ..test_config()
            })),
        );
        assert!(matches!(
            other.authenticate(&response.access_token).await,
            Err(HardwareError::InvalidToken(_))
        ));
    }
}
