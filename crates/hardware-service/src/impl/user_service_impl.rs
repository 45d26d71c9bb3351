//! User service implementation.

use crate::dto::{CreateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use hardware_core::{Email, HardwareError, HardwareResult, NewUser, UserId, UserRole};
use hardware_repository::UserRepository;
use hardware_security::PasswordHasherInterface;
use std::sync::Arc;
use tracing::{debug, info};

const EMAIL_TAKEN: &str = "Email already registered";
const USERNAME_TAKEN: &str = "Username already taken";

/// User service backed by a [`UserRepository`].
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasherInterface>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

/// Maps a unique-constraint conflict raised by a racing insert onto the
/// same message the pre-checks produce.
fn registration_conflict(error: HardwareError) -> HardwareError {
    match error {
        HardwareError::Conflict(message) if message.contains("users.username") => {
            HardwareError::duplicate(USERNAME_TAKEN)
        }
        HardwareError::Conflict(_) => HardwareError::duplicate(EMAIL_TAKEN),
        other => other,
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> HardwareResult<Vec<UserResponse>> {
        debug!("Listing users");
        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn create_user(&self, request: CreateUserRequest) -> HardwareResult<UserResponse> {
        let input = request.into_input()?;
        debug!("Creating user: {}", input.username);

        let email = Email::parse(&input.email).map_err(|e| HardwareError::validation(e.to_string()))?;
        let role: UserRole = input
            .role
            .parse()
            .map_err(|e: hardware_core::UnknownRole| HardwareError::validation(e.to_string()))?;

        if self.user_repository.exists_by_email(&email).await? {
            return Err(HardwareError::duplicate(EMAIL_TAKEN));
        }
        if self.user_repository.exists_by_username(&input.username).await? {
            return Err(HardwareError::duplicate(USERNAME_TAKEN));
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let hasher = Arc::clone(&self.password_hasher);
        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| HardwareError::Internal(format!("Password hashing task failed: {}", e)))??;
        let user = self
            .user_repository
            .save(NewUser::new(input.username, email, password_hash, role))
            .await
            .map_err(registration_conflict)?;

        info!("User created: {} ({})", user.id, user.role);
        Ok(UserResponse::from(user))
    }

    async fn get_user(&self, id: UserId) -> HardwareResult<UserResponse> {
        debug!("Getting user: {}", id);
        self.user_repository
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| HardwareError::not_found("User", id))
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
