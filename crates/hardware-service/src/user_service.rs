//! User service trait definition.

use crate::dto::{CreateUserRequest, UserResponse};
use async_trait::async_trait;
use hardware_core::{HardwareResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists every registered user.
    async fn list_users(&self) -> HardwareResult<Vec<UserResponse>>;

    /// Registers a new user.
    async fn create_user(&self, request: CreateUserRequest) -> HardwareResult<UserResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> HardwareResult<UserResponse>;
}
