//! Authentication service trait definition.

use crate::dto::{LoginRequest, LoginResponse};
use async_trait::async_trait;
use hardware_core::HardwareResult;
use hardware_security::Claims;

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Checks credentials and issues an access token.
    async fn login(&self, request: LoginRequest) -> HardwareResult<LoginResponse>;

    /// Validates an access token and returns its claims.
    async fn authenticate(&self, token: &str) -> HardwareResult<Claims>;
}
