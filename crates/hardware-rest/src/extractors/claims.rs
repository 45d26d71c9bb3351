//! Bearer token extractor.

use crate::{responses::AppError, state::AppState};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use hardware_core::HardwareError;
use hardware_security::Claims;
use tracing::debug;

/// Claims of the caller, taken from `Authorization: Bearer <token>`.
///
/// Rejects with 401 when the header is missing, not a bearer token, or the
/// token fails validation.
pub struct AuthenticatedUser(pub Claims);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| HardwareError::unauthorized("Missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| HardwareError::unauthorized("Invalid authorization format"))?;

        let claims = state.auth_service.authenticate(token).await.map_err(|e| {
            debug!("Token validation failed: {}", e);
            e
        })?;
        Ok(AuthenticatedUser(claims))
    }
}
