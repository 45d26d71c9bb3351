//! User registration and login controller.

use crate::{
    extractors::{ApiJson, AuthenticatedUser},
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use hardware_core::{ErrorResponse, HardwareError};
use hardware_service::{CreateUserRequest, LoginRequest, LoginResponse, UserCreatedResponse, UserResponse};
use tracing::debug;

/// Creates the user router. Collection routes answer with and without the
/// trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/login", post(login))
        .route("/users/me", get(current_user))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    responses(
        (status = 200, description = "All registered users", body = [UserResponse]),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");
    ok(state.user_service.list_users().await?)
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Missing or invalid field, or email/username taken", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), AppError> {
    debug!("Create user request");

    let user = state.user_service.create_user(request).await?;
    Ok(created(UserCreatedResponse::new(user)))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 401, description = "Invalid password", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    debug!("Login request");
    ok(state.auth_service.login(request).await?)
}

/// Profile of the authenticated caller.
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    )
)]
pub async fn current_user(State(state): State<AppState>, user: AuthenticatedUser) -> ApiResult<UserResponse> {
    debug!("Get current user: {}", user.username);

    let user_id = user
        .user_id()
        .ok_or_else(|| HardwareError::InvalidToken("missing user ID".to_string()))?;
    ok(state.user_service.get_user(user_id).await?)
}
