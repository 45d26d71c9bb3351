//! User-related DTOs.

use chrono::{DateTime, Utc};
use hardware_core::validation::rules::{known_role, not_blank};
use hardware_core::{require, HardwareResult, User, UserId, UserRole, ValidateExt};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration request body.
///
/// Every field is optional at the type level so that an absent key is
/// reported as `Missing field: <name>` rather than a JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "bob")]
    pub username: Option<String>,
    #[schema(example = "bob@example.com")]
    pub email: Option<String>,
    #[schema(example = "s3cret")]
    pub password: Option<String>,
    /// `Admin` or `Regular` (case-insensitive).
    #[schema(example = "Regular")]
    pub role: Option<String>,
}

/// Registration fields after the required-field check.
#[derive(Debug, Clone, Validate)]
pub struct NewUserInput {
    #[validate(length(max = 80), custom(function = "not_blank"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"), length(max = 120))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,

    #[validate(custom(function = "known_role"))]
    pub role: String,
}

impl CreateUserRequest {
    /// Checks required fields in declared order, then field rules.
    pub fn into_input(self) -> HardwareResult<NewUserInput> {
        let input = NewUserInput {
            username: require("username", self.username)?.trim().to_string(),
            email: require("email", self.email)?.trim().to_string(),
            password: require("password", self.password)?,
            role: require("role", self.role)?,
        };
        input.validate_request()?;
        Ok(input)
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = i64)]
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[schema(value_type = String, example = "Regular")]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email.into(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Response to a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCreatedResponse {
    #[schema(example = "User created successfully")]
    pub message: String,
    pub user: UserResponse,
}

impl UserCreatedResponse {
    #[must_use]
    pub fn new(user: UserResponse) -> Self {
        Self {
            message: "User created successfully".to_string(),
            user,
        }
    }
}
