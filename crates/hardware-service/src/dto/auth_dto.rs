//! Authentication-related DTOs.

use hardware_core::{require, HardwareResult, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "bob@example.com")]
    pub email: Option<String>,
    #[schema(example = "s3cret")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)`, reporting the first missing field.
    pub fn into_credentials(self) -> HardwareResult<(String, String)> {
        let email = require("email", self.email)?;
        let password = require("password", self.password)?;
        Ok((email, password))
    }
}

/// User summary included in the login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginUser {
    #[schema(value_type = i64)]
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<&User> for LoginUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.to_string(),
        }
    }
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: LoginUser,
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_email_then_password() {
        let err = LoginRequest::default().into_credentials().unwrap_err();
        assert_eq!(err.to_string(), "Missing field: email");

        let request = LoginRequest {
            email: Some("a@b.com".to_string()),
            password: None,
        };
        assert_eq!(request.into_credentials().unwrap_err().to_string(), "Missing field: password");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "a@b.com", "password": "x", "remember": true}"#).unwrap();
        assert_eq!(
            request.into_credentials().unwrap(),
            ("a@b.com".to_string(), "x".to_string())
        );
    }
}
