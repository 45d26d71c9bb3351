//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Hardware Store API.
///
/// Every layer returns this type; the REST layer maps it onto an HTTP
/// status code and a JSON error body.
#[derive(Error, Debug)]
pub enum HardwareError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("{resource_type} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// A required request field was absent.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Validation error with per-field details.
    #[error("Validation error: {message}")]
    InvalidFields {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Duplicate registration data (reported as a bad request).
    #[error("{0}")]
    Duplicate(String),

    /// Conflict error (e.g., duplicate catalogue entry)
    #[error("{0}")]
    Conflict(String),

    // ============ Authentication Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    /// Password did not match the stored hash.
    #[error("Invalid password")]
    InvalidCredentials,

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HardwareError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::MissingField(_)
            | Self::Validation(_)
            | Self::InvalidFields { .. }
            | Self::Duplicate(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_)
            | Self::InvalidToken(_)
            | Self::TokenExpired
            | Self::InvalidCredentials => 401,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::Validation(_) | Self::InvalidFields { .. } => "VALIDATION_ERROR",
            Self::Duplicate(_) => "DUPLICATE",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate<T: Into<String>>(message: T) -> Self {
        Self::Duplicate(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for errors that indicate a server-side fault.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for HardwareError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "Record",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for HardwareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error body for API responses.
///
/// `error` carries the human-readable message so clients that only look at
/// that key keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `HardwareError`.
    #[must_use]
    pub fn from_error(error: &HardwareError) -> Self {
        let details = match error {
            HardwareError::InvalidFields { fields, .. } => Some(fields.clone()),
            _ => None,
        };
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            details,
        }
    }
}

impl From<&HardwareError> for ErrorResponse {
    fn from(error: &HardwareError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(HardwareError::not_found("User", 1).status_code(), 404);
        assert_eq!(HardwareError::MissingField("email").status_code(), 400);
        assert_eq!(HardwareError::validation("invalid email").status_code(), 400);
        assert_eq!(HardwareError::duplicate("Email already registered").status_code(), 400);
        assert_eq!(HardwareError::conflict("Product already exists!").status_code(), 409);
        assert_eq!(HardwareError::unauthorized("no token").status_code(), 401);
        assert_eq!(HardwareError::InvalidCredentials.status_code(), 401);
        assert_eq!(HardwareError::TokenExpired.status_code(), 401);
        assert_eq!(HardwareError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(HardwareError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(HardwareError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(HardwareError::MissingField("name").error_code(), "MISSING_FIELD");
        assert_eq!(HardwareError::duplicate("dup").error_code(), "DUPLICATE");
        assert_eq!(HardwareError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(HardwareError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(HardwareError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(HardwareError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(HardwareError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(HardwareError::MissingField("username").to_string(), "Missing field: username");
        assert_eq!(HardwareError::not_found("User", "a@b.com").to_string(), "User not found");
        assert_eq!(HardwareError::InvalidCredentials.to_string(), "Invalid password");
        assert_eq!(
            HardwareError::conflict("Product already exists!").to_string(),
            "Product already exists!"
        );
    }

    #[test]
    fn test_server_error_classification() {
        assert!(HardwareError::Database("connection lost".to_string()).is_server_error());
        assert!(!HardwareError::MissingField("price").is_server_error());
        assert!(!HardwareError::InvalidCredentials.is_server_error());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = HardwareError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.error, "User not found");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_invalid_fields_carry_details() {
        let err = HardwareError::InvalidFields {
            message: "price: must be >= 0".to_string(),
            fields: vec![FieldError {
                field: "price".to_string(),
                message: "must be >= 0".to_string(),
                code: "range".to_string(),
            }],
        };
        assert_eq!(err.status_code(), 400);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.error, "Validation error: price: must be >= 0");
        assert_eq!(response.details.unwrap()[0].field, "price");
    }

    #[test]
    fn test_error_response_serializes_error_key() {
        let response = ErrorResponse::from(&HardwareError::MissingField("role"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Missing field: role");
        assert_eq!(json["code"], "MISSING_FIELD");
        assert!(json.get("details").is_none());
    }
}
