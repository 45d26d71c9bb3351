//! Email value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

/// Longest email the users table accepts.
pub const EMAIL_MAX_LEN: usize = 120;

/// Error type for email validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    /// Not a syntactically valid address.
    #[error("Invalid email address: {0}")]
    Malformed(String),
    /// Longer than the column allows.
    #[error("Email address exceeds {EMAIL_MAX_LEN} characters")]
    TooLong,
}

/// Normalized (trimmed, lower-cased) email address.
///
/// Registration and login both go through this type, so lookups match
/// regardless of the casing a client sends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address.
    pub fn parse(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = email.as_ref().trim().to_lowercase();
        if email.chars().count() > EMAIL_MAX_LEN {
            return Err(EmailError::TooLong);
        }
        if !email.validate_email() {
            return Err(EmailError::Malformed(email));
        }
        Ok(Self(email))
    }

    /// Wraps an address read back from storage.
    #[must_use]
    pub fn from_stored(email: String) -> Self {
        Self(email)
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
