//! JWT claims structure.

use chrono::{DateTime, Utc};
use hardware_core::{User, UserId, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,

    /// Username.
    pub username: String,

    /// User's email.
    pub email: String,

    /// User's role.
    pub role: UserRole,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Not before timestamp.
    pub nbf: i64,

    /// Issuer.
    pub iss: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,
}

impl Claims {
    /// Creates access token claims for a user.
    #[must_use]
    pub fn for_user(user: &User, issuer: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.to_string(),
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.into(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Returns the user ID encoded in the subject.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use hardware_core::{Email, NewUser};

    fn user() -> User {
        NewUser::new(
            "bob",
            Email::parse("bob@example.com").unwrap(),
            "hash".to_string(),
            UserRole::Regular,
        )
        .into_user(UserId::new(12), Utc::now())
    }

    #[test]
    fn test_claims_for_user() {
        let expires = Utc::now() + Duration::hours(1);
        let claims = Claims::for_user(&user(), "issuer", expires);

        assert_eq!(claims.user_id(), Some(UserId::new(12)));
        assert_eq!(claims.username, "bob");
        assert_eq!(claims.email, "bob@example.com");
        assert_eq!(claims.role, UserRole::Regular);
        assert_eq!(claims.exp, expires.timestamp());
    }

    #[test]
    fn test_unique_token_ids() {
        let expires = Utc::now() + Duration::hours(1);
        let a = Claims::for_user(&user(), "issuer", expires);
        let b = Claims::for_user(&user(), "issuer", expires);
        assert_ne!(a.jti, b.jti);
    }
}
