//! User entity.

use crate::domain::value_objects::{Email, UserRole};
use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered store account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Row id.
    pub id: UserId,

    /// Unique username.
    pub username: String,

    /// Unique, normalized email address.
    pub email: Email,

    /// Argon2 PHC string (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account role.
    pub role: UserRole,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Checks if the user is an admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

/// A user that has not been inserted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Email,
    pub password_hash: String,
    pub role: UserRole,
}

impl NewUser {
    /// Creates an insert payload; the password must already be hashed.
    #[must_use]
    pub fn new(username: impl Into<String>, email: Email, password_hash: String, role: UserRole) -> Self {
        Self {
            username: username.into(),
            email,
            password_hash,
            role,
        }
    }

    /// Attaches the id and timestamp assigned by storage.
    #[must_use]
    pub fn into_user(self, id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUser {
        NewUser::new(
            "alice",
            Email::parse("alice@example.com").unwrap(),
            "$argon2id$v=19$hash".to_string(),
            UserRole::Admin,
        )
    }

    #[test]
    fn test_into_user_keeps_fields() {
        let now = Utc::now();
        let user = new_user().into_user(UserId::new(5), now);
        assert_eq!(user.id(), &UserId::new(5));
        assert_eq!(user.username, "alice");
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert_eq!(user.created_at, now);
        assert!(user.is_admin());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = new_user().into_user(UserId::new(1), Utc::now());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "Admin");
    }
}
