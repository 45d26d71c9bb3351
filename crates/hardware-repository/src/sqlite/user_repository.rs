//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hardware_core::{Email, HardwareError, HardwareResult, NewUser, User, UserId, UserRole};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

/// SQLite user repository implementation.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = HardwareError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: UserRole = row
            .role
            .parse()
            .map_err(|e| HardwareError::Database(format!("Corrupt users row {}: {}", row.id, e)))?;

        Ok(User {
            id: UserId::new(row.id),
            username: row.username,
            email: Email::from_stored(row.email),
            password_hash: row.password_hash,
            role,
            created_at: row.created_at,
        })
    }
}

const SELECT_USER: &str = "SELECT id, username, email, password_hash, role, created_at FROM users";

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> HardwareResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} ORDER BY id"))
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> HardwareResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> HardwareResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE email = ?"))
            .bind(email.as_str())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> HardwareResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE email = ? LIMIT 1")
            .bind(email.as_str())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn exists_by_username(&self, username: &str) -> HardwareResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn save(&self, user: NewUser) -> HardwareResult<User> {
        debug!("Saving new user: {}", user.username);

        let created_at = Utc::now();
        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, role, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = UserId::new(result.last_insert_rowid());
        info!("Inserted user {} ({})", id, user.username);
        Ok(user.into_user(id, created_at))
    }
}

impl std::fmt::Debug for SqliteUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserRepository").finish_non_exhaustive()
    }
}
