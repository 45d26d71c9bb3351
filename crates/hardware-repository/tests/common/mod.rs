//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use hardware_core::{Email, NewProduct, NewUser, UserRole};
use hardware_repository::DatabasePool;
use std::sync::Arc;

/// Private in-memory database with migrations applied.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database; every test gets its own.
    pub async fn new() -> Self {
        let pool = DatabasePool::in_memory()
            .await
            .expect("Failed to create in-memory database");

        Self { pool: Arc::new(pool) }
    }

    /// Returns a handle to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}

pub fn new_user(username: &str, email: &str) -> NewUser {
    NewUser::new(
        username,
        Email::parse(email).expect("valid email"),
        "$argon2id$v=19$m=1024,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        UserRole::Regular,
    )
}

pub fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct::new(name, format!("{name} description"), price, "Tools", None).expect("valid product")
}
