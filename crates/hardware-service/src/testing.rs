//! In-memory repositories and mocks shared by the service tests.

use async_trait::async_trait;
use chrono::Utc;
use hardware_core::{
    Email, HardwareError, HardwareResult, NewProduct, NewUser, Product, ProductId, User, UserId,
};
use hardware_repository::{ProductRepository, UserRepository};
use mockall::mock;
use std::sync::Mutex;

/// Vec-backed user store that enforces the same uniqueness as the schema.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> HardwareResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: UserId) -> HardwareResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> HardwareResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> HardwareResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
    }

    async fn exists_by_username(&self, username: &str) -> HardwareResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.username == username))
    }

    async fn save(&self, user: NewUser) -> HardwareResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(HardwareError::conflict("UNIQUE constraint failed: users.email"));
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(HardwareError::conflict("UNIQUE constraint failed: users.username"));
        }
        let id = UserId::new(users.len() as i64 + 1);
        let saved = user.into_user(id, Utc::now());
        users.push(saved.clone());
        Ok(saved)
    }
}

/// Vec-backed product store.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> HardwareResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_name(&self, name: &str) -> HardwareResult<Option<Product>> {
        Ok(self.products.lock().unwrap().iter().find(|p| p.name == name).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> HardwareResult<bool> {
        Ok(self.products.lock().unwrap().iter().any(|p| p.name == name))
    }

    async fn save(&self, product: NewProduct) -> HardwareResult<Product> {
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.name == product.name) {
            return Err(HardwareError::conflict("UNIQUE constraint failed: products.name"));
        }
        let id = ProductId::new(products.len() as i64 + 1);
        let saved = product.into_product(id, Utc::now());
        products.push(saved.clone());
        Ok(saved)
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_all(&self) -> HardwareResult<Vec<User>>;
        async fn find_by_id(&self, id: UserId) -> HardwareResult<Option<User>>;
        async fn find_by_email(&self, email: &Email) -> HardwareResult<Option<User>>;
        async fn exists_by_email(&self, email: &Email) -> HardwareResult<bool>;
        async fn exists_by_username(&self, username: &str) -> HardwareResult<bool>;
        async fn save(&self, user: NewUser) -> HardwareResult<User>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_all(&self) -> HardwareResult<Vec<Product>>;
        async fn find_by_name(&self, name: &str) -> HardwareResult<Option<Product>>;
        async fn exists_by_name(&self, name: &str) -> HardwareResult<bool>;
        async fn save(&self, product: NewProduct) -> HardwareResult<Product>;
    }
}
