//! Repository trait definitions.

use async_trait::async_trait;
use hardware_core::{
    Email, HardwareResult, NewOrder, NewProduct, NewUser, Order, OrderId, Product, User, UserId,
};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user, oldest first.
    async fn find_all(&self) -> HardwareResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> HardwareResult<Option<User>>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &Email) -> HardwareResult<Option<User>>;

    /// Checks if an email is registered.
    async fn exists_by_email(&self, email: &Email) -> HardwareResult<bool>;

    /// Checks if a username is taken.
    async fn exists_by_username(&self, username: &str) -> HardwareResult<bool>;

    /// Inserts a new user.
    ///
    /// A unique-constraint violation surfaces as `HardwareError::Conflict`
    /// carrying the database message.
    async fn save(&self, user: NewUser) -> HardwareResult<User>;
}

/// Product repository trait.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product, oldest first.
    async fn find_all(&self) -> HardwareResult<Vec<Product>>;

    /// Finds a product by its exact name.
    async fn find_by_name(&self, name: &str) -> HardwareResult<Option<Product>>;

    /// Checks if a product with this exact name exists.
    async fn exists_by_name(&self, name: &str) -> HardwareResult<bool>;

    /// Inserts a new product.
    async fn save(&self, product: NewProduct) -> HardwareResult<Product>;
}

/// Order repository trait.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Finds an order by ID.
    async fn find_by_id(&self, id: OrderId) -> HardwareResult<Option<Order>>;

    /// Returns a user's orders, oldest first.
    async fn find_by_user(&self, user_id: UserId) -> HardwareResult<Vec<Order>>;

    /// Inserts a new order. Fails with not found when the user does not exist.
    async fn save(&self, order: NewOrder) -> HardwareResult<Order>;
}
