//! SQLite repository implementations.

mod order_repository;
mod product_repository;
mod user_repository;

pub use order_repository::SqliteOrderRepository;
pub use product_repository::SqliteProductRepository;
pub use user_repository::SqliteUserRepository;
