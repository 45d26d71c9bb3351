//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `user_service.rs`).

pub mod auth_service_impl;
pub mod product_service_impl;
pub mod user_service_impl;

pub use auth_service_impl::AuthServiceImpl;
pub use product_service_impl::ProductServiceImpl;
pub use user_service_impl::UserServiceImpl;
