//! # Hardware Service
//!
//! Business logic for the Hardware Store API: registration, login and the
//! product catalogue. Each service is a trait (used by the REST layer as
//! `Arc<dyn …>`) with its implementation under [`r#impl`].

pub mod auth_service;
pub mod dto;
pub mod r#impl;
pub mod product_service;
pub mod user_service;

#[cfg(test)]
mod testing;

pub use auth_service::*;
pub use dto::*;
pub use r#impl::*;
pub use product_service::*;
pub use user_service::*;
