//! # Hardware Security
//!
//! Argon2 password hashing and JWT access tokens for the Hardware Store API.

pub mod jwt;
pub mod password;

pub use jwt::*;
pub use password::*;
