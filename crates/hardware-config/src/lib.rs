//! # Hardware Config
//!
//! Layered configuration for the Hardware Store API: built-in defaults,
//! TOML files, `HARDWARE_*` environment variables and the well-known
//! `DATABASE_URL` / `FRONTEND_URL` / `SECRET_KEY` / `PORT` variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
