//! # Hardware Server Library
//!
//! Composition root for the Hardware Store API: builds the database pool,
//! repositories, services and router from an [`hardware_config::AppConfig`]
//! and serves them until a shutdown signal arrives.

pub mod app;
pub mod logging;
pub mod startup;

pub use app::*;
