//! # Hardware REST
//!
//! HTTP surface of the Hardware Store API built on Axum: user registration
//! and login, the product catalogue, health probes and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
