//! Application state for Axum handlers.

use hardware_core::HealthCheck;
use hardware_service::{AuthService, ProductService, UserService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub product_service: Arc<dyn ProductService>,
    pub auth_service: Arc<dyn AuthService>,
    /// Probes consulted by `/ready`.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            user_service,
            product_service,
            auth_service,
            health_checks: Vec::new(),
        }
    }

    /// Registers a readiness probe.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
