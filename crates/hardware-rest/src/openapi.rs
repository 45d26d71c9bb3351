//! OpenAPI documentation served at `/api-docs/openapi.json`.

use crate::controllers::health_controller::{ComponentStatus, HealthResponse, ReadinessResponse};
use hardware_core::{ErrorResponse, FieldError};
use hardware_service::{
    CreateProductRequest, CreateUserRequest, LoginRequest, LoginResponse, LoginUser, ProductCreatedResponse,
    ProductResponse, UserCreatedResponse, UserResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Hardware Store API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hardware App API",
        version = "1.0",
        description = "A REST API for a hardware store"
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::login,
        crate::controllers::user_controller::current_user,
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::create_product,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            CreateUserRequest,
            UserResponse,
            UserCreatedResponse,
            LoginRequest,
            LoginUser,
            LoginResponse,
            CreateProductRequest,
            ProductResponse,
            ProductCreatedResponse,
            HealthResponse,
            ReadinessResponse,
            ComponentStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "User registration and login"),
        (name = "products", description = "Product catalogue"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for JWT Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned by /users/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metadata() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Hardware App API");
        assert_eq!(doc.info.version, "1.0");
        assert_eq!(doc.info.description.as_deref(), Some("A REST API for a hardware store"));
    }

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/users/", "/users/login", "/users/me", "/products/", "/health", "/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
