//! Main application router.

use crate::{
    controllers::{health_controller, product_controller, user_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use hardware_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;

/// Creates the main application router.
///
/// Layers, outermost first: request id, tracing, request logging, request id
/// propagation, CORS, compression, timeout, body limit.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(health_controller::router())
        .merge(user_controller::router())
        .merge(product_controller::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/", get(root))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(server_config.max_body_size))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!("Router created with REST endpoints and OpenAPI document at /api-docs/openapi.json");
    router
}

/// Creates a CORS layer from the configured origins.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim_end_matches('/')) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serves the OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Hardware App API v1.0"
}
