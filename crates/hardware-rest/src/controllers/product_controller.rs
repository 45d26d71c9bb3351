//! Product catalogue controller.

use crate::{
    extractors::ApiJson,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use hardware_core::ErrorResponse;
use hardware_service::{CreateProductRequest, ProductCreatedResponse, ProductResponse};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
}

/// List all products.
#[utoipa::path(
    get,
    path = "/products/",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<ProductResponse>> {
    debug!("List products request");
    ok(state.product_service.list_products().await?)
}

/// Add a product to the catalogue.
#[utoipa::path(
    post,
    path = "/products/",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added", body = ProductCreatedResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Product already exists!", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductCreatedResponse>), AppError> {
    debug!("Create product request");

    let product = state.product_service.create_product(request).await?;
    Ok(created(ProductCreatedResponse::new(product)))
}
