//! Product service trait definition.

use crate::dto::{CreateProductRequest, ProductResponse};
use async_trait::async_trait;
use hardware_core::HardwareResult;

/// Product catalogue service.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Lists every product.
    async fn list_products(&self) -> HardwareResult<Vec<ProductResponse>>;

    /// Adds a product; names are unique.
    async fn create_product(&self, request: CreateProductRequest) -> HardwareResult<ProductResponse>;
}
