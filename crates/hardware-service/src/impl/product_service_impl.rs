//! Product service implementation.

use crate::dto::{CreateProductRequest, ProductResponse};
use crate::product_service::ProductService;
use async_trait::async_trait;
use hardware_core::{HardwareError, HardwareResult, NewProduct};
use hardware_repository::ProductRepository;
use std::sync::Arc;
use tracing::{debug, info};

const PRODUCT_EXISTS: &str = "Product already exists!";

/// Product service backed by a [`ProductRepository`].
pub struct ProductServiceImpl {
    product_repository: Arc<dyn ProductRepository>,
}

impl ProductServiceImpl {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn list_products(&self) -> HardwareResult<Vec<ProductResponse>> {
        debug!("Listing products");
        let products = self.product_repository.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn create_product(&self, request: CreateProductRequest) -> HardwareResult<ProductResponse> {
        let input = request.into_input()?;
        debug!("Creating product: {}", input.name);

        if self.product_repository.exists_by_name(&input.name).await? {
            return Err(HardwareError::conflict(PRODUCT_EXISTS));
        }

        let product = NewProduct::new(input.name, input.description, input.price, input.category, input.image)?;
        let product = self.product_repository.save(product).await.map_err(|e| match e {
            HardwareError::Conflict(_) => HardwareError::conflict(PRODUCT_EXISTS),
            other => other,
        })?;

        info!("Product created: {} ({})", product.id, product.name);
        Ok(ProductResponse::from(product))
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
