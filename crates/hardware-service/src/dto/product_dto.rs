//! Product-related DTOs.

use chrono::{DateTime, Utc};
use hardware_core::validation::rules::not_blank;
use hardware_core::{require, HardwareResult, Product, ProductId, ValidateExt};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product creation request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Claw Hammer")]
    pub name: Option<String>,
    #[schema(example = "16oz steel claw hammer")]
    pub description: Option<String>,
    #[schema(example = 24.99)]
    pub price: Option<f64>,
    #[schema(example = "Tools")]
    pub category: Option<String>,
    /// Optional image URL or path.
    pub image: Option<String>,
}

/// Product fields after the required-field check.
#[derive(Debug, Clone, Validate)]
pub struct NewProductInput {
    #[validate(length(max = 80), custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(max = 200))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(length(max = 80), custom(function = "not_blank"))]
    pub category: String,

    #[validate(length(max = 500))]
    pub image: Option<String>,
}

impl CreateProductRequest {
    /// Checks required fields in declared order, then field rules.
    pub fn into_input(self) -> HardwareResult<NewProductInput> {
        let input = NewProductInput {
            name: require("name", self.name)?.trim().to_string(),
            description: require("description", self.description)?,
            price: require("price", self.price)?,
            category: require("category", self.category)?.trim().to_string(),
            image: self
                .image
                .map(|image| image.trim().to_string())
                .filter(|image| !image.is_empty()),
        };
        input.validate_request()?;
        Ok(input)
    }
}

/// Public view of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = i64)]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
            created_at: product.created_at,
        }
    }
}

/// Response to a successful product creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreatedResponse {
    #[schema(example = "Product added successfully")]
    pub message: String,
    pub product: ProductResponse,
}

impl ProductCreatedResponse {
    #[must_use]
    pub fn new(product: ProductResponse) -> Self {
        Self {
            message: "Product added successfully".to_string(),
            product,
        }
    }
}
