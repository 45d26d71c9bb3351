//! Product entity.

use crate::validation::rules::non_negative_amount;
use crate::{Entity, HardwareError, HardwareResult, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogue item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique display name.
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Optional image URL or path.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity<ProductId> for Product {
    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// A product that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
}

impl NewProduct {
    /// Creates an insert payload, rejecting negative or non-finite prices.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: Option<String>,
    ) -> HardwareResult<Self> {
        non_negative_amount(price).map_err(|_| HardwareError::validation("price must be a finite amount >= 0"))?;
        Ok(Self {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            image,
        })
    }

    /// Attaches the id and timestamp assigned by storage.
    #[must_use]
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            created_at,
        }
    }
}
