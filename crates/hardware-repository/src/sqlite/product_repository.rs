//! SQLite product repository implementation.

use crate::{traits::ProductRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hardware_core::{HardwareResult, NewProduct, Product, ProductId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

/// SQLite product repository implementation.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteProductRepository {
    /// Creates a new SQLite product repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    category: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            image: row.image,
            created_at: row.created_at,
        }
    }
}

const SELECT_PRODUCT: &str =
    "SELECT id, name, description, price, category, image, created_at FROM products";

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self) -> HardwareResult<Vec<Product>> {
        debug!("Finding all products");

        let rows = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} ORDER BY id"))
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> HardwareResult<Option<Product>> {
        debug!("Finding product by name: {}", name);

        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} WHERE name = ?"))
            .bind(name)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Product::from))
    }

    async fn exists_by_name(&self, name: &str) -> HardwareResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM products WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn save(&self, product: NewProduct) -> HardwareResult<Product> {
        debug!("Saving new product: {}", product.name);

        let created_at = Utc::now();
        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, category, image, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.image)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = ProductId::new(result.last_insert_rowid());
        info!("Inserted product {} ({})", id, product.name);
        Ok(product.into_product(id, created_at))
    }
}

impl std::fmt::Debug for SqliteProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteProductRepository").finish_non_exhaustive()
    }
}
