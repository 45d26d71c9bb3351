//! SQLite order repository implementation.

use crate::{traits::OrderRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hardware_core::{HardwareError, HardwareResult, NewOrder, Order, OrderId, OrderStatus, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite order repository implementation.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteOrderRepository {
    /// Creates a new SQLite order repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    total_price: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = HardwareError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row
            .status
            .parse()
            .map_err(|e| HardwareError::Database(format!("Corrupt orders row {}: {}", row.id, e)))?;

        Ok(Order {
            id: OrderId::new(row.id),
            user_id: UserId::new(row.user_id),
            total_price: row.total_price,
            status,
            created_at: row.created_at,
        })
    }
}

const SELECT_ORDER: &str = "SELECT id, user_id, total_price, status, created_at FROM orders";

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> HardwareResult<Option<Order>> {
        debug!("Finding order by id: {}", id);

        let row = sqlx::query_as::<_, OrderRow>(&format!("{SELECT_ORDER} WHERE id = ?"))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Order::try_from).transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> HardwareResult<Vec<Order>> {
        debug!("Finding orders for user: {}", user_id);

        let rows = sqlx::query_as::<_, OrderRow>(&format!("{SELECT_ORDER} WHERE user_id = ? ORDER BY id"))
            .bind(user_id.into_inner())
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    async fn save(&self, order: NewOrder) -> HardwareResult<Order> {
        debug!("Saving new order for user: {}", order.user_id);

        let created_at = Utc::now();
        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders (user_id, total_price, status, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(order.user_id.into_inner())
        .bind(order.total_price)
        .bind(order.status.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return HardwareError::not_found("User", order.user_id);
                }
            }
            HardwareError::from(e)
        })?;

        tx.commit().await?;

        Ok(order.into_order(OrderId::new(result.last_insert_rowid()), created_at))
    }
}

impl std::fmt::Debug for SqliteOrderRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteOrderRepository").finish_non_exhaustive()
    }
}
