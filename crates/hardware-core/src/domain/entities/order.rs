//! Order entity.

use crate::domain::value_objects::OrderStatus;
use crate::validation::rules::non_negative_amount;
use crate::{Entity, HardwareError, HardwareResult, OrderId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer order. Orders are persisted but have no HTTP surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity<OrderId> for Order {
    fn id(&self) -> &OrderId {
        &self.id
    }
}

/// An order that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total_price: f64,
    pub status: OrderStatus,
}

impl NewOrder {
    /// Creates a pending order for a user.
    pub fn new(user_id: UserId, total_price: f64) -> HardwareResult<Self> {
        non_negative_amount(total_price)
            .map_err(|_| HardwareError::validation("total_price must be a finite amount >= 0"))?;
        Ok(Self {
            user_id,
            total_price,
            status: OrderStatus::Pending,
        })
    }

    /// Attaches the id and timestamp assigned by storage.
    #[must_use]
    pub fn into_order(self, id: OrderId, created_at: DateTime<Utc>) -> Order {
        Order {
            id,
            user_id: self.user_id,
            total_price: self.total_price,
            status: self.status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_pending() {
        let order = NewOrder::new(UserId::new(1), 99.0).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        let stored = order.into_order(OrderId::new(10), Utc::now());
        assert_eq!(stored.user_id, UserId::new(1));
        assert_eq!(stored.id(), &OrderId::new(10));
    }

    #[test]
    fn test_rejects_negative_total() {
        assert!(NewOrder::new(UserId::new(1), -5.0).is_err());
    }
}
