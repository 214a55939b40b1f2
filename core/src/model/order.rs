// farmgate/src/model/order.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::order_item::OrderItem;
use crate::model::user::BuyerRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
}

impl OrderStatus {
  /// Terminal states admit no further transition.
  pub fn is_terminal(&self) -> bool {
    matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
  }

  /// The full transition relation:
  /// pending -> processing -> shipped -> delivered, and
  /// pending | processing -> cancelled.
  pub fn can_transition_to(&self, next: OrderStatus) -> bool {
    use OrderStatus::*;
    matches!(
      (self, next),
      (Pending, Processing)
        | (Processing, Shipped)
        | (Shipped, Delivered)
        | (Pending, Cancelled)
        | (Processing, Cancelled)
    )
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Processing => "processing",
      OrderStatus::Shipped => "shipped",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Payment state tracked independently of the fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
  Pending,
  Completed,
  Failed,
}

impl fmt::Display for PaymentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      PaymentStatus::Pending => "pending",
      PaymentStatus::Completed => "completed",
      PaymentStatus::Failed => "failed",
    })
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub buyer: BuyerRef,
  /// Line items with prices snapshotted at placement. Immutable once the
  /// order exists; no operation rewrites them.
  pub items: Vec<OrderItem>,
  /// Invariant: equals the sum of line subtotals plus any fees applied by
  /// the pricing policy at placement.
  pub total_cents: i64,
  pub status: OrderStatus,
  pub shipping_address: String,
  pub payment_method: String,
  pub payment_status: PaymentStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Order {
  /// Sum of line subtotals, excluding fees.
  pub fn items_subtotal_cents(&self) -> i64 {
    self.items.iter().map(|item| item.subtotal_cents()).sum()
  }

  pub fn contains_product(&self, product_id: Uuid) -> bool {
    self.items.iter().any(|item| item.product_id == product_id)
  }
}
