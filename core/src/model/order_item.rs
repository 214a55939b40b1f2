// farmgate/src/model/order_item.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One product + quantity pairing within an order. Name and unit price are
/// snapshotted at placement so later catalog edits never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub product_id: Uuid,
  pub product_name: String,
  /// Always >= 1; validated at placement.
  pub quantity: u32,
  pub unit_price_cents: i64,
}

impl OrderItem {
  pub fn subtotal_cents(&self) -> i64 {
    self.unit_price_cents * i64::from(self.quantity)
  }
}
