// farmgate/src/model/cart_item.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ephemeral pre-order line: a product the buyer intends to purchase.
/// Converted into `OrderItem`s at checkout and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
  pub product_id: Uuid,
  pub quantity: u32,
}

/// Client-side cart helper. Adding a product already in the cart merges the
/// quantities into one line.
#[derive(Debug, Clone, Default)]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn new() -> Self {
    Cart::default()
  }

  pub fn add(&mut self, product_id: Uuid, quantity: u32) {
    if let Some(existing) = self.items.iter_mut().find(|item| item.product_id == product_id) {
      existing.quantity += quantity;
    } else {
      self.items.push(CartItem { product_id, quantity });
    }
  }

  pub fn remove(&mut self, product_id: Uuid) {
    self.items.retain(|item| item.product_id != product_id);
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }
}
