// farmgate/src/repo/memory.rs

//! In-memory repositories backed by `parking_lot::RwLock`. These are the
//! implementations tests and demos run against.
//!
//! Lock guards here are blocking and are never held across an `.await`
//! suspension point; every method does its work in one synchronous critical
//! section.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};
use crate::model::{Order, Product};
use crate::repo::{OrderRepository, ProductRepository};

#[derive(Default)]
pub struct InMemoryProducts {
  rows: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryProducts {
  pub fn new() -> Self {
    InMemoryProducts::default()
  }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
  async fn insert(&self, product: Product) -> MarketResult<()> {
    let mut rows = self.rows.write();
    if rows.contains_key(&product.id) {
      return Err(MarketError::conflict(format!("product {} already exists", product.id)));
    }
    rows.insert(product.id, product);
    Ok(())
  }

  async fn fetch(&self, id: Uuid) -> MarketResult<Option<Product>> {
    Ok(self.rows.read().get(&id).cloned())
  }

  async fn store(&self, product: Product) -> MarketResult<()> {
    let mut rows = self.rows.write();
    match rows.get_mut(&product.id) {
      Some(slot) => {
        *slot = product;
        Ok(())
      }
      None => Err(MarketError::NotFound {
        entity: "product",
        id: product.id,
      }),
    }
  }

  async fn adjust_quantity(&self, id: Uuid, delta: i64) -> MarketResult<Product> {
    // Check and write under one write lock; this is the atomicity contract
    // the ledger relies on.
    let mut rows = self.rows.write();
    let row = rows.get_mut(&id).ok_or(MarketError::NotFound { entity: "product", id })?;

    let next = i64::from(row.quantity) + delta;
    if next < 0 {
      return Err(MarketError::InsufficientStock {
        product_id: id,
        requested: delta.unsigned_abs() as u32,
        available: row.quantity,
      });
    }
    row.quantity = u32::try_from(next)
      .map_err(|_| MarketError::validation(format!("stock adjustment overflows for product {}", id)))?;
    row.updated_at = Utc::now();
    Ok(row.clone())
  }

  async fn snapshot(&self) -> MarketResult<Vec<Product>> {
    Ok(self.rows.read().values().cloned().collect())
  }
}

#[derive(Default)]
pub struct InMemoryOrders {
  rows: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrders {
  pub fn new() -> Self {
    InMemoryOrders::default()
  }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
  async fn insert(&self, order: Order) -> MarketResult<()> {
    let mut rows = self.rows.write();
    if rows.contains_key(&order.id) {
      return Err(MarketError::conflict(format!("order {} already exists", order.id)));
    }
    rows.insert(order.id, order);
    Ok(())
  }

  async fn fetch(&self, id: Uuid) -> MarketResult<Option<Order>> {
    Ok(self.rows.read().get(&id).cloned())
  }

  async fn store(&self, order: Order) -> MarketResult<()> {
    let mut rows = self.rows.write();
    match rows.get_mut(&order.id) {
      Some(slot) => {
        *slot = order;
        Ok(())
      }
      None => Err(MarketError::NotFound {
        entity: "order",
        id: order.id,
      }),
    }
  }

  async fn snapshot(&self) -> MarketResult<Vec<Order>> {
    Ok(self.rows.read().values().cloned().collect())
  }
}
