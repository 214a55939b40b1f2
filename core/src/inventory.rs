// farmgate/src/inventory.rs

//! `InventoryLedger`: mediates every stock-affecting event so the catalog's
//! quantity never desyncs from order activity.
//!
//! Each reservation is recorded under its (order id, line number) key. The
//! key is claimed before the stock decrement and consumed by the release, so
//! a reservation can be credited back at most once.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::catalog::ProductCatalog;
use crate::error::{MarketError, MarketResult};

#[derive(Debug, Clone, Copy)]
struct ReservedLine {
  product_id: Uuid,
  quantity: u32,
}

pub struct InventoryLedger {
  catalog: Arc<ProductCatalog>,
  reservations: Mutex<HashMap<(Uuid, u32), ReservedLine>>,
}

impl InventoryLedger {
  pub fn new(catalog: Arc<ProductCatalog>) -> Self {
    InventoryLedger {
      catalog,
      reservations: Mutex::new(HashMap::new()),
    }
  }

  /// Reserves `quantity` units for one order line: claims the reservation
  /// key, then decrements stock through the catalog's guarded adjust. Fails
  /// with `InsufficientStock` when the stock check rejects the decrement,
  /// with `Conflict` when the line is already reserved.
  #[instrument(name = "ledger::reserve", skip(self))]
  pub async fn reserve(&self, order_id: Uuid, line_no: u32, product_id: Uuid, quantity: u32) -> MarketResult<()> {
    if quantity == 0 {
      return Err(MarketError::validation("reserved quantity must be at least 1"));
    }

    // Claim the key first so a concurrent duplicate cannot decrement twice.
    {
      let mut reservations = self.reservations.lock();
      match reservations.entry((order_id, line_no)) {
        Entry::Occupied(_) => {
          return Err(MarketError::conflict(format!(
            "line {} of order {} is already reserved",
            line_no, order_id
          )));
        }
        Entry::Vacant(slot) => {
          slot.insert(ReservedLine { product_id, quantity });
        }
      }
    }

    match self.catalog.adjust_quantity(product_id, -i64::from(quantity)).await {
      Ok(product) => {
        debug!(%order_id, line_no, %product_id, quantity, remaining = product.quantity, "Stock reserved.");
        Ok(())
      }
      Err(err) => {
        // The decrement never happened; withdraw the claim.
        self.reservations.lock().remove(&(order_id, line_no));
        Err(err)
      }
    }
  }

  /// Credits back exactly what one line reserved. The reservation record is
  /// consumed, so a second release of the same key fails with `Conflict`
  /// instead of double-crediting stock.
  #[instrument(name = "ledger::release", skip(self))]
  pub async fn release(&self, order_id: Uuid, line_no: u32) -> MarketResult<()> {
    let line = self
      .reservations
      .lock()
      .remove(&(order_id, line_no))
      .ok_or_else(|| {
        MarketError::conflict(format!(
          "no outstanding reservation for line {} of order {}",
          line_no, order_id
        ))
      })?;

    // Products are soft-deleted only, so the credit cannot target a missing row.
    self.catalog.adjust_quantity(line.product_id, i64::from(line.quantity)).await?;
    debug!(%order_id, line_no, product_id = %line.product_id, quantity = line.quantity, "Stock released.");
    Ok(())
  }

  /// Releases every outstanding reservation of one order, once each. Used by
  /// cancellation and by placement rollback. Returns how many lines were
  /// credited back.
  #[instrument(name = "ledger::release_all", skip(self))]
  pub async fn release_all(&self, order_id: Uuid) -> MarketResult<usize> {
    let drained: Vec<ReservedLine> = {
      let mut reservations = self.reservations.lock();
      let keys: Vec<(Uuid, u32)> = reservations
        .keys()
        .filter(|(id, _)| *id == order_id)
        .copied()
        .collect();
      keys.into_iter().filter_map(|key| reservations.remove(&key)).collect()
    };

    if drained.is_empty() {
      warn!(%order_id, "No outstanding reservations to release.");
    }
    for line in &drained {
      self.catalog.adjust_quantity(line.product_id, i64::from(line.quantity)).await?;
    }
    debug!(%order_id, lines = drained.len(), "Released all reservations for order.");
    Ok(drained.len())
  }

  /// How many lines of an order are currently reserved.
  pub fn outstanding(&self, order_id: Uuid) -> usize {
    self.reservations.lock().keys().filter(|(id, _)| *id == order_id).count()
  }
}
