// farmgate/src/orders.rs

//! `OrderStore`: owns the order lifecycle. Placement snapshots catalog
//! prices, reserves stock all-or-nothing, and creates the order in
//! `pending`; every later mutation is a status transition checked against
//! the state machine, or a payment-status update.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::catalog::{ProductCatalog, ProductReferences};
use crate::error::{MarketError, MarketResult};
use crate::inventory::InventoryLedger;
use crate::model::{BuyerRef, CartItem, Order, OrderItem, OrderStatus, Page, PaymentStatus};
use crate::repo::OrderRepository;

/// Fees applied on top of the items subtotal at placement. The default
/// policy adds nothing; storefront deployments configure a flat delivery fee.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingPolicy {
  pub delivery_fee_cents: i64,
}

impl PricingPolicy {
  pub fn flat_delivery_fee(cents: i64) -> Self {
    PricingPolicy { delivery_fee_cents: cents }
  }
}

/// Listing filter. Defaults to: every order, newest first, page 1.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
  pub status: Option<OrderStatus>,
  /// Case-insensitive substring match over buyer name, buyer email, and
  /// order id.
  pub search: Option<String>,
  /// 1-based page number; 0 is treated as 1.
  pub page: usize,
}

pub struct OrderStore {
  repo: Arc<dyn OrderRepository>,
  catalog: Arc<ProductCatalog>,
  ledger: Arc<InventoryLedger>,
  policy: PricingPolicy,
}

impl OrderStore {
  pub fn new(
    repo: Arc<dyn OrderRepository>,
    catalog: Arc<ProductCatalog>,
    ledger: Arc<InventoryLedger>,
    policy: PricingPolicy,
  ) -> Self {
    OrderStore {
      repo,
      catalog,
      ledger,
      policy,
    }
  }

  /// Places an order from cart contents. Prices are snapshotted from the
  /// catalog at this moment; later price changes do not retroactively affect
  /// the order. Every line is reserved through the ledger; if any
  /// reservation fails, the ones already applied for this placement are
  /// released before the error surfaces (all-or-nothing).
  #[instrument(name = "orders::place_order", skip_all, fields(buyer = %buyer.email, lines = cart.len()))]
  pub async fn place_order(
    &self,
    buyer: BuyerRef,
    cart: &[CartItem],
    shipping_address: &str,
    payment_method: &str,
  ) -> MarketResult<Order> {
    if cart.is_empty() {
      return Err(MarketError::validation("order must contain at least one item"));
    }
    if shipping_address.trim().is_empty() {
      return Err(MarketError::validation("shipping address must not be empty"));
    }
    if payment_method.trim().is_empty() {
      return Err(MarketError::validation("payment method must not be empty"));
    }

    // Snapshot names and prices before touching stock.
    let mut items = Vec::with_capacity(cart.len());
    for line in cart {
      if line.quantity == 0 {
        return Err(MarketError::validation(format!(
          "ordered quantity for product {} must be at least 1",
          line.product_id
        )));
      }
      let product = self.catalog.get(line.product_id).await?;
      if product.archived {
        return Err(MarketError::conflict(format!(
          "product {} is archived and cannot be ordered",
          product.id
        )));
      }
      items.push(OrderItem {
        product_id: product.id,
        product_name: product.name,
        quantity: line.quantity,
        unit_price_cents: product.price_cents,
      });
    }

    let order_id = Uuid::new_v4();
    for (line_no, item) in items.iter().enumerate() {
      if let Err(err) = self
        .ledger
        .reserve(order_id, line_no as u32, item.product_id, item.quantity)
        .await
      {
        warn!(%order_id, line_no, error = %err, "Reservation failed; rolling back placement.");
        self.roll_back_reservations(order_id).await;
        return Err(err);
      }
    }

    let subtotal: i64 = items.iter().map(|item| item.subtotal_cents()).sum();
    let now = Utc::now();
    let order = Order {
      id: order_id,
      buyer,
      items,
      total_cents: subtotal + self.policy.delivery_fee_cents,
      status: OrderStatus::Pending,
      shipping_address: shipping_address.trim().to_string(),
      payment_method: payment_method.trim().to_string(),
      payment_status: PaymentStatus::Pending,
      created_at: now,
      updated_at: now,
    };

    if let Err(err) = self.repo.insert(order.clone()).await {
      warn!(%order_id, error = %err, "Order insert failed; rolling back reservations.");
      self.roll_back_reservations(order_id).await;
      return Err(err);
    }

    info!(%order_id, total_cents = order.total_cents, "Order placed.");
    Ok(order)
  }

  /// Compensating releases for a failed placement. The original error is the
  /// one the caller needs; a rollback failure is logged, not returned.
  async fn roll_back_reservations(&self, order_id: Uuid) {
    if let Err(rollback_err) = self.ledger.release_all(order_id).await {
      error!(%order_id, error = %rollback_err, "Rollback of reservations failed.");
    }
  }

  pub async fn get(&self, id: Uuid) -> MarketResult<Order> {
    self
      .repo
      .fetch(id)
      .await?
      .ok_or(MarketError::NotFound { entity: "order", id })
  }

  /// Applies a status transition. Illegal transitions fail with
  /// `InvalidTransition` and leave the order untouched. A transition into
  /// `cancelled` releases the order's reservations exactly once; the
  /// terminal-state rule makes a second cancellation unreachable.
  #[instrument(name = "orders::update_status", skip(self))]
  pub async fn update_status(&self, order_id: Uuid, new_status: OrderStatus) -> MarketResult<Order> {
    let mut order = self.get(order_id).await?;
    if !order.status.can_transition_to(new_status) {
      return Err(MarketError::InvalidTransition {
        order_id,
        from: order.status,
        to: new_status,
      });
    }

    if new_status == OrderStatus::Cancelled {
      let released = self.ledger.release_all(order_id).await?;
      info!(%order_id, lines = released, "Cancelled order; stock released.");
    }

    order.status = new_status;
    order.updated_at = Utc::now();
    self.repo.store(order.clone()).await?;
    info!(%order_id, status = %new_status, "Order status updated.");
    Ok(order)
  }

  /// Payment state is tracked independently of fulfilment and never touches
  /// inventory.
  #[instrument(name = "orders::update_payment_status", skip(self))]
  pub async fn update_payment_status(&self, order_id: Uuid, status: PaymentStatus) -> MarketResult<Order> {
    let mut order = self.get(order_id).await?;
    order.payment_status = status;
    order.updated_at = Utc::now();
    self.repo.store(order.clone()).await?;
    info!(%order_id, payment_status = %status, "Payment status updated.");
    Ok(order)
  }

  pub async fn list_orders(&self, filter: &OrderFilter) -> MarketResult<Page<Order>> {
    let needle = filter.search.as_ref().map(|s| s.trim().to_lowercase());
    let mut matches: Vec<Order> = self
      .repo
      .snapshot()
      .await?
      .into_iter()
      .filter(|order| {
        filter.status.map_or(true, |s| order.status == s)
          && needle.as_ref().map_or(true, |n| order_matches(order, n))
      })
      .collect();

    // Newest first; id ascending breaks created_at ties so pages are stable.
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    Ok(Page::slice(matches, filter.page))
  }

  /// Every order on record, unordered. Reports aggregate over this.
  pub async fn snapshot(&self) -> MarketResult<Vec<Order>> {
    self.repo.snapshot().await
  }
}

fn order_matches(order: &Order, needle: &str) -> bool {
  order.buyer.name.to_lowercase().contains(needle)
    || order.buyer.email.to_lowercase().contains(needle)
    || order.id.to_string().contains(needle)
}

#[async_trait]
impl ProductReferences for OrderStore {
  async fn has_open_orders(&self, product_id: Uuid) -> MarketResult<bool> {
    Ok(
      self
        .repo
        .snapshot()
        .await?
        .iter()
        .any(|order| !order.status.is_terminal() && order.contains_product(product_id)),
    )
  }
}
