// farmgate/src/storefront.rs

//! `Storefront` bundles the catalog, ledger, order store, and reports into
//! one wired unit, the way a deployment composes them: one catalog, one
//! ledger in front of it, one order store driving both.

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::ProductCatalog;
use crate::error::MarketResult;
use crate::inventory::InventoryLedger;
use crate::model::Product;
use crate::orders::{OrderStore, PricingPolicy};
use crate::repo::{InMemoryOrders, InMemoryProducts, OrderRepository, ProductRepository};
use crate::reports::Reports;

#[derive(Clone)]
pub struct Storefront {
  pub catalog: Arc<ProductCatalog>,
  pub ledger: Arc<InventoryLedger>,
  pub orders: Arc<OrderStore>,
  pub reports: Reports,
}

impl Storefront {
  /// Everything in memory: the configuration tests and demos run with.
  pub fn in_memory(policy: PricingPolicy) -> Self {
    Storefront::with_repositories(
      Arc::new(InMemoryProducts::new()),
      Arc::new(InMemoryOrders::new()),
      policy,
    )
  }

  /// Composes the services over caller-supplied repositories, e.g. a
  /// persistent backend.
  pub fn with_repositories(
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    policy: PricingPolicy,
  ) -> Self {
    let catalog = Arc::new(ProductCatalog::new(products));
    let ledger = Arc::new(InventoryLedger::new(catalog.clone()));
    let order_store = Arc::new(OrderStore::new(orders, catalog.clone(), ledger.clone(), policy));
    let reports = Reports::new(catalog.clone(), order_store.clone());
    Storefront {
      catalog,
      ledger,
      orders: order_store,
      reports,
    }
  }

  /// Archives a product, with the order store standing in as the reference
  /// guard: any non-terminal order referencing the product blocks this.
  pub async fn archive_product(&self, id: Uuid) -> MarketResult<Product> {
    self.catalog.archive(id, self.orders.as_ref()).await
  }
}
