// farmgate/src/reports.rs

//! Read-only aggregation over the order store and the catalog: the
//! pre-aggregated totals a dashboard or reporting view consumes. No writes,
//! no additional invariants.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::catalog::ProductCatalog;
use crate::error::MarketResult;
use crate::model::{OrderStatus, Product};
use crate::orders::OrderStore;

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
  pub status: OrderStatus,
  pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductSales {
  pub product_id: Uuid,
  pub product_name: String,
  pub units_sold: u64,
  pub revenue_cents: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesSummary {
  pub total_orders: usize,
  /// Revenue across all non-cancelled orders; cancelled orders contribute
  /// nothing.
  pub gross_revenue_cents: i64,
  pub orders_by_status: Vec<StatusCount>,
  /// Per-product sales, best revenue first.
  pub top_products: Vec<ProductSales>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
  pub active_products: usize,
  pub low_stock: Vec<Product>,
  pub out_of_stock: Vec<Product>,
}

#[derive(Clone)]
pub struct Reports {
  catalog: Arc<ProductCatalog>,
  orders: Arc<OrderStore>,
}

impl Reports {
  pub fn new(catalog: Arc<ProductCatalog>, orders: Arc<OrderStore>) -> Self {
    Reports { catalog, orders }
  }

  pub async fn sales_summary(&self) -> MarketResult<SalesSummary> {
    let orders = self.orders.snapshot().await?;

    let all_statuses = [
      OrderStatus::Pending,
      OrderStatus::Processing,
      OrderStatus::Shipped,
      OrderStatus::Delivered,
      OrderStatus::Cancelled,
    ];
    let orders_by_status = all_statuses
      .into_iter()
      .map(|status| StatusCount {
        status,
        count: orders.iter().filter(|o| o.status == status).count(),
      })
      .collect();

    let mut gross_revenue_cents = 0i64;
    let mut per_product: HashMap<Uuid, ProductSales> = HashMap::new();
    for order in orders.iter().filter(|o| o.status != OrderStatus::Cancelled) {
      gross_revenue_cents += order.total_cents;
      for item in &order.items {
        let entry = per_product.entry(item.product_id).or_insert_with(|| ProductSales {
          product_id: item.product_id,
          product_name: item.product_name.clone(),
          units_sold: 0,
          revenue_cents: 0,
        });
        entry.units_sold += u64::from(item.quantity);
        entry.revenue_cents += item.subtotal_cents();
      }
    }

    let mut top_products: Vec<ProductSales> = per_product.into_values().collect();
    top_products.sort_by(|a, b| {
      b.revenue_cents
        .cmp(&a.revenue_cents)
        .then(a.product_id.cmp(&b.product_id))
    });

    Ok(SalesSummary {
      total_orders: orders.len(),
      gross_revenue_cents,
      orders_by_status,
      top_products,
    })
  }

  pub async fn inventory_summary(&self, low_stock_threshold: u32) -> MarketResult<InventorySummary> {
    Ok(InventorySummary {
      active_products: self.catalog.count_active().await?,
      low_stock: self.catalog.low_stock(low_stock_threshold).await?,
      out_of_stock: self.catalog.out_of_stock().await?,
    })
  }
}
