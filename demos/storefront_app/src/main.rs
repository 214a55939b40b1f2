// demos/storefront_app/src/main.rs

// Declare modules for the application
mod config;
mod seed;

use crate::config::AppConfig;

use farmgate::{
  BuyerRef, Cart, MarketError, OrderFilter, OrderStatus, PaymentStatus, PricingPolicy, Product,
  ProductCategory, ProductFilter, Storefront,
};
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use uuid::Uuid;

// Main function
#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  // (Customize as needed, e.g., with JSON output, OpenTelemetry)
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  info!("Starting storefront demo session...");

  // Load application configuration
  let app_config = AppConfig::from_env()?;

  // Compose the in-memory storefront
  let market = Storefront::in_memory(PricingPolicy::flat_delivery_fee(app_config.delivery_fee_cents));

  let products = if app_config.seed_catalog {
    seed::seed_catalog(&market).await?
  } else {
    Vec::new()
  };

  run_storefront_session(&market, &products, &app_config).await?;

  info!("Storefront demo session finished.");
  Ok(())
}

fn find<'a>(products: &'a [Product], name: &str) -> anyhow::Result<&'a Product> {
  products
    .iter()
    .find(|p| p.name == name)
    .ok_or_else(|| anyhow::anyhow!("seed product '{}' missing", name))
}

/// Scripted session exercising every operation group: catalog browsing, cart
/// checkout, the order status machine, the rejection paths, and the reports.
async fn run_storefront_session(
  market: &Storefront,
  products: &[Product],
  app_config: &AppConfig,
) -> anyhow::Result<()> {
  let broccoli = find(products, "Organic Fresh Broccoli")?;
  let carrots = find(products, "Organic Carrots")?;
  let strawberries = find(products, "Fresh Strawberries")?;
  let eggs = find(products, "Farm Fresh Eggs")?;

  // --- Buyer storefront: browse the catalog ---
  let vegetables = market
    .catalog
    .list(&ProductFilter {
      category: Some(ProductCategory::Vegetables),
      ..ProductFilter::default()
    })
    .await?;
  info!("Browsing vegetables: {} listings.", vegetables.items.len());

  let organic = market
    .catalog
    .list(&ProductFilter {
      organic_only: true,
      search: Some("fresh".to_string()),
      ..ProductFilter::default()
    })
    .await?;
  info!("Organic listings matching 'fresh': {}.", organic.items.len());

  // --- Checkout: cart -> order ---
  let john = BuyerRef {
    id: Uuid::new_v4(),
    name: "John Doe".to_string(),
    email: "john@example.com".to_string(),
  };
  let mut cart = Cart::new();
  cart.add(broccoli.id, 2);
  cart.add(carrots.id, 4);

  let order = market
    .orders
    .place_order(john.clone(), cart.items(), "12 Elm St, Portland, OR", "card")
    .await?;
  info!(
    "Order {} placed for {}: total ${:.2}",
    order.id,
    order.buyer.name,
    order.total_cents as f64 / 100.0
  );
  println!("{}", serde_json::to_string_pretty(&order)?);

  // --- Fulfilment: payment, then the status machine ---
  market.orders.update_payment_status(order.id, PaymentStatus::Completed).await?;
  for next in [OrderStatus::Processing, OrderStatus::Shipped, OrderStatus::Delivered] {
    market.orders.update_status(order.id, next).await?;
  }
  info!("Order {} delivered.", order.id);

  // --- Cancellation: stock comes back ---
  let alice = BuyerRef {
    id: Uuid::new_v4(),
    name: "Alice Smith".to_string(),
    email: "alice@example.com".to_string(),
  };
  let cancelled = market
    .orders
    .place_order(
      alice,
      &[farmgate::CartItem { product_id: strawberries.id, quantity: 3 }],
      "34 Oak Ave, Salem, OR",
      "cash",
    )
    .await?;
  info!(
    "Strawberry stock after placement: {}",
    market.catalog.get(strawberries.id).await?.quantity
  );
  market.orders.update_status(cancelled.id, OrderStatus::Cancelled).await?;
  info!(
    "Strawberry stock after cancellation: {}",
    market.catalog.get(strawberries.id).await?.quantity
  );

  // --- Rejection paths stay rejections ---
  match market.orders.update_status(order.id, OrderStatus::Processing).await {
    Err(MarketError::InvalidTransition { from, to, .. }) => {
      warn!("Rejected as expected: {} -> {} on a delivered order.", from, to)
    }
    other => anyhow::bail!("expected InvalidTransition, got {:?}", other),
  }

  match market
    .orders
    .place_order(
      john,
      &[farmgate::CartItem { product_id: eggs.id, quantity: 1_000 }],
      "12 Elm St, Portland, OR",
      "card",
    )
    .await
  {
    Err(MarketError::InsufficientStock { requested, available, .. }) => {
      warn!(
        "Rejected as expected: requested {} with only {} available.",
        requested, available
      )
    }
    other => anyhow::bail!("expected InsufficientStock, got {:?}", other),
  }

  // --- Admin dashboard: the order book and the reports ---
  let john_orders = market
    .orders
    .list_orders(&OrderFilter { search: Some("john".to_string()), ..OrderFilter::default() })
    .await?;
  info!("Orders matching 'john': {}.", john_orders.total_items);

  let sales = market.reports.sales_summary().await?;
  println!("{}", serde_json::to_string_pretty(&sales)?);

  let inventory = market.reports.inventory_summary(app_config.low_stock_threshold).await?;
  println!("{}", serde_json::to_string_pretty(&inventory)?);

  Ok(())
}
