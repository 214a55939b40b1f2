// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use farmgate::{
  BuyerRef, CartItem, FarmerRef, NewProduct, PricingPolicy, Product, ProductCategory, Storefront,
};
use tracing::Level;
use uuid::Uuid;

// --- Common Fixture Builders ---

pub fn storefront() -> Storefront {
  Storefront::in_memory(PricingPolicy::default())
}

pub fn green_valley() -> FarmerRef {
  FarmerRef {
    id: Uuid::new_v4(),
    name: "Green Valley Farms".to_string(),
    location: "Portland, OR".to_string(),
    rating: 4.8,
  }
}

pub fn new_product(name: &str, price_cents: i64, quantity: u32, category: ProductCategory) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    description: None,
    price_cents,
    quantity,
    unit: "lb".to_string(),
    category,
    is_organic: false,
    is_featured: false,
    farmer: green_valley(),
  }
}

/// Creates a vegetable product with the given price and stock.
pub async fn add_product(market: &Storefront, name: &str, price_cents: i64, quantity: u32) -> Product {
  market
    .catalog
    .create(new_product(name, price_cents, quantity, ProductCategory::Vegetables))
    .await
    .expect("product creation should succeed")
}

pub fn buyer(name: &str, email: &str) -> BuyerRef {
  BuyerRef {
    id: Uuid::new_v4(),
    name: name.to_string(),
    email: email.to_string(),
  }
}

pub fn line(product: &Product, quantity: u32) -> CartItem {
  CartItem {
    product_id: product.id,
    quantity,
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
