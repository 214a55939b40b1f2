// farmgate/examples/cancel_and_restock.rs

use farmgate::{
  BuyerRef, CartItem, FarmerRef, MarketError, NewProduct, OrderStatus, PricingPolicy,
  ProductCategory, Storefront,
};
use tracing::info;
use uuid::Uuid;

// Shows the inventory-consistency rules: over-ordering is rejected without
// touching stock, multi-line placement is all-or-nothing, and cancellation
// restores exactly what was reserved.
#[tokio::main]
async fn main() -> Result<(), MarketError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Cancellation & Rollback Example ---");

  let market = Storefront::in_memory(PricingPolicy::default());
  let farmer = FarmerRef {
    id: Uuid::new_v4(),
    name: "Happy Hen Farm".to_string(),
    location: "Eugene, OR".to_string(),
    rating: 4.9,
  };
  let eggs = market
    .catalog
    .create(NewProduct {
      name: "Farm Fresh Eggs".to_string(),
      description: None,
      price_cents: 599,
      quantity: 3,
      unit: "dozen".to_string(),
      category: ProductCategory::Dairy,
      is_organic: true,
      is_featured: false,
      farmer: farmer.clone(),
    })
    .await?;
  let cheese = market
    .catalog
    .create(NewProduct {
      name: "Artisanal Goat Cheese".to_string(),
      description: None,
      price_cents: 699,
      quantity: 20,
      unit: "8 oz".to_string(),
      category: ProductCategory::Dairy,
      is_organic: false,
      is_featured: true,
      farmer,
    })
    .await?;

  let buyer = BuyerRef {
    id: Uuid::new_v4(),
    name: "Alice Smith".to_string(),
    email: "alice@example.com".to_string(),
  };

  // 1. Over-ordering fails and leaves stock untouched
  let too_many = market
    .orders
    .place_order(
      buyer.clone(),
      &[CartItem { product_id: eggs.id, quantity: 5 }],
      "34 Oak Ave",
      "card",
    )
    .await;
  info!("Ordering 5 of 3 available: {:?}", too_many.as_ref().err());
  assert!(matches!(too_many, Err(MarketError::InsufficientStock { .. })));
  assert_eq!(market.catalog.get(eggs.id).await?.quantity, 3);

  // 2. A failing second line rolls the first line back
  let partial = market
    .orders
    .place_order(
      buyer.clone(),
      &[
        CartItem { product_id: cheese.id, quantity: 2 },
        CartItem { product_id: eggs.id, quantity: 5 },
      ],
      "34 Oak Ave",
      "card",
    )
    .await;
  assert!(partial.is_err());
  assert_eq!(market.catalog.get(cheese.id).await?.quantity, 20); // compensated
  info!("All-or-nothing placement left the cheese stock at 20.");

  // 3. A successful order reserves stock; cancelling restores it
  let order = market
    .orders
    .place_order(
      buyer,
      &[CartItem { product_id: eggs.id, quantity: 2 }],
      "34 Oak Ave",
      "card",
    )
    .await?;
  assert_eq!(market.catalog.get(eggs.id).await?.quantity, 1);

  market.orders.update_status(order.id, OrderStatus::Cancelled).await?;
  assert_eq!(market.catalog.get(eggs.id).await?.quantity, 3);
  info!("Cancellation released the reservation; egg stock is back to 3.");

  // 4. Top up everything that ran low
  let restocked = market.catalog.restock_all(10, 50).await?;
  info!("Restocked {} products.", restocked.len());
  assert_eq!(market.catalog.get(eggs.id).await?.quantity, 53);

  Ok(())
}
