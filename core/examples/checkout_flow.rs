// farmgate/examples/checkout_flow.rs

use farmgate::{
  BuyerRef, Cart, FarmerRef, MarketError, NewProduct, OrderStatus, PaymentStatus, PricingPolicy,
  ProductCategory, Storefront,
};
use tracing::info;
use uuid::Uuid;

// Walks the happy path: seed a catalog, fill a cart, place the order, and
// move it through the full status machine to delivered.
#[tokio::main]
async fn main() -> Result<(), MarketError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Checkout Flow Example ---");

  // 1. Compose an in-memory storefront with a flat $5.99 delivery fee
  let market = Storefront::in_memory(PricingPolicy::flat_delivery_fee(599));

  // 2. Seed the catalog
  let farmer = FarmerRef {
    id: Uuid::new_v4(),
    name: "Green Valley Farms".to_string(),
    location: "Portland, OR".to_string(),
    rating: 4.8,
  };
  let carrots = market
    .catalog
    .create(NewProduct {
      name: "Organic Carrots".to_string(),
      description: Some("Sweet and crunchy organic carrots.".to_string()),
      price_cents: 299,
      quantity: 60,
      unit: "lb".to_string(),
      category: ProductCategory::Vegetables,
      is_organic: true,
      is_featured: false,
      farmer: farmer.clone(),
    })
    .await?;
  let eggs = market
    .catalog
    .create(NewProduct {
      name: "Farm Fresh Eggs".to_string(),
      description: Some("Free-range eggs from pasture-raised hens.".to_string()),
      price_cents: 599,
      quantity: 40,
      unit: "dozen".to_string(),
      category: ProductCategory::Dairy,
      is_organic: true,
      is_featured: false,
      farmer,
    })
    .await?;

  // 3. Build a cart and check out
  let mut cart = Cart::new();
  cart.add(carrots.id, 4);
  cart.add(eggs.id, 1);

  let buyer = BuyerRef {
    id: Uuid::new_v4(),
    name: "John Doe".to_string(),
    email: "john@example.com".to_string(),
  };
  let order = market
    .orders
    .place_order(buyer, cart.items(), "12 Elm St, Portland, OR", "card")
    .await?;
  info!(
    "Order {} placed: {} lines, total ${:.2}",
    order.id,
    order.items.len(),
    order.total_cents as f64 / 100.0
  );

  // 4 carrots + 1 dozen eggs + delivery fee
  assert_eq!(order.total_cents, 4 * 299 + 599 + 599);
  assert_eq!(market.catalog.get(carrots.id).await?.quantity, 56);

  // 4. Record the payment and fulfil the order step by step
  market.orders.update_payment_status(order.id, PaymentStatus::Completed).await?;
  for next in [OrderStatus::Processing, OrderStatus::Shipped, OrderStatus::Delivered] {
    let updated = market.orders.update_status(order.id, next).await?;
    info!("Order {} is now {}", updated.id, updated.status);
  }

  let final_state = market.orders.get(order.id).await?;
  assert_eq!(final_state.status, OrderStatus::Delivered);
  info!("Checkout flow completed.");

  Ok(())
}
