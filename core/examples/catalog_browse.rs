// farmgate/examples/catalog_browse.rs

use farmgate::{
  FarmerRef, MarketError, NewProduct, PricingPolicy, ProductCategory, ProductFilter, Storefront,
};
use tracing::info;
use uuid::Uuid;

// Exercises the buyer-facing catalog queries: category filters, organic-only
// browsing, free-text search, and pagination.
#[tokio::main]
async fn main() -> Result<(), MarketError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Catalog Browsing Example ---");

  let market = Storefront::in_memory(PricingPolicy::default());
  let farms = [
    ("Green Valley Farms", "Portland, OR", 4.8f32),
    ("Berry Good Farms", "Salem, OR", 4.7),
    ("Happy Hen Farm", "Eugene, OR", 4.9),
  ];
  let listings = [
    ("Organic Fresh Broccoli", 399, ProductCategory::Vegetables, true, 0),
    ("Fresh Strawberries", 499, ProductCategory::Fruits, true, 1),
    ("Farm Fresh Eggs", 599, ProductCategory::Dairy, true, 2),
    ("Organic Carrots", 299, ProductCategory::Vegetables, true, 0),
    ("Winter Rye Flour", 449, ProductCategory::Grains, false, 1),
    ("Fresh Basil", 249, ProductCategory::Herbs, true, 2),
  ];
  for (name, price_cents, category, organic, farm_idx) in listings {
    let (farm_name, location, rating) = farms[farm_idx];
    market
      .catalog
      .create(NewProduct {
        name: name.to_string(),
        description: None,
        price_cents,
        quantity: 25,
        unit: "lb".to_string(),
        category,
        is_organic: organic,
        is_featured: false,
        farmer: FarmerRef {
          id: Uuid::new_v4(),
          name: farm_name.to_string(),
          location: location.to_string(),
          rating,
        },
      })
      .await?;
  }

  // Vegetables only
  let vegetables = market
    .catalog
    .list(&ProductFilter {
      category: Some(ProductCategory::Vegetables),
      ..ProductFilter::default()
    })
    .await?;
  info!("{} vegetable listings:", vegetables.items.len());
  for product in &vegetables.items {
    info!("  {} - ${:.2}/{}", product.name, product.price_cents as f64 / 100.0, product.unit);
  }
  assert_eq!(vegetables.items.len(), 2);

  // Free-text search matches names and farm names alike
  let fresh = market
    .catalog
    .list(&ProductFilter { search: Some("fresh".to_string()), ..ProductFilter::default() })
    .await?;
  assert_eq!(fresh.items.len(), 4);

  let berry_good = market
    .catalog
    .list(&ProductFilter { search: Some("berry good".to_string()), ..ProductFilter::default() })
    .await?;
  assert_eq!(berry_good.items.len(), 2);

  // Organic produce under $5
  let affordable_organic = market
    .catalog
    .list(&ProductFilter {
      organic_only: true,
      max_price_cents: Some(500),
      ..ProductFilter::default()
    })
    .await?;
  info!("{} organic listings under $5.00.", affordable_organic.items.len());
  assert_eq!(affordable_organic.items.len(), 4);

  // One fixed-size page of everything
  let page = market.catalog.list(&ProductFilter::default()).await?;
  info!(
    "Page {}/{} with {} of {} products.",
    page.page, page.total_pages, page.items.len(), page.total_items
  );
  assert_eq!(page.total_items, 6);
  assert_eq!(page.total_pages, 1);

  Ok(())
}
