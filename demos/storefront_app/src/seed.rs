// demos/storefront_app/src/seed.rs

//! Seeds the catalog with the demo produce listings.

use farmgate::{FarmerRef, MarketResult, NewProduct, Product, ProductCategory, Storefront};
use uuid::Uuid;

fn farmer(name: &str, location: &str, rating: f32) -> FarmerRef {
  FarmerRef {
    id: Uuid::new_v4(),
    name: name.to_string(),
    location: location.to_string(),
    rating,
  }
}

pub async fn seed_catalog(market: &Storefront) -> MarketResult<Vec<Product>> {
  let green_valley = farmer("Green Valley Farms", "Portland, OR", 4.8);
  let berry_good = farmer("Berry Good Farms", "Salem, OR", 4.7);
  let happy_hen = farmer("Happy Hen Farm", "Eugene, OR", 4.9);
  let green_pastures = farmer("Green Pastures Ranch", "Bend, OR", 4.6);
  let mountain_goat = farmer("Mountain Goat Dairy", "Ashland, OR", 4.5);

  let listings = vec![
    NewProduct {
      name: "Organic Fresh Broccoli".to_string(),
      description: Some(
        "Locally grown organic broccoli harvested within the last 24 hours. Rich in vitamins and antioxidants."
          .to_string(),
      ),
      price_cents: 399,
      quantity: 50,
      unit: "lb".to_string(),
      category: ProductCategory::Vegetables,
      is_organic: true,
      is_featured: true,
      farmer: green_valley.clone(),
    },
    NewProduct {
      name: "Fresh Strawberries".to_string(),
      description: Some(
        "Sweet and juicy strawberries picked at peak ripeness. Perfect for desserts or eating fresh.".to_string(),
      ),
      price_cents: 499,
      quantity: 30,
      unit: "basket".to_string(),
      category: ProductCategory::Fruits,
      is_organic: true,
      is_featured: true,
      farmer: berry_good,
    },
    NewProduct {
      name: "Farm Fresh Eggs".to_string(),
      description: Some(
        "Free-range eggs from pasture-raised hens. Rich yellow yolks and superior flavor.".to_string(),
      ),
      price_cents: 599,
      quantity: 40,
      unit: "dozen".to_string(),
      category: ProductCategory::Dairy,
      is_organic: true,
      is_featured: false,
      farmer: happy_hen,
    },
    NewProduct {
      name: "Grass-fed Ground Beef".to_string(),
      description: Some(
        "Premium ground beef from grass-fed, pasture-raised cattle. No hormones or antibiotics.".to_string(),
      ),
      price_cents: 799,
      quantity: 25,
      unit: "lb".to_string(),
      category: ProductCategory::Meat,
      is_organic: false,
      is_featured: true,
      farmer: green_pastures,
    },
    NewProduct {
      name: "Organic Carrots".to_string(),
      description: Some("Sweet and crunchy organic carrots. Great for snacking, cooking, or juicing.".to_string()),
      price_cents: 299,
      quantity: 60,
      unit: "lb".to_string(),
      category: ProductCategory::Vegetables,
      is_organic: true,
      is_featured: false,
      farmer: green_valley,
    },
    NewProduct {
      name: "Artisanal Goat Cheese".to_string(),
      description: Some("Creamy, tangy goat cheese made in small batches from our own goat milk.".to_string()),
      price_cents: 699,
      quantity: 20,
      unit: "8 oz".to_string(),
      category: ProductCategory::Dairy,
      is_organic: false,
      is_featured: true,
      farmer: mountain_goat,
    },
  ];

  let mut products = Vec::with_capacity(listings.len());
  for listing in listings {
    products.push(market.catalog.create(listing).await?);
  }
  tracing::info!("Seeded catalog with {} products.", products.len());
  Ok(products)
}
