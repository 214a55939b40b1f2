// tests/catalog_tests.rs
mod common; // Reference the common module

use std::str::FromStr;

use common::*;
use farmgate::{MarketError, ProductCategory, ProductFilter, ProductPatch, DEFAULT_PAGE_SIZE};
use uuid::Uuid;

#[tokio::test]
async fn test_create_assigns_identity_and_keeps_fields() {
  setup_tracing();
  let market = storefront();

  let product = market
    .catalog
    .create(new_product("Organic Fresh Broccoli", 399, 50, ProductCategory::Vegetables))
    .await
    .unwrap();

  assert_eq!(product.name, "Organic Fresh Broccoli");
  assert_eq!(product.price_cents, 399);
  assert_eq!(product.quantity, 50);
  assert_eq!(product.category, ProductCategory::Vegetables);
  assert!(!product.archived);
  assert_eq!(product.created_at, product.updated_at);

  let fetched = market.catalog.get(product.id).await.unwrap();
  assert_eq!(fetched.id, product.id);
}

#[tokio::test]
async fn test_create_rejects_non_positive_price() {
  setup_tracing();
  let market = storefront();

  for bad_price in [0, -399] {
    let result = market
      .catalog
      .create(new_product("Broccoli", bad_price, 10, ProductCategory::Vegetables))
      .await;
    assert!(matches!(result, Err(MarketError::Validation { .. })));
  }
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
  setup_tracing();
  let market = storefront();

  let result = market
    .catalog
    .create(new_product("   ", 399, 10, ProductCategory::Vegetables))
    .await;
  assert!(matches!(result, Err(MarketError::Validation { .. })));
}

#[tokio::test]
async fn test_category_parsing_rejects_free_strings() {
  assert_eq!(ProductCategory::from_str("Vegetables").unwrap(), ProductCategory::Vegetables);
  assert_eq!(ProductCategory::from_str(" herbs ").unwrap(), ProductCategory::Herbs);
  assert!(matches!(
    ProductCategory::from_str("fresh stuff"),
    Err(MarketError::Validation { .. })
  ));
}

#[tokio::test]
async fn test_update_patches_fields_and_bumps_updated_at() {
  setup_tracing();
  let market = storefront();
  let product = add_product(&market, "Carrots", 299, 60).await;

  let updated = market
    .catalog
    .update(
      product.id,
      ProductPatch {
        price_cents: Some(349),
        is_featured: Some(true),
        ..ProductPatch::default()
      },
    )
    .await
    .unwrap();

  assert_eq!(updated.price_cents, 349);
  assert!(updated.is_featured);
  assert_eq!(updated.quantity, 60); // Stock is untouchable through update
  assert!(updated.updated_at >= product.updated_at);
}

#[tokio::test]
async fn test_update_rejects_empty_patch_and_unknown_id() {
  setup_tracing();
  let market = storefront();
  let product = add_product(&market, "Carrots", 299, 60).await;

  let empty = market.catalog.update(product.id, ProductPatch::default()).await;
  assert!(matches!(empty, Err(MarketError::Validation { .. })));

  let unknown = market
    .catalog
    .update(Uuid::new_v4(), ProductPatch { price_cents: Some(100), ..ProductPatch::default() })
    .await;
  assert!(matches!(unknown, Err(MarketError::NotFound { entity: "product", .. })));
}

#[tokio::test]
async fn test_archive_hides_product_and_blocks_edits() {
  setup_tracing();
  let market = storefront();
  let product = add_product(&market, "Carrots", 299, 60).await;

  let archived = market.archive_product(product.id).await.unwrap();
  assert!(archived.archived);

  // Hidden from the default listing, visible when asked for explicitly.
  let default_page = market.catalog.list(&ProductFilter::default()).await.unwrap();
  assert!(default_page.items.is_empty());
  let with_archived = market
    .catalog
    .list(&ProductFilter { include_archived: true, ..ProductFilter::default() })
    .await
    .unwrap();
  assert_eq!(with_archived.items.len(), 1);

  // Archived products reject edits and a second archive.
  let edit = market
    .catalog
    .update(product.id, ProductPatch { price_cents: Some(100), ..ProductPatch::default() })
    .await;
  assert!(matches!(edit, Err(MarketError::Conflict { .. })));
  let again = market.archive_product(product.id).await;
  assert!(matches!(again, Err(MarketError::Conflict { .. })));
}

#[tokio::test]
async fn test_archive_blocked_by_open_order_until_terminal() {
  setup_tracing();
  let market = storefront();
  let product = add_product(&market, "Carrots", 299, 60).await;

  let order = market
    .orders
    .place_order(buyer("John Doe", "john@example.com"), &[line(&product, 2)], "12 Elm St", "card")
    .await
    .unwrap();

  let blocked = market.archive_product(product.id).await;
  assert!(matches!(blocked, Err(MarketError::Conflict { .. })));

  // Walk the order to a terminal state; archiving is then allowed.
  market.orders.update_status(order.id, farmgate::OrderStatus::Processing).await.unwrap();
  market.orders.update_status(order.id, farmgate::OrderStatus::Shipped).await.unwrap();
  market.orders.update_status(order.id, farmgate::OrderStatus::Delivered).await.unwrap();

  let archived = market.archive_product(product.id).await.unwrap();
  assert!(archived.archived);
}

#[tokio::test]
async fn test_list_filters_by_category_search_and_price() {
  setup_tracing();
  let market = storefront();

  let mut broccoli = new_product("Organic Fresh Broccoli", 399, 50, ProductCategory::Vegetables);
  broccoli.is_organic = true;
  market.catalog.create(broccoli).await.unwrap();

  let mut strawberries = new_product("Fresh Strawberries", 499, 30, ProductCategory::Fruits);
  strawberries.farmer.name = "Berry Good Farms".to_string();
  market.catalog.create(strawberries).await.unwrap();

  market
    .catalog
    .create(new_product("Grass-fed Ground Beef", 799, 25, ProductCategory::Meat))
    .await
    .unwrap();

  let fruits = market
    .catalog
    .list(&ProductFilter { category: Some(ProductCategory::Fruits), ..ProductFilter::default() })
    .await
    .unwrap();
  assert_eq!(fruits.items.len(), 1);
  assert_eq!(fruits.items[0].name, "Fresh Strawberries");

  let organic = market
    .catalog
    .list(&ProductFilter { organic_only: true, ..ProductFilter::default() })
    .await
    .unwrap();
  assert_eq!(organic.items.len(), 1);
  assert_eq!(organic.items[0].name, "Organic Fresh Broccoli");

  // Search also matches the farmer name, case-insensitively.
  let berry = market
    .catalog
    .list(&ProductFilter { search: Some("BERRY GOOD".to_string()), ..ProductFilter::default() })
    .await
    .unwrap();
  assert_eq!(berry.items.len(), 1);

  let affordable = market
    .catalog
    .list(&ProductFilter { max_price_cents: Some(500), ..ProductFilter::default() })
    .await
    .unwrap();
  assert_eq!(affordable.items.len(), 2);
}

#[tokio::test]
async fn test_list_pagination_is_deterministic() {
  setup_tracing();
  let market = storefront();
  for i in 0..25 {
    add_product(&market, &format!("Product {:02}", i), 100 + i, 10).await;
  }

  let mut seen = std::collections::HashSet::new();
  for page_no in 1..=3 {
    let page = market
      .catalog
      .list(&ProductFilter { page: page_no, ..ProductFilter::default() })
      .await
      .unwrap();
    assert_eq!(page.total_items, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(page.items.len(), if page_no == 3 { 5 } else { 10 });
    for product in &page.items {
      assert!(seen.insert(product.id), "no product may appear on two pages");
    }
  }
  assert_eq!(seen.len(), 25);

  let past_the_end = market
    .catalog
    .list(&ProductFilter { page: 9, ..ProductFilter::default() })
    .await
    .unwrap();
  assert!(past_the_end.items.is_empty());
}

#[tokio::test]
async fn test_low_stock_and_restock_views() {
  setup_tracing();
  let market = storefront();
  let depleted = add_product(&market, "Artisanal Goat Cheese", 699, 0).await;
  let scarce = add_product(&market, "Farm Fresh Eggs", 599, 3).await;
  let nearly = add_product(&market, "Fresh Strawberries", 499, 9).await;
  let plenty = add_product(&market, "Organic Carrots", 299, 60).await;

  let low = market.catalog.low_stock(5).await.unwrap();
  assert_eq!(low.len(), 1);
  assert_eq!(low[0].id, scarce.id); // zero-stock rows are out-of-stock, not low

  let out = market.catalog.out_of_stock().await.unwrap();
  assert_eq!(out.len(), 1);
  assert_eq!(out[0].id, depleted.id);

  // Everything strictly below 10 is topped up by 50; the rest is untouched.
  let restocked = market.catalog.restock_all(10, 50).await.unwrap();
  assert_eq!(restocked.len(), 3);
  assert_eq!(market.catalog.get(depleted.id).await.unwrap().quantity, 50);
  assert_eq!(market.catalog.get(scarce.id).await.unwrap().quantity, 53);
  assert_eq!(market.catalog.get(nearly.id).await.unwrap().quantity, 59);
  assert_eq!(market.catalog.get(plenty.id).await.unwrap().quantity, 60);
}
