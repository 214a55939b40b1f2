// farmgate/src/catalog.rs

//! `ProductCatalog`: single source of truth for product existence, pricing,
//! and the stock count. Stock only ever changes through `adjust_quantity`,
//! which the inventory ledger drives; farmer edits go through `update` and
//! cannot touch quantity.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};
use crate::model::{NewProduct, Page, Product, ProductCategory, ProductPatch};
use crate::repo::ProductRepository;

/// Stock level at or below which a product shows up in the low-stock view.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Listing filter. Defaults to: every active product, newest first, page 1.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
  pub category: Option<ProductCategory>,
  pub organic_only: bool,
  pub featured_only: bool,
  /// Case-insensitive substring match over name, description, and farmer name.
  pub search: Option<String>,
  pub max_price_cents: Option<i64>,
  pub include_archived: bool,
  /// 1-based page number; 0 is treated as 1.
  pub page: usize,
}

/// Seam through which the catalog asks whether a product is still referenced
/// by open (non-terminal) orders before archiving it. `OrderStore`
/// implements this.
#[async_trait]
pub trait ProductReferences: Send + Sync {
  async fn has_open_orders(&self, product_id: Uuid) -> MarketResult<bool>;
}

pub struct ProductCatalog {
  repo: Arc<dyn ProductRepository>,
}

impl ProductCatalog {
  pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
    ProductCatalog { repo }
  }

  #[instrument(name = "catalog::create", skip(self, new_product), fields(product_name = %new_product.name))]
  pub async fn create(&self, new_product: NewProduct) -> MarketResult<Product> {
    validate_name(&new_product.name)?;
    validate_unit(&new_product.unit)?;
    validate_price(new_product.price_cents)?;
    validate_rating(new_product.farmer.rating)?;

    let now = Utc::now();
    let product = Product {
      id: Uuid::new_v4(),
      name: new_product.name.trim().to_string(),
      description: new_product.description,
      price_cents: new_product.price_cents,
      quantity: new_product.quantity,
      unit: new_product.unit.trim().to_string(),
      category: new_product.category,
      is_organic: new_product.is_organic,
      is_featured: new_product.is_featured,
      farmer: new_product.farmer,
      archived: false,
      created_at: now,
      updated_at: now,
    };
    self.repo.insert(product.clone()).await?;
    info!(product_id = %product.id, "Product created.");
    Ok(product)
  }

  pub async fn get(&self, id: Uuid) -> MarketResult<Product> {
    self
      .repo
      .fetch(id)
      .await?
      .ok_or(MarketError::NotFound { entity: "product", id })
  }

  #[instrument(name = "catalog::update", skip(self, patch))]
  pub async fn update(&self, id: Uuid, patch: ProductPatch) -> MarketResult<Product> {
    if patch.is_empty() {
      return Err(MarketError::validation("product patch contains no fields"));
    }

    let mut product = self.get(id).await?;
    if product.archived {
      return Err(MarketError::conflict(format!("product {} is archived", id)));
    }

    if let Some(name) = patch.name {
      validate_name(&name)?;
      product.name = name.trim().to_string();
    }
    if let Some(description) = patch.description {
      product.description = Some(description);
    }
    if let Some(price_cents) = patch.price_cents {
      validate_price(price_cents)?;
      product.price_cents = price_cents;
    }
    if let Some(unit) = patch.unit {
      validate_unit(&unit)?;
      product.unit = unit.trim().to_string();
    }
    if let Some(category) = patch.category {
      product.category = category;
    }
    if let Some(is_organic) = patch.is_organic {
      product.is_organic = is_organic;
    }
    if let Some(is_featured) = patch.is_featured {
      product.is_featured = is_featured;
    }

    product.updated_at = Utc::now();
    self.repo.store(product.clone()).await?;
    debug!(product_id = %id, "Product updated.");
    Ok(product)
  }

  /// The only sanctioned way stock changes after creation. Positive delta
  /// restocks, negative delta consumes. The check against going negative and
  /// the write are one atomic repository operation.
  #[instrument(name = "catalog::adjust_quantity", skip(self))]
  pub async fn adjust_quantity(&self, id: Uuid, delta: i64) -> MarketResult<Product> {
    let product = self.repo.adjust_quantity(id, delta).await?;
    debug!(product_id = %id, delta, quantity = product.quantity, "Stock adjusted.");
    Ok(product)
  }

  /// Soft-deletes a product. Refused while any non-terminal order still
  /// references it; delivered and cancelled orders do not block archiving.
  #[instrument(name = "catalog::archive", skip(self, references))]
  pub async fn archive(&self, id: Uuid, references: &dyn ProductReferences) -> MarketResult<Product> {
    let mut product = self.get(id).await?;
    if product.archived {
      return Err(MarketError::conflict(format!("product {} is already archived", id)));
    }
    if references.has_open_orders(id).await? {
      return Err(MarketError::conflict(format!(
        "product {} still appears in open orders",
        id
      )));
    }

    product.archived = true;
    product.updated_at = Utc::now();
    self.repo.store(product.clone()).await?;
    info!(product_id = %id, "Product archived.");
    Ok(product)
  }

  pub async fn list(&self, filter: &ProductFilter) -> MarketResult<Page<Product>> {
    let needle = filter.search.as_ref().map(|s| s.trim().to_lowercase());
    let mut matches: Vec<Product> = self
      .repo
      .snapshot()
      .await?
      .into_iter()
      .filter(|product| {
        (filter.include_archived || !product.archived)
          && filter.category.map_or(true, |c| product.category == c)
          && (!filter.organic_only || product.is_organic)
          && (!filter.featured_only || product.is_featured)
          && filter.max_price_cents.map_or(true, |cap| product.price_cents <= cap)
          && needle.as_ref().map_or(true, |n| product_matches(product, n))
      })
      .collect();

    // Newest first; id ascending breaks created_at ties so pages are stable.
    matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    Ok(Page::slice(matches, filter.page))
  }

  pub async fn count_active(&self) -> MarketResult<usize> {
    Ok(self.repo.snapshot().await?.iter().filter(|p| !p.archived).count())
  }

  /// Active products with stock in 1..=threshold.
  pub async fn low_stock(&self, threshold: u32) -> MarketResult<Vec<Product>> {
    let mut rows: Vec<Product> = self
      .repo
      .snapshot()
      .await?
      .into_iter()
      .filter(|p| !p.archived && p.quantity > 0 && p.quantity <= threshold)
      .collect();
    rows.sort_by(|a, b| a.quantity.cmp(&b.quantity).then(a.id.cmp(&b.id)));
    Ok(rows)
  }

  pub async fn out_of_stock(&self) -> MarketResult<Vec<Product>> {
    let mut rows: Vec<Product> = self
      .repo
      .snapshot()
      .await?
      .into_iter()
      .filter(|p| !p.archived && p.is_out_of_stock())
      .collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(rows)
  }

  /// Tops up every active product strictly below `threshold` by `amount`,
  /// through the sanctioned adjust path. Returns the products restocked.
  #[instrument(name = "catalog::restock_all", skip(self))]
  pub async fn restock_all(&self, threshold: u32, amount: u32) -> MarketResult<Vec<Product>> {
    let below: Vec<Uuid> = self
      .repo
      .snapshot()
      .await?
      .into_iter()
      .filter(|p| !p.archived && p.quantity < threshold)
      .map(|p| p.id)
      .collect();

    let mut restocked = Vec::with_capacity(below.len());
    for id in below {
      restocked.push(self.adjust_quantity(id, i64::from(amount)).await?);
    }
    info!(count = restocked.len(), "Restocked products below threshold.");
    Ok(restocked)
  }
}

fn product_matches(product: &Product, needle: &str) -> bool {
  product.name.to_lowercase().contains(needle)
    || product
      .description
      .as_ref()
      .is_some_and(|d| d.to_lowercase().contains(needle))
    || product.farmer.name.to_lowercase().contains(needle)
}

fn validate_name(name: &str) -> MarketResult<()> {
  if name.trim().is_empty() {
    return Err(MarketError::validation("product name must not be empty"));
  }
  Ok(())
}

fn validate_unit(unit: &str) -> MarketResult<()> {
  if unit.trim().is_empty() {
    return Err(MarketError::validation("product unit must not be empty"));
  }
  Ok(())
}

fn validate_price(price_cents: i64) -> MarketResult<()> {
  if price_cents <= 0 {
    return Err(MarketError::validation(format!(
      "product price must be positive, got {} cents",
      price_cents
    )));
  }
  Ok(())
}

fn validate_rating(rating: f32) -> MarketResult<()> {
  if !(0.0..=5.0).contains(&rating) {
    return Err(MarketError::validation(format!(
      "farmer rating must be within 0.0..=5.0, got {}",
      rating
    )));
  }
  Ok(())
}
