// farmgate/src/model/product.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MarketError;

/// Closed set of product categories. Free-form category strings from form
/// input are funneled through `FromStr` and rejected at the domain boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
  Vegetables,
  Fruits,
  Dairy,
  Meat,
  Grains,
  Herbs,
  Other,
}

impl ProductCategory {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProductCategory::Vegetables => "vegetables",
      ProductCategory::Fruits => "fruits",
      ProductCategory::Dairy => "dairy",
      ProductCategory::Meat => "meat",
      ProductCategory::Grains => "grains",
      ProductCategory::Herbs => "herbs",
      ProductCategory::Other => "other",
    }
  }
}

impl fmt::Display for ProductCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ProductCategory {
  type Err = MarketError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "vegetables" => Ok(ProductCategory::Vegetables),
      "fruits" => Ok(ProductCategory::Fruits),
      "dairy" => Ok(ProductCategory::Dairy),
      "meat" => Ok(ProductCategory::Meat),
      "grains" => Ok(ProductCategory::Grains),
      "herbs" => Ok(ProductCategory::Herbs),
      "other" => Ok(ProductCategory::Other),
      unknown => Err(MarketError::validation(format!(
        "unrecognized product category '{}'",
        unknown
      ))),
    }
  }
}

/// Snapshot of the farmer who owns a product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerRef {
  pub id: Uuid,
  pub name: String,
  pub location: String,
  pub rating: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  /// Unit price in integer cents. Always > 0.
  pub price_cents: i64,
  /// Available stock. Only `InventoryLedger` -> `ProductCatalog::adjust_quantity`
  /// may change this after creation; the type keeps it non-negative.
  pub quantity: u32,
  /// Sale unit label, e.g. "lb", "dozen", "basket".
  pub unit: String,
  pub category: ProductCategory,
  pub is_organic: bool,
  pub is_featured: bool,
  pub farmer: FarmerRef,
  /// Soft-delete flag. Archived products stay on record because orders
  /// reference them; they are hidden from default listings.
  pub archived: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Product {
  pub fn is_out_of_stock(&self) -> bool {
    self.quantity == 0
  }
}

/// Input for `ProductCatalog::create`. Identifier and timestamps are
/// assigned by the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i64,
  pub quantity: u32,
  pub unit: String,
  pub category: ProductCategory,
  pub is_organic: bool,
  pub is_featured: bool,
  pub farmer: FarmerRef,
}

/// Partial update for `ProductCatalog::update`. Absent fields are left
/// untouched. Stock quantity is deliberately not patchable here; the ledger
/// path is the only sanctioned stock mutation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price_cents: Option<i64>,
  pub unit: Option<String>,
  pub category: Option<ProductCategory>,
  pub is_organic: Option<bool>,
  pub is_featured: Option<bool>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.description.is_none()
      && self.price_cents.is_none()
      && self.unit.is_none()
      && self.category.is_none()
      && self.is_organic.is_none()
      && self.is_featured.is_none()
  }
}
