// demos/storefront_app/src/config.rs

use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  /// Flat delivery fee added to every order total, in cents.
  pub delivery_fee_cents: i64,

  /// Whether to seed the catalog with the demo produce on startup.
  pub seed_catalog: bool,

  /// Stock level at or below which products show up in the low-stock report.
  pub low_stock_threshold: u32,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let delivery_fee_cents = env::var("DELIVERY_FEE_CENTS")
      .unwrap_or_else(|_| "599".to_string())
      .parse::<i64>()
      .map_err(|e| anyhow!("Invalid DELIVERY_FEE_CENTS: {}", e))?;

    let seed_catalog = env::var("SEED_CATALOG")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| anyhow!("Invalid SEED_CATALOG value: {}", e))?;

    let low_stock_threshold = env::var("LOW_STOCK_THRESHOLD")
      .unwrap_or_else(|_| farmgate::LOW_STOCK_THRESHOLD.to_string())
      .parse::<u32>()
      .map_err(|e| anyhow!("Invalid LOW_STOCK_THRESHOLD: {}", e))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      delivery_fee_cents,
      seed_catalog,
      low_stock_threshold,
    })
  }
}
