// farmgate/src/error.rs
use thiserror::Error;
use uuid::Uuid;

use crate::model::OrderStatus;

#[derive(Debug, Error)]
pub enum MarketError {
  #[error("Validation failed: {message}")]
  Validation { message: String },

  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: Uuid },

  #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
  InsufficientStock {
    product_id: Uuid,
    requested: u32,
    available: u32,
  },

  #[error("Illegal status transition {from} -> {to} for order {order_id}")]
  InvalidTransition {
    order_id: Uuid,
    from: OrderStatus,
    to: OrderStatus,
  },

  #[error("Conflict: {message}")]
  Conflict { message: String },

  // Repository implementations surface backend failures through this variant
  // so callers can distinguish infrastructure faults from domain rejections.
  #[error("Storage backend error: {source}")]
  Storage {
    #[source]
    source: anyhow::Error,
  },
}

impl MarketError {
  /// Shorthand for `MarketError::Validation` from anything stringly.
  pub fn validation(message: impl Into<String>) -> Self {
    MarketError::Validation { message: message.into() }
  }

  /// Shorthand for `MarketError::Conflict`.
  pub fn conflict(message: impl Into<String>) -> Self {
    MarketError::Conflict { message: message.into() }
  }
}

pub type MarketResult<T, E = MarketError> = std::result::Result<T, E>;
