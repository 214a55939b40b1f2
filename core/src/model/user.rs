// farmgate/src/model/user.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of the buyer an order belongs to. Identity is supplied by the
/// caller (the surrounding session/auth layer); the domain treats it as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerRef {
  pub id: Uuid,
  pub name: String,
  pub email: String,
}
