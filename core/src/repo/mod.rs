// farmgate/src/repo/mod.rs

//! Repository seam between the domain services and whatever actually holds
//! the rows. The services only see these traits, so the in-memory
//! implementations used by tests and demos can be swapped for a persistent
//! backend without touching the domain logic.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::MarketResult;
use crate::model::{Order, Product};

pub use memory::{InMemoryOrders, InMemoryProducts};

#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Inserts a new row. Fails with `Conflict` if the id is already taken.
  async fn insert(&self, product: Product) -> MarketResult<()>;

  async fn fetch(&self, id: Uuid) -> MarketResult<Option<Product>>;

  /// Replaces an existing row. Fails with `NotFound` if the id is unknown.
  async fn store(&self, product: Product) -> MarketResult<()>;

  /// Applies `delta` to the stock count as a single guarded update: the
  /// check `quantity + delta >= 0` and the write MUST happen in one critical
  /// section (one conditional UPDATE in a SQL backend), so that two
  /// concurrent consumers of the last unit cannot both succeed. Returns the
  /// updated row, or `InsufficientStock` when the guard rejects the delta.
  async fn adjust_quantity(&self, id: Uuid, delta: i64) -> MarketResult<Product>;

  /// A point-in-time copy of every row, for listings and reports.
  async fn snapshot(&self) -> MarketResult<Vec<Product>>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
  /// Inserts a new row. Fails with `Conflict` if the id is already taken.
  async fn insert(&self, order: Order) -> MarketResult<()>;

  async fn fetch(&self, id: Uuid) -> MarketResult<Option<Order>>;

  /// Replaces an existing row. Fails with `NotFound` if the id is unknown.
  async fn store(&self, order: Order) -> MarketResult<()>;

  /// A point-in-time copy of every row, for listings and reports. Orders
  /// are retained indefinitely, so this is the audit trail.
  async fn snapshot(&self) -> MarketResult<Vec<Order>>;
}
