// src/lib.rs

//! Farmgate: the order-lifecycle and inventory-consistency core of a
//! multi-role farmers-market storefront.
//!
//! Farmgate keeps a product catalog and an order book consistent with each
//! other under concurrent use:
//!  - A `ProductCatalog` owning product existence, pricing, and stock.
//!  - An `InventoryLedger` mediating every stock-affecting event, with
//!    atomic check-and-decrement reservations and once-only releases.
//!  - An `OrderStore` owning the order status state machine
//!    (pending -> processing -> shipped -> delivered, with cancellation
//!    from pending/processing) and all-or-nothing placement.
//!  - Read-only `Reports` aggregating totals for dashboards.
//!  - Async repository traits, so the in-memory backends used in tests can
//!    be swapped for persistent ones.

// Declare modules according to the planned structure
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod model;
pub mod orders;
pub mod repo;
pub mod reports;
pub mod storefront;

// --- Re-exports for the Public API ---

pub use crate::error::{MarketError, MarketResult};

pub use crate::model::{
  BuyerRef, Cart, CartItem, FarmerRef, NewProduct, Order, OrderItem, OrderStatus, Page,
  PaymentStatus, Product, ProductCategory, ProductPatch, DEFAULT_PAGE_SIZE,
};

pub use crate::catalog::{ProductCatalog, ProductFilter, ProductReferences, LOW_STOCK_THRESHOLD};
pub use crate::inventory::InventoryLedger;
pub use crate::orders::{OrderFilter, OrderStore, PricingPolicy};
pub use crate::reports::{InventorySummary, ProductSales, Reports, SalesSummary, StatusCount};

pub use crate::repo::{InMemoryOrders, InMemoryProducts, OrderRepository, ProductRepository};

// The one-call composition of the services above
pub use crate::storefront::Storefront;
