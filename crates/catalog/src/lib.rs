//! `stockroom-catalog` — the product catalog and its backing store.
//!
//! The catalog is the full set of tracked products and their current
//! balances, persisted as one flat table and always read/written as a unit.

pub mod product;
pub mod store;

pub use product::{Product, UnitOfMeasure, UnknownUnit};
pub use store::{CatalogError, CatalogStore, NewProduct};
