//! # Repository Module
//!
//! Database repository implementations for Tempo.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Shell action                                                          │
//! │       │                                                                 │
//! │       │  store.search(&filter)                                         │
//! │       ▼                                                                 │
//! │  ProductStore (trait)  ◄── the shell only sees this                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list(&self, limit)                                                │
//! │  ├── add(&self, product)                                               │
//! │  ├── update(&self, id, product)                                        │
//! │  ├── delete(&self, id)                                                 │
//! │  └── search(&self, filter)                                             │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search

use std::future::Future;

use tempo_core::{MutationOutcome, NewProduct, Product, SearchFilter};

use crate::error::DbResult;

pub mod product;

/// The product operations the shell depends on.
///
/// Every mutating call is a single statement committed before it returns.
pub trait ProductStore {
    /// Up to `limit` rows in storage order, unfiltered.
    fn list(&self, limit: u32) -> impl Future<Output = DbResult<Vec<Product>>> + Send;

    /// Inserts a row and returns its new id.
    fn add(&self, product: &NewProduct) -> impl Future<Output = DbResult<i64>> + Send;

    /// Overwrites every mutable field of row `id`.
    fn update(
        &self,
        id: i64,
        product: &NewProduct,
    ) -> impl Future<Output = DbResult<MutationOutcome>> + Send;

    /// Removes row `id`.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<MutationOutcome>> + Send;

    /// Rows matching every provided substring filter.
    fn search(&self, filter: &SearchFilter)
        -> impl Future<Output = DbResult<Vec<Product>>> + Send;
}
