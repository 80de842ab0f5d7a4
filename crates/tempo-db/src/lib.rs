//! # tempo-db: Database Layer for Tempo
//!
//! This crate owns the SQLite file, its schema and every query the
//! application runs. It uses sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tempo Data Flow                                  │
//! │                                                                         │
//! │  Shell action (Add / Update / Delete / Search)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tempo-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_schema   │  │   │
//! │  │   │ StartupMode   │    │ ProductStore  │    │ 002_indexes  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./music_store_management.db                                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Declared-only tables
//!
//! `customers`, `orders`, `inventory` and `suppliers` exist in the schema
//! but no repository reads or writes them. A repository for one of them
//! should follow [`ProductRepository`]: a `*Store` trait with
//! list/add/update/delete/search, `MutationOutcome` for unmatched ids.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation, startup mode, diagnostics
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tempo_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::new("music_store_management.db")).await?;
//! let rows = db.products().list(50).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, SchemaObject, StartupMode};

pub use repository::product::ProductRepository;
pub use repository::ProductStore;
