//! # tempo-core: Domain Types for Tempo
//!
//! This crate holds the types every other layer agrees on, plus the
//! validation that turns raw form text into something the store accepts.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tempo Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal Shell (apps/desktop)                   │   │
//! │  │    Form ──► Add / Update / Delete / Search ──► Results table    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tempo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐                 │   │
//! │  │   │   types   │  │ validation │  │   error   │                 │   │
//! │  │   │  Product  │  │ parse_price│  │ CoreError │                 │   │
//! │  │   │NewProduct │  │ filters    │  │Validation │                 │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tempo-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use tempo_core::{NewProduct, SearchFilter};
//!
//! let product = NewProduct::from_fields("Guitar", "Strings", "299.99", "6-string acoustic")
//!     .unwrap();
//! assert_eq!(product.price, 299.99);
//!
//! // A search with no filters is rejected up front
//! assert!(SearchFilter::new("", "").is_err());
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

/// Rows shown by the unfiltered listing.
pub const DEFAULT_LIST_LIMIT: u32 = 50;
