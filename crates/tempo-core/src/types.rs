//! # Domain Types
//!
//! Core domain types used throughout Tempo.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  SearchFilter   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  name           │   │  name?          │       │
//! │  │  name           │   │  category       │   │  category?      │       │
//! │  │  category       │   │  price (parsed) │   │  (≥ 1 present)  │       │
//! │  │  price          │   │  description    │   └─────────────────┘       │
//! │  │  description    │   └─────────────────┘                              │
//! │  └─────────────────┘   ┌─────────────────┐                              │
//! │                        │ MutationOutcome │                              │
//! │                        │  Applied        │                              │
//! │                        │  NotFound       │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `id` is assigned by the store (`AUTOINCREMENT`) and never reused within a
//! database file, so it is safe to hold on to across reloads.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::{normalize_filter, parse_price};

// =============================================================================
// Product
// =============================================================================

/// A product row as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Surrogate key, assigned on insert.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "product_id"))]
    pub id: i64,

    /// Display name. Not unique.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "product_name"))]
    pub name: String,

    pub category: String,

    pub price: f64,

    pub description: String,
}

impl Product {
    /// Returns the mutable fields of this row.
    pub fn fields(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            description: self.description.clone(),
        }
    }

    /// Price formatted for the results table.
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

// =============================================================================
// New Product
// =============================================================================

/// The mutable fields of a product, already validated.
///
/// Both add and update take this type, so they share one validation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
}

impl NewProduct {
    /// Builds a product from raw form text.
    ///
    /// Text fields are taken verbatim. The price goes through
    /// [`parse_price`].
    ///
    /// ## Example
    /// ```rust
    /// use tempo_core::NewProduct;
    ///
    /// assert!(NewProduct::from_fields("Guitar", "Strings", "abc", "").is_err());
    /// ```
    pub fn from_fields(
        name: &str,
        category: &str,
        price: &str,
        description: &str,
    ) -> CoreResult<Self> {
        let price = parse_price(price)?;

        Ok(NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: description.to_string(),
        })
    }
}

// =============================================================================
// Search Filter
// =============================================================================

/// Substring filters for a product search.
///
/// At least one of `name` / `category` is always present; an all-empty
/// filter cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    name: Option<String>,
    category: Option<String>,
}

impl SearchFilter {
    /// Builds a filter from the name and category fields.
    ///
    /// ## Returns
    /// * `Ok(SearchFilter)` - at least one field was non-empty; terms are
    ///   kept exactly as typed
    /// * `Err(CoreError::EmptyQuery)` - both were empty
    pub fn new(name: &str, category: &str) -> CoreResult<Self> {
        let name = normalize_filter(name);
        let category = normalize_filter(category);

        if name.is_none() && category.is_none() {
            return Err(CoreError::EmptyQuery);
        }

        Ok(SearchFilter { name, category })
    }

    /// Name substring, if provided.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Category substring, if provided.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

// =============================================================================
// Mutation Outcome
// =============================================================================

/// What an update or delete did.
///
/// An id that matches no row is not a failure, but callers must be able to
/// tell it apart from a real change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    /// Exactly one row was changed.
    Applied,
    /// No row has this id.
    NotFound,
}

impl MutationOutcome {
    /// Maps an affected-row count to an outcome.
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            MutationOutcome::NotFound
        } else {
            MutationOutcome::Applied
        }
    }
}
