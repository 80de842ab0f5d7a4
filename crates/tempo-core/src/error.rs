//! # Error Types
//!
//! Domain-specific error types for tempo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tempo-core errors (this file)                                         │
//! │  ├── CoreError        - Rejected requests (empty search, bad input)    │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  tempo-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Shell errors (in app)                                                 │
//! │  └── ApiError         - What the notice popup shows                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notice                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Requests rejected before they reach the store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Search was attempted with both the name and category filters blank.
    ///
    /// Rejected so a blank search never degrades into "return everything".
    #[error("Enter Product Name or Category to search")]
    EmptyQuery,

    /// Validation error (wraps ValidationError).
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for form fields.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Text could not be parsed as a number.
    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: String, input: String },

    /// Parsed, but NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
