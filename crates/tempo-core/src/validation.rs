//! # Validation Module
//!
//! Turns raw form text into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (form fields are plain text)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_price: text → finite, non-negative f64                      │
//! │  └── normalize_filter: "" → None, anything else kept as typed         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── Column types only (foreign keys are declared, not enforced)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Add and update both go through [`crate::NewProduct::from_fields`], so a
//! price that fails here never reaches the store on either path.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a price typed into the form.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must parse as a decimal number (`"299.99"`, `"5"`, `"1e3"`)
/// - NaN and infinity are rejected even though they parse
/// - Must be non-negative (zero is allowed)
///
/// ## Example
/// ```rust
/// use tempo_core::validation::parse_price;
///
/// assert_eq!(parse_price(" 299.99 ").unwrap(), 299.99);
/// assert!(parse_price("abc").is_err());
/// assert!(parse_price("").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    let trimmed = input.trim();

    let price: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field: "price".to_string(),
        input: input.to_string(),
    })?;

    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Normalizes one search filter.
///
/// Only an empty field counts as "not provided". Any other text, spaces
/// included, is searched for exactly as typed.
pub fn normalize_filter(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

/// Builds a `LIKE` pattern that matches `term` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped with `\`, so the
/// query must use `ESCAPE '\'`.
///
/// ```rust
/// use tempo_core::validation::like_contains_pattern;
///
/// assert_eq!(like_contains_pattern("gui"), "%gui%");
/// assert_eq!(like_contains_pattern("50%"), "%50\\%%");
/// ```
pub fn like_contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
