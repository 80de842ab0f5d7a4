//! # Shell Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tempo                                  │
//! │                                                                         │
//! │  Key press (F2 Add)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<Notice, ApiError>                                        │  │
//! │  │         │                                                        │  │
//! │  │  No row selected?   ── ApiError::selection(..) ──────┐           │  │
//! │  │  Bad price?         ── CoreError::Validation ────────┤           │  │
//! │  │  Blank search?      ── CoreError::EmptyQuery ────────┤           │  │
//! │  │  Unknown id?        ── MutationOutcome::NotFound ────┤           │  │
//! │  │  SQLite failure?    ── DbError ──────────────────────┤           │  │
//! │  │         │                                            ▼           │  │
//! │  │  Success ──► Notice::info              ApiError ──► Notice       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The notice popup shows `title` + `message`; the level picks color.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error path leaves the form fields and the results table as they
//! were before the command ran.

use serde::Serialize;
use tempo_core::CoreError;
use tempo_db::DbError;

use crate::state::{Notice, NoticeLevel};

/// Error returned from shell commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input could not be parsed
    ValidationError,

    /// Update/delete with no row selected
    SelectionError,

    /// Search with both filters blank
    EmptyQuery,

    /// The selected id no longer exists
    NotFound,

    /// Database operation failed
    DatabaseError,
}

impl ErrorCode {
    /// Popup title for this code.
    pub fn title(self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Invalid Input",
            ErrorCode::SelectionError => "Selection Error",
            ErrorCode::EmptyQuery => "Search Error",
            ErrorCode::NotFound => "Not Found",
            ErrorCode::DatabaseError => "Database Error",
        }
    }

    /// Popup level for this code.
    pub fn level(self) -> NoticeLevel {
        match self {
            ErrorCode::DatabaseError => NoticeLevel::Error,
            _ => NoticeLevel::Warning,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a selection error.
    pub fn selection(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::SelectionError, message)
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Turns the error into the popup the user sees.
    pub fn into_notice(self) -> Notice {
        Notice::new(self.code.level(), self.code.title(), self.message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyQuery => ApiError::new(ErrorCode::EmptyQuery, err.to_string()),
            CoreError::Validation(_) => ApiError::new(ErrorCode::ValidationError, err.to_string()),
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, "Database operation failed");
        ApiError::new(ErrorCode::DatabaseError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
