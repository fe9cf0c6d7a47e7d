//! Error types for Treasury Core

use thiserror::Error;

/// Result type alias using TreasuryError
pub type Result<T> = std::result::Result<T, TreasuryError>;

/// Top-level error type for all Treasury operations
#[derive(Debug, Error)]
pub enum TreasuryError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while configuring a parser.
///
/// Segmentation itself never fails; only a custom profile with a bad pattern does.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid heading pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unknown source format: {0}")]
    UnknownFormat(String),
}

/// Problems found in a catalog or its build manifest
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate book id: {0}")]
    DuplicateBook(String),

    #[error("Duplicate plan id: {0}")]
    DuplicatePlan(String),

    #[error("Plan {plan_id} references unknown book {book_id}")]
    UnknownBook { plan_id: String, book_id: String },

    #[error("Plan {plan_id} schedules day {day} outside 1..={duration}")]
    DayOutOfRange {
        plan_id: String,
        day: u32,
        duration: u32,
    },

    #[error("Book {0} has no readable chapters")]
    Unreadable(String),

    #[error("Failed to read source for {book_id}: {reason}")]
    SourceUnavailable { book_id: String, reason: String },
}

impl CatalogError {
    /// Whether this problem only degrades the catalog rather than breaking it
    pub fn is_warning(&self) -> bool {
        matches!(self, CatalogError::Unreadable(_))
    }
}

/// Errors that occur in the user-data store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Corrupt collection {key}: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Backend error: {0}")]
    BackendError(String),
}
