//! Error types for BudgetFit

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for BudgetFit operations
#[derive(Debug, Error)]
pub enum BudgetFitError {
    /// Price interval with `min_total` above `max_total`
    #[error("Invalid price interval: min_total {min} exceeds max_total {max}")]
    InvalidInterval { min: Decimal, max: Decimal },

    /// Quantity bound with `min` above `max`
    #[error("Invalid quantity bound: min {min} exceeds max {max}")]
    InvalidBound { min: u32, max: u32 },

    /// Catalog item with a negative unit price
    #[error("Negative unit price {price} for item {name:?}")]
    NegativePrice { name: String, price: Decimal },

    /// Constraint refers to an item name not present in the catalog
    #[error("Unknown item: {0:?}")]
    UnknownItem(String),

    /// Constraint refers to an item index past the end of the catalog
    #[error("Item index {index} out of range for catalog of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation for current search state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for BudgetFit operations
pub type Result<T> = std::result::Result<T, BudgetFitError>;
