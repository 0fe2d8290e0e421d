//! Error types for the inventory tracker.

use thiserror::Error;

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Errors that can occur while managing the inventory.
///
/// Business-rule failures (`UnsupportedCategory`, `EmptyName`,
/// `ProductNotFound`, `InsufficientStock`, `StockOverflow`,
/// `AmountOverflow`) never leave the inventory in a modified state.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error while loading a catalog
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Category name outside the supported set
    #[error("Unknown product type: {0}")]
    UnsupportedCategory(String),

    /// No product matches the requested name
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Sale would take stock below zero
    #[error("Not enough stock for {name}. Requested: {requested}, Available: {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// Restock would exceed the representable quantity
    #[error("Cannot add {amount} items to {name}: stock limit exceeded")]
    StockOverflow { name: String, amount: u32 },

    /// Price arithmetic exceeded the representable range
    #[error("Amount too large while computing {0}")]
    AmountOverflow(String),

    /// Product name is blank
    #[error("Product name must not be empty")]
    EmptyName,

    /// Invalid catalog record
    #[error("Invalid catalog entry at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Console input stream was closed
    #[error("Input stream closed")]
    EndOfInput,
}
