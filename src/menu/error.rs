//! Error types for the menu catalog.

use thiserror::Error;

/// Errors that can occur while building or reading the menu.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The category tag is not one of `appetizer`, `main` or `dessert`.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A dish was given a negative or non-finite price.
    #[error("Invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },

    /// The selected row does not exist in the given tab.
    #[error("No dish at row {row} of {category}")]
    NoSuchSelection { category: String, row: usize },
}
