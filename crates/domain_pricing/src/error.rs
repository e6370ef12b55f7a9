//! Pricing domain errors

use thiserror::Error;

/// Errors that can occur in the pricing domain
///
/// The reconciliation computation itself is total; these errors arise only
/// while constructing the value objects it consumes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A category name could not be parsed
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The same category appeared twice in one breakdown
    #[error("Duplicate category in breakdown: {0}")]
    DuplicateCategory(String),

    /// A price was set in a different currency than the list's
    #[error("Currency mismatch: price list is {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    /// A negative unit price was supplied
    #[error("Negative unit price for {0}")]
    NegativePrice(String),
}
