//! Error taxonomy for the pricing pipeline
//!
//! Three kinds of failure, all deterministic for a given rate card and
//! request:
//! - `Configuration`: the rate card itself is malformed and the table
//!   cannot be built
//! - `RateNotFound`: the table has no rate for a benefit option / age
//! - `Validation`: the request shape is invalid (correctable by the user)

use thiserror::Error;

/// Any failure raised while building the rate table or pricing a request.
///
/// Display text is written as end-user domain language; the calling layer
/// surfaces it verbatim or maps `Validation` to per-field form feedback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Malformed rate card input at construction time. Fatal: a broken
    /// table must never start serving quotes.
    #[error("invalid rate card: {0}")]
    Configuration(String),

    /// No rate on the card for this benefit option and age, either because
    /// the option is missing entirely or because no age band covers the age.
    #[error("no rate available for \"{benefit_option}\" at age {age}")]
    RateNotFound { benefit_option: String, age: u8 },

    /// Invalid request shape; the message is ready for direct display.
    #[error("{0}")]
    Validation(String),
}

impl PricingError {
    /// Build a `RateNotFound` for the given option key and age.
    pub fn rate_not_found(benefit_option: impl Into<String>, age: u8) -> Self {
        PricingError::RateNotFound {
            benefit_option: benefit_option.into(),
            age,
        }
    }
}
