//! Funeral Pricing - Rate-table driven premium engine for funeral cover products
//!
//! This library provides:
//! - Rate card ingestion (embedded standard card or CSV export) into an
//!   immutable age-banded rate table
//! - Family composition analysis with business rule validation
//! - Benefit option resolution across the seven cover tiers
//! - Monthly premium calculation with a full per-life breakdown
//! - Batch quoting against a shared rate table

pub mod error;
pub mod family;
pub mod pricing;
pub mod rates;

// Re-export commonly used types
pub use error::PricingError;
pub use family::{BenefitOption, FamilyComposition, FamilyMember, Relationship};
pub use pricing::{CalculationParams, CalculationResult, QuoteEngine};
pub use rates::{RateEntry, RateTable};
