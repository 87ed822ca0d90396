//! Premium calculation pipeline and quote assembly

mod engine;
mod params;
mod result;

pub use engine::{round_to_cents, QuoteEngine};
pub use params::CalculationParams;
pub use result::{
    CalculationResult, ExtendedFamilyLine, ImmediateFamilyLine, MainMemberLine, PremiumBreakdown,
};
