//! Calculation result and premium breakdown presented to the quote screen

use serde::{Deserialize, Serialize};

use crate::family::{BenefitOption, Relationship};

/// The main member's line in the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainMemberLine {
    pub age: u8,
    pub cover_amount: f64,
    pub premium: f64,
}

/// A spouse or child line in the breakdown
///
/// Immediate family is covered under the main policy at no incremental
/// individual cost, so `premium` is always zero; the shared cover amount is
/// echoed for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImmediateFamilyLine {
    pub relationship: Relationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    pub cover_amount: f64,
    pub premium: f64,
}

/// An individually priced extended family line in the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtendedFamilyLine {
    pub age: u8,
    pub cover_amount: f64,
    pub premium: f64,
}

/// Per-life breakdown of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub main_member: MainMemberLine,
    pub immediate_family: Vec<ImmediateFamilyLine>,
    pub extended_family: Vec<ExtendedFamilyLine>,
}

/// A completed premium calculation
///
/// All monetary amounts are monthly premiums in Rand, rounded to cents.
/// `total_premium` always equals `main_policy_premium +
/// extended_family_premium` rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Premium for the main policy (main member plus immediate family)
    pub main_policy_premium: f64,

    /// Sum of the individually priced extended family premiums
    pub extended_family_premium: f64,

    /// Total monthly premium for the application
    pub total_premium: f64,

    /// The tier the main policy was priced under
    pub benefit_option_used: BenefitOption,

    /// Per-life breakdown for the quote screen
    pub breakdown: PremiumBreakdown,
}
