//! Quote engine: the stateless pricing pipeline over a pre-built rate table
//!
//! One `calculate` call runs the full pipeline for a request:
//! composition analysis, benefit option resolution, rate lookups and
//! breakdown assembly. The engine owns an immutable `RateTable` and can be
//! shared across threads; every calculation is independent and
//! side-effect-free.

use std::path::Path;

use crate::error::PricingError;
use crate::family::{BenefitOption, FamilyComposition, Relationship};
use crate::rates::{loader, RateTable};

use super::params::CalculationParams;
use super::result::{
    CalculationResult, ExtendedFamilyLine, ImmediateFamilyLine, MainMemberLine, PremiumBreakdown,
};

/// Rates are quoted per R1000 of cover
const RATE_COVER_UNIT: f64 = 1000.0;

/// Round a monetary amount to cents
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Premium quoting engine over a pre-built rate table
///
/// # Example
/// ```ignore
/// let engine = QuoteEngine::with_default_card()?;
/// let result = engine.calculate(&params)?;
/// println!("monthly premium: R{:.2}", result.total_premium);
/// ```
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    rates: RateTable,
}

impl QuoteEngine {
    /// Create an engine over an already-built rate table
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Create an engine from the embedded standard rate card
    pub fn with_default_card() -> Result<Self, PricingError> {
        Ok(Self::new(RateTable::build(loader::default_rate_card())?))
    }

    /// Create an engine from the rate card CSV at the default location
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATE_CARD_PATH))
    }

    /// Create an engine from a rate card CSV export
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let rows = loader::load_rate_card(path)?;
        Ok(Self::new(RateTable::build(rows)?))
    }

    /// Get reference to the underlying rate table for inspection
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Price a single request
    ///
    /// Produces one complete result or fails entirely; there is no partial
    /// result and nothing is retried. Every failure is deterministic for
    /// the same request and rate card.
    pub fn calculate(&self, params: &CalculationParams) -> Result<CalculationResult, PricingError> {
        let composition = FamilyComposition::analyze(&params.additional_members)?;
        let benefit_option = BenefitOption::resolve(&composition);

        let cover_units = params.cover_amount / RATE_COVER_UNIT;

        // Main policy: one premium covering the main member and all
        // immediate family, at the resolved tier's rate for the main
        // member's age
        let main_rate = self
            .rates
            .lookup(benefit_option.as_str(), params.main_member_age)?;
        let main_policy_premium = round_to_cents(cover_units * main_rate);

        // Extended family members are always priced individually under the
        // fixed Extended family tier, each at their own age
        let mut extended_family = Vec::with_capacity(composition.extended_count());
        let mut extended_family_premium = 0.0;
        for &age in composition.extended_ages() {
            let rate = self
                .rates
                .lookup(BenefitOption::ExtendedFamily.as_str(), age)?;
            let premium = round_to_cents(cover_units * rate);
            extended_family_premium += premium;
            extended_family.push(ExtendedFamilyLine {
                age,
                cover_amount: params.cover_amount,
                premium,
            });
        }
        let extended_family_premium = round_to_cents(extended_family_premium);

        let total_premium = round_to_cents(main_policy_premium + extended_family_premium);

        // Immediate family lines echo the shared cover amount at zero
        // premium; their cost sits inside the main policy rate
        let immediate_family = params
            .additional_members
            .iter()
            .filter(|member| {
                matches!(
                    member.relationship,
                    Relationship::Spouse | Relationship::Child
                )
            })
            .map(|member| ImmediateFamilyLine {
                relationship: member.relationship,
                age: member.age,
                cover_amount: params.cover_amount,
                premium: 0.0,
            })
            .collect();

        Ok(CalculationResult {
            main_policy_premium,
            extended_family_premium,
            total_premium,
            benefit_option_used: benefit_option,
            breakdown: PremiumBreakdown {
                main_member: MainMemberLine {
                    age: params.main_member_age,
                    cover_amount: params.cover_amount,
                    premium: main_policy_premium,
                },
                immediate_family,
                extended_family,
            },
        })
    }

    /// Price multiple requests against the shared rate table
    pub fn calculate_batch(
        &self,
        requests: &[CalculationParams],
    ) -> Vec<Result<CalculationResult, PricingError>> {
        requests.iter().map(|params| self.calculate(params)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::FamilyMember;
    use approx::assert_abs_diff_eq;

    fn engine() -> QuoteEngine {
        QuoteEngine::with_default_card().unwrap()
    }

    #[test]
    fn test_main_member_only_quote() {
        let params = CalculationParams::new(35, 50_000.0);
        let result = engine().calculate(&params).unwrap();

        assert_eq!(result.benefit_option_used, BenefitOption::MainMemberOnly);
        assert_abs_diff_eq!(result.main_policy_premium, 105.00);
        assert_abs_diff_eq!(result.extended_family_premium, 0.0);
        assert_abs_diff_eq!(result.total_premium, 105.00);

        assert_eq!(result.breakdown.main_member.age, 35);
        assert_abs_diff_eq!(result.breakdown.main_member.cover_amount, 50_000.0);
        assert!(result.breakdown.immediate_family.is_empty());
        assert!(result.breakdown.extended_family.is_empty());
    }

    #[test]
    fn test_spouse_quote() {
        let params =
            CalculationParams::with_members(35, 50_000.0, vec![FamilyMember::spouse()]);
        let result = engine().calculate(&params).unwrap();

        assert_eq!(result.benefit_option_used, BenefitOption::MainMemberAndSpouse);
        assert_abs_diff_eq!(result.main_policy_premium, 167.50);
        assert_abs_diff_eq!(result.total_premium, 167.50);

        // Spouse appears in the breakdown at zero premium with the shared cover
        assert_eq!(result.breakdown.immediate_family.len(), 1);
        let spouse = &result.breakdown.immediate_family[0];
        assert_eq!(spouse.relationship, Relationship::Spouse);
        assert_abs_diff_eq!(spouse.cover_amount, 50_000.0);
        assert_abs_diff_eq!(spouse.premium, 0.0);
    }

    #[test]
    fn test_seven_children_rejected() {
        let params =
            CalculationParams::with_members(35, 50_000.0, vec![FamilyMember::child(); 7]);
        let err = engine().calculate(&params).unwrap_err();
        assert!(matches!(err, PricingError::Validation(_)));
        assert!(err.to_string().contains("maximum of 6 children"));
    }

    #[test]
    fn test_extended_member_without_age_rejected() {
        let params = CalculationParams::with_members(
            35,
            50_000.0,
            vec![FamilyMember {
                relationship: Relationship::Extended,
                age: None,
            }],
        );
        let err = engine().calculate(&params).unwrap_err();
        assert!(matches!(err, PricingError::Validation(_)));
        assert!(err.to_string().contains("extended family"));
    }

    #[test]
    fn test_full_family_quote() {
        let params = CalculationParams::with_members(
            35,
            50_000.0,
            vec![
                FamilyMember::spouse(),
                FamilyMember::child(),
                FamilyMember::extended(70),
            ],
        );
        let result = engine().calculate(&params).unwrap();

        assert_eq!(
            result.benefit_option_used,
            BenefitOption::MainMemberSpouseAndChildren
        );
        // 50 units at 5.03
        assert_abs_diff_eq!(result.main_policy_premium, 251.50);
        // Extended member aged 70 falls in the 66-75 band at 7.48
        assert_abs_diff_eq!(result.extended_family_premium, 374.00);
        assert_abs_diff_eq!(result.total_premium, 625.50);

        assert_eq!(result.breakdown.immediate_family.len(), 2);
        assert_eq!(result.breakdown.extended_family.len(), 1);
        let extended = &result.breakdown.extended_family[0];
        assert_eq!(extended.age, 70);
        assert_abs_diff_eq!(extended.premium, 374.00);
    }

    #[test]
    fn test_total_is_rounded_sum_of_parts() {
        // Odd cover amount exercising cent rounding on every line
        let params = CalculationParams::with_members(
            40,
            37_337.0,
            vec![FamilyMember::extended(52), FamilyMember::extended(68)],
        );
        let result = engine().calculate(&params).unwrap();

        let expected_total =
            round_to_cents(result.main_policy_premium + result.extended_family_premium);
        assert_abs_diff_eq!(result.total_premium, expected_total);

        // Extended total is the sum of the already-rounded member premiums
        let member_sum: f64 = result
            .breakdown
            .extended_family
            .iter()
            .map(|line| line.premium)
            .sum();
        assert_abs_diff_eq!(
            result.extended_family_premium,
            round_to_cents(member_sum)
        );
    }

    #[test]
    fn test_uncovered_age_fails_whole_quote() {
        // Main member within range, extended member beyond the top band
        let params = CalculationParams::with_members(
            35,
            50_000.0,
            vec![FamilyMember::extended(80)],
        );
        let err = engine().calculate(&params).unwrap_err();
        assert_eq!(err, PricingError::rate_not_found("Extended family", 80));

        // Main member beyond the top band
        let params = CalculationParams::new(90, 50_000.0);
        let err = engine().calculate(&params).unwrap_err();
        assert_eq!(err, PricingError::rate_not_found("Main Member Only", 90));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let requests = vec![
            CalculationParams::new(35, 50_000.0),
            CalculationParams::with_members(62, 20_000.0, vec![FamilyMember::spouse()]),
            CalculationParams::with_members(35, 50_000.0, vec![FamilyMember::child(); 7]),
        ];

        let engine = engine();
        let batch = engine.calculate_batch(&requests);
        assert_eq!(batch.len(), 3);

        for (request, batch_result) in requests.iter().zip(&batch) {
            assert_eq!(batch_result, &engine.calculate(request));
        }
        assert!(batch[2].is_err());
    }

    #[test]
    fn test_round_to_cents() {
        assert_abs_diff_eq!(round_to_cents(105.126), 105.13);
        assert_abs_diff_eq!(round_to_cents(105.124), 105.12);
        assert_abs_diff_eq!(round_to_cents(251.5), 251.5);
    }
}
