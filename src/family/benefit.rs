//! Benefit option tiers and resolution from family composition

use std::fmt;

use serde::{Deserialize, Serialize};

use super::composition::FamilyComposition;

/// The seven benefit-option tiers on the funeral cover rate card
///
/// Serialized string forms match the rate card keys exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitOption {
    #[serde(rename = "Main Member Only")]
    MainMemberOnly,
    #[serde(rename = "Main Member and Spouse")]
    MainMemberAndSpouse,
    #[serde(rename = "Main Member and up to 6 Children")]
    MainMemberAndChildren,
    #[serde(rename = "Main Member, Spouse and up to 6 Children")]
    MainMemberSpouseAndChildren,
    #[serde(rename = "Main Member and 2 Spouses")]
    MainMemberAndTwoSpouses,
    #[serde(rename = "Main Member, 2 Spouses and up to 6 Children")]
    MainMemberTwoSpousesAndChildren,
    #[serde(rename = "Extended family")]
    ExtendedFamily,
}

impl BenefitOption {
    /// All tiers, in rate card order
    pub const ALL: [BenefitOption; 7] = [
        BenefitOption::MainMemberOnly,
        BenefitOption::MainMemberAndSpouse,
        BenefitOption::MainMemberAndChildren,
        BenefitOption::MainMemberSpouseAndChildren,
        BenefitOption::MainMemberAndTwoSpouses,
        BenefitOption::MainMemberTwoSpousesAndChildren,
        BenefitOption::ExtendedFamily,
    ];

    /// The rate card key for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitOption::MainMemberOnly => "Main Member Only",
            BenefitOption::MainMemberAndSpouse => "Main Member and Spouse",
            BenefitOption::MainMemberAndChildren => "Main Member and up to 6 Children",
            BenefitOption::MainMemberSpouseAndChildren => {
                "Main Member, Spouse and up to 6 Children"
            }
            BenefitOption::MainMemberAndTwoSpouses => "Main Member and 2 Spouses",
            BenefitOption::MainMemberTwoSpousesAndChildren => {
                "Main Member, 2 Spouses and up to 6 Children"
            }
            BenefitOption::ExtendedFamily => "Extended family",
        }
    }

    /// Resolve the main policy tier for a validated family composition
    ///
    /// Extended family members never influence the resolution; they are
    /// always priced separately under `ExtendedFamily`.
    pub fn resolve(composition: &FamilyComposition) -> Self {
        if composition.spouse_count() > 1 {
            // Two-spouse tiers exist on the rate card, but no current intake
            // channel submits more than one spouse. Unverified with the
            // product owner.
            if composition.has_children() {
                BenefitOption::MainMemberTwoSpousesAndChildren
            } else {
                BenefitOption::MainMemberAndTwoSpouses
            }
        } else if composition.has_spouse() && composition.has_children() {
            BenefitOption::MainMemberSpouseAndChildren
        } else if composition.has_spouse() {
            BenefitOption::MainMemberAndSpouse
        } else if composition.has_children() {
            BenefitOption::MainMemberAndChildren
        } else {
            BenefitOption::MainMemberOnly
        }
    }
}

impl fmt::Display for BenefitOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
