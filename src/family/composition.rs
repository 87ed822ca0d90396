//! Family composition analysis
//!
//! Partitions the additional members on an application into spouses,
//! children and extended family, and enforces the business rules that gate
//! pricing: at most six children on a policy, and an age for every extended
//! family member.

use crate::error::PricingError;

use super::member::{FamilyMember, Relationship};

/// Maximum number of children coverable under one policy
pub const MAX_CHILDREN: usize = 6;

/// Validated family composition derived from the additional members
///
/// Construction via `analyze` guarantees the child limit holds and that
/// every extended member carried an age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyComposition {
    spouse_count: usize,
    children_count: usize,
    extended_ages: Vec<u8>,
}

impl FamilyComposition {
    /// Analyze the additional members of an application
    ///
    /// Pure and deterministic. Fails with `PricingError::Validation` when
    /// more than six children are present or an extended family member has
    /// no age.
    pub fn analyze(members: &[FamilyMember]) -> Result<Self, PricingError> {
        let mut spouse_count = 0;
        let mut children_count = 0;
        let mut extended_ages = Vec::new();

        for member in members {
            match member.relationship {
                Relationship::Spouse => spouse_count += 1,
                Relationship::Child => children_count += 1,
                Relationship::Extended => {
                    let age = member.age.ok_or_else(|| {
                        PricingError::Validation(
                            "an age is required for extended family members".into(),
                        )
                    })?;
                    extended_ages.push(age);
                }
            }
        }

        if children_count > MAX_CHILDREN {
            return Err(PricingError::Validation(
                "a policy can cover a maximum of 6 children".into(),
            ));
        }

        Ok(Self {
            spouse_count,
            children_count,
            extended_ages,
        })
    }

    pub fn has_spouse(&self) -> bool {
        self.spouse_count > 0
    }

    pub fn has_children(&self) -> bool {
        self.children_count > 0
    }

    pub fn spouse_count(&self) -> usize {
        self.spouse_count
    }

    pub fn children_count(&self) -> usize {
        self.children_count
    }

    /// Ages of the extended family members, in application order
    pub fn extended_ages(&self) -> &[u8] {
        &self.extended_ages
    }

    pub fn extended_count(&self) -> usize {
        self.extended_ages.len()
    }
}
