//! Calculation request matching the application form payload

use serde::{Deserialize, Serialize};

use crate::family::FamilyMember;

/// A single premium calculation request
///
/// Supplied by the form layer after user input. The one `cover_amount`
/// applies uniformly to the main member and every additional member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Age of the main member
    pub main_member_age: u8,

    /// Cover amount in Rand, shared by every covered life
    pub cover_amount: f64,

    /// Additional family members on the application
    #[serde(default)]
    pub additional_members: Vec<FamilyMember>,
}

impl CalculationParams {
    /// A request covering the main member alone
    pub fn new(main_member_age: u8, cover_amount: f64) -> Self {
        Self {
            main_member_age,
            cover_amount,
            additional_members: Vec::new(),
        }
    }

    /// A request covering the main member and additional family
    pub fn with_members(
        main_member_age: u8,
        cover_amount: f64,
        additional_members: Vec<FamilyMember>,
    ) -> Self {
        Self {
            main_member_age,
            cover_amount,
            additional_members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Relationship;

    #[test]
    fn test_form_payload_deserializes() {
        let json = r#"{
            "main_member_age": 35,
            "cover_amount": 50000,
            "additional_members": [
                {"relationship": "spouse"},
                {"relationship": "extended", "age": 70}
            ]
        }"#;
        let params: CalculationParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.main_member_age, 35);
        assert_eq!(params.cover_amount, 50000.0);
        assert_eq!(params.additional_members.len(), 2);
        assert_eq!(
            params.additional_members[0].relationship,
            Relationship::Spouse
        );
        assert_eq!(params.additional_members[1].age, Some(70));
    }

    #[test]
    fn test_members_default_to_empty() {
        let params: CalculationParams =
            serde_json::from_str(r#"{"main_member_age": 40, "cover_amount": 25000}"#).unwrap();
        assert!(params.additional_members.is_empty());
    }
}
