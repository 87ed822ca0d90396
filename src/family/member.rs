//! Family member data structures matching the application form payload

use serde::{Deserialize, Serialize};

/// Relationship of an additional member to the main member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Spouse,
    Child,
    Extended,
}

/// An additional family member on the application
///
/// Age is immaterial to pricing for spouses and children (their cost is
/// absorbed into the main policy rate) and therefore optional. Extended
/// family members are priced individually by age, so theirs is mandatory;
/// that rule is enforced during composition analysis rather than here, so
/// a form payload always deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub relationship: Relationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
}

impl FamilyMember {
    /// A spouse, age not captured
    pub fn spouse() -> Self {
        Self {
            relationship: Relationship::Spouse,
            age: None,
        }
    }

    /// A child, age not captured
    pub fn child() -> Self {
        Self {
            relationship: Relationship::Child,
            age: None,
        }
    }

    /// An extended family member with the mandatory age
    pub fn extended(age: u8) -> Self {
        Self {
            relationship: Relationship::Extended,
            age: Some(age),
        }
    }

    /// Any relationship with an explicit age
    pub fn with_age(relationship: Relationship, age: u8) -> Self {
        Self {
            relationship,
            age: Some(age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_payload_deserializes() {
        let member: FamilyMember =
            serde_json::from_str(r#"{"relationship":"spouse"}"#).unwrap();
        assert_eq!(member.relationship, Relationship::Spouse);
        assert_eq!(member.age, None);

        let member: FamilyMember =
            serde_json::from_str(r#"{"relationship":"extended","age":70}"#).unwrap();
        assert_eq!(member, FamilyMember::extended(70));
    }

    #[test]
    fn test_age_omitted_when_absent() {
        let json = serde_json::to_string(&FamilyMember::child()).unwrap();
        assert_eq!(json, r#"{"relationship":"child"}"#);
    }
}
