//! Family members, composition analysis and benefit option resolution

mod benefit;
mod composition;
mod member;

pub use benefit::BenefitOption;
pub use composition::{FamilyComposition, MAX_CHILDREN};
pub use member::{FamilyMember, Relationship};
