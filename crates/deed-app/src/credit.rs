//! Credit eligibility
//!
//! A pure decision over (deed, viewer): can this viewer credit this
//! deed? The caller maps the decision to an affordance — a disabled
//! control with an explanation, or an enabled one that invokes the
//! credit operation.

use deed_core::{AccountId, Deed};

/// Why a credit action is or is not available to a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditDecision {
    /// The viewer has already credited this deed
    AlreadyCredited,
    /// The viewer authored this deed
    SelfAuthored,
    /// The viewer may credit this deed
    Eligible,
}

impl CreditDecision {
    /// Whether the credit control should be enabled.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Eligible)
    }

    /// Tooltip for the disabled variants.
    pub fn explanation(&self) -> Option<&'static str> {
        match self {
            Self::AlreadyCredited => Some("You have already credited this deed"),
            Self::SelfAuthored => Some("You cannot credit your own deed"),
            Self::Eligible => None,
        }
    }
}

/// Decide whether `viewer` can credit `deed`.
///
/// Total and deterministic. `AlreadyCredited` takes strict precedence
/// over `SelfAuthored`: it is the more specific, user-facing
/// explanation when both conditions hold.
pub fn decide(deed: &Deed, viewer: &AccountId) -> CreditDecision {
    if deed.is_creditor {
        CreditDecision::AlreadyCredited
    } else if deed.author == *viewer {
        CreditDecision::SelfAuthored
    } else {
        CreditDecision::Eligible
    }
}
