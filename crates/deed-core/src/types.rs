//! Deed records, wallet identity, and amount wrappers

use crate::identifiers::{AccountId, DeedId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One yoctoNEAR is 10^-24 of a NEAR token.
pub const YOCTO_PER_NEAR: u128 = 1_000_000_000_000_000_000_000_000;

/// A published social-good record as returned by the ledger.
///
/// `is_creditor` is relative to the account the page was requested for,
/// not an intrinsic property of the record. It is supplied by the ledger
/// response and never recomputed client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deed {
    /// Position in the ledger's append-only deed sequence
    pub id: DeedId,
    /// The account that published the deed
    pub author: AccountId,
    /// Short headline
    pub title: String,
    /// What was done
    pub description: String,
    /// URL of supporting evidence
    pub proof: String,
    /// How many accounts have credited this deed
    pub creditors: u64,
    /// Whether the requesting viewer has already credited this deed
    pub is_creditor: bool,
}

/// Wallet-derived identity for the current session.
///
/// Immutable once obtained; a new sign-in produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The signed-in account
    pub account_id: AccountId,
    /// Opaque balance string as reported by the wallet
    pub balance: String,
}

impl Identity {
    /// Create an identity from an account and its reported balance.
    pub fn new(account_id: AccountId, balance: impl Into<String>) -> Self {
        Self {
            account_id,
            balance: balance.into(),
        }
    }
}

/// An attached deposit amount in yoctoNEAR.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct YoctoNear(pub u128);

impl YoctoNear {
    /// Zero attached deposit.
    pub const ZERO: Self = Self(0);

    /// Create from a raw yoctoNEAR amount.
    pub const fn new(yocto: u128) -> Self {
        Self(yocto)
    }

    /// Create from a whole number of NEAR.
    pub const fn from_near(near: u128) -> Self {
        Self(near * YOCTO_PER_NEAR)
    }

    /// Create from a thousandth of a NEAR (`1` is 0.001 NEAR).
    pub const fn from_millinear(milli: u128) -> Self {
        Self(milli * (YOCTO_PER_NEAR / 1_000))
    }

    /// The raw yoctoNEAR amount.
    pub const fn as_yocto(&self) -> u128 {
        self.0
    }

    /// Whether this is a zero amount.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for YoctoNear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / YOCTO_PER_NEAR;
        let frac = self.0 % YOCTO_PER_NEAR;
        if frac == 0 {
            write!(f, "{whole} NEAR")
        } else {
            let frac = format!("{frac:024}");
            write!(f, "{whole}.{} NEAR", frac.trim_end_matches('0'))
        }
    }
}

/// A gas budget for a state-changing ledger call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Gas(pub u64);

impl Gas {
    /// Create from raw gas units.
    pub const fn new(gas: u64) -> Self {
        Self(gas)
    }

    /// Create from teragas (`1` is 10^12 gas units).
    pub const fn from_teragas(tgas: u64) -> Self {
        Self(tgas * 1_000_000_000_000)
    }

    /// The raw gas amount.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Tgas", self.0 / 1_000_000_000_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(raw: &str) -> AccountId {
        AccountId::new(raw).unwrap()
    }

    #[test]
    fn test_deed_serde_field_names() {
        let deed = Deed {
            id: DeedId::new(3),
            author: account("bob"),
            title: "Cleaned the park".into(),
            description: "Two bags of litter".into(),
            proof: "https://example.com/photo.jpg".into(),
            creditors: 2,
            is_creditor: false,
        };
        let json = serde_json::to_value(&deed).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["author"], "bob");
        assert_eq!(json["creditors"], 2);
        assert_eq!(json["is_creditor"], false);
    }

    #[test]
    fn test_yocto_display() {
        assert_eq!(YoctoNear::from_near(2).to_string(), "2 NEAR");
        assert_eq!(YoctoNear::from_millinear(100).to_string(), "0.1 NEAR");
        assert_eq!(YoctoNear::from_millinear(10).to_string(), "0.01 NEAR");
        assert_eq!(YoctoNear::ZERO.to_string(), "0 NEAR");
    }

    #[test]
    fn test_yocto_constructors_agree() {
        assert_eq!(YoctoNear::from_near(1), YoctoNear::from_millinear(1_000));
        assert_eq!(YoctoNear::from_near(1).as_yocto(), YOCTO_PER_NEAR);
        assert!(YoctoNear::ZERO.is_zero());
        assert!(!YoctoNear::from_millinear(1).is_zero());
    }

    #[test]
    fn test_gas_teragas() {
        assert_eq!(Gas::from_teragas(300).as_u64(), 300_000_000_000_000);
        assert_eq!(Gas::from_teragas(300).to_string(), "300 Tgas");
    }
}
