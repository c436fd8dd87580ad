//! # LedgerClient: Abstract Ledger Operations
//!
//! This module defines the `LedgerClient` trait, the exact method table
//! the client consumes from the deed ledger. Keeping the table explicit
//! (rather than an untyped method bag) makes every call site typed and
//! lets tests substitute an in-memory double with the same contract.
//!
//! View methods (`get_deeds_count`, `social_deeds`,
//! `storage_balance_bounds`, `is_registered`) carry no gas or deposit.
//! Change methods (`add_deed`, `credit`, `donate`, `storage_deposit`)
//! carry a gas budget and an attached deposit and resolve to a
//! transaction receipt.
//!
//! All methods are asynchronous and may fail; callers wrap every
//! suspension point so a failure becomes a reported, recoverable state.

use async_trait::async_trait;
use deed_core::{AccountId, Deed, DeedError, DeedId, Gas, TransactionId, YoctoNear};
use serde::{Deserialize, Serialize};

/// Arguments for `social_deeds`.
///
/// `creditor_id` scopes the viewer-relative `is_creditor` flag on each
/// returned record. Serializes to the ledger's JSON argument shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialDeedsArgs {
    /// The viewer the `is_creditor` flags are computed for
    pub creditor_id: AccountId,
    /// Zero-based offset into the deed sequence
    pub from_index: u64,
    /// Maximum number of records to return (never zero)
    pub limit: u64,
}

/// Arguments for `add_deed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDeedArgs {
    /// Author of the deed; the ledger requires this to equal the caller
    pub author: AccountId,
    /// Short headline
    pub title: String,
    /// What was done
    pub description: String,
    /// URL of supporting evidence
    pub proof: String,
}

/// Arguments for `credit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditArgs {
    /// The deed being credited
    pub id: DeedId,
}

/// Arguments for `storage_deposit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDepositArgs {
    /// The account being registered
    pub account_id: AccountId,
    /// Register only, refunding any deposit beyond the minimum
    pub registration_only: bool,
}

/// Arguments for `is_registered`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsRegisteredArgs {
    /// The account whose registration is queried
    pub account_id: AccountId,
}

/// Storage deposit bounds reported by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageBalanceBounds {
    /// Minimum deposit required to register an account
    pub min: YoctoNear,
    /// Maximum useful deposit, if the ledger caps it
    pub max: Option<YoctoNear>,
}

/// Receipt for a state-changing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Identifier of the executed transaction
    pub transaction_id: TransactionId,
}

impl TransactionReceipt {
    /// Create a receipt from a transaction identifier.
    pub fn new(transaction_id: impl Into<TransactionId>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
        }
    }
}

impl From<&str> for TransactionReceipt {
    fn from(raw: &str) -> Self {
        Self::new(TransactionId::new(raw))
    }
}

/// The deed ledger's method table.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Total number of deeds on the ledger.
    async fn get_deeds_count(&self) -> Result<u64, DeedError>;

    /// An ordered window of deeds with viewer-relative credit flags.
    async fn social_deeds(&self, args: SocialDeedsArgs) -> Result<Vec<Deed>, DeedError>;

    /// Publish a new deed.
    async fn add_deed(
        &self,
        args: AddDeedArgs,
        gas: Gas,
        deposit: YoctoNear,
    ) -> Result<TransactionReceipt, DeedError>;

    /// Credit a deed, rewarding its author.
    async fn credit(
        &self,
        args: CreditArgs,
        gas: Gas,
        deposit: YoctoNear,
    ) -> Result<TransactionReceipt, DeedError>;

    /// Donate the attached deposit, distributed across reward holders.
    /// Also auto-creates a deed for the donor.
    async fn donate(&self, gas: Gas, deposit: YoctoNear)
        -> Result<TransactionReceipt, DeedError>;

    /// Storage deposit bounds for account registration.
    async fn storage_balance_bounds(&self) -> Result<StorageBalanceBounds, DeedError>;

    /// Register an account by allocating its storage.
    async fn storage_deposit(
        &self,
        args: StorageDepositArgs,
        gas: Gas,
        deposit: YoctoNear,
    ) -> Result<TransactionReceipt, DeedError>;

    /// Whether an account has completed registration.
    async fn is_registered(&self, args: IsRegisteredArgs) -> Result<bool, DeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(raw: &str) -> AccountId {
        AccountId::new(raw).unwrap()
    }

    #[test]
    fn test_social_deeds_args_wire_shape() {
        let args = SocialDeedsArgs {
            creditor_id: account("alice"),
            from_index: 0,
            limit: 50,
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["creditor_id"], "alice");
        assert_eq!(json["from_index"], 0);
        assert_eq!(json["limit"], 50);
    }

    #[test]
    fn test_storage_deposit_args_wire_shape() {
        let args = StorageDepositArgs {
            account_id: account("alice"),
            registration_only: true,
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["account_id"], "alice");
        assert_eq!(json["registration_only"], true);
    }

    #[test]
    fn test_receipt_from_hash() {
        let receipt = TransactionReceipt::from("6zgh2u9D");
        assert_eq!(receipt.transaction_id.as_str(), "6zgh2u9D");
    }
}
