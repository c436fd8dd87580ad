//! Identifier types used across the gooddeed client
//!
//! `AccountId` is the equality key everywhere authorship and ownership
//! are compared; it is immutable once obtained for a session.

use crate::errors::DeedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a ledger account name.
pub const MAX_ACCOUNT_ID_LEN: usize = 64;

/// Minimum length of a ledger account name.
pub const MIN_ACCOUNT_ID_LEN: usize = 2;

/// A validated ledger account identifier.
///
/// Follows the ledger's account grammar: dot-separated parts of lowercase
/// alphanumerics with `_`/`-` separators, 2..=64 characters overall. Parts
/// never start or end with a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Parse and validate an account identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, DeedError> {
        let raw = raw.into();
        validate_account_id(&raw)?;
        Ok(Self(raw))
    }

    /// The account name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_account_id(raw: &str) -> Result<(), DeedError> {
    if raw.len() < MIN_ACCOUNT_ID_LEN || raw.len() > MAX_ACCOUNT_ID_LEN {
        return Err(DeedError::invalid(format!(
            "account id must be {MIN_ACCOUNT_ID_LEN}..={MAX_ACCOUNT_ID_LEN} characters, got {}",
            raw.len()
        )));
    }
    for part in raw.split('.') {
        if part.is_empty() {
            return Err(DeedError::invalid(format!(
                "account id '{raw}' has an empty dot-separated part"
            )));
        }
        let valid_edges = part
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            && part
                .chars()
                .last()
                .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !valid_edges {
            return Err(DeedError::invalid(format!(
                "account id part '{part}' must start and end with a lowercase letter or digit"
            )));
        }
        if !part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(DeedError::invalid(format!(
                "account id part '{part}' contains invalid characters"
            )));
        }
    }
    Ok(())
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = DeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = DeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// Position of a deed in the ledger's append-only sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct DeedId(pub u64);

impl DeedId {
    /// Create from a raw index.
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// The raw index.
    pub const fn index(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deed-{}", self.0)
    }
}

impl From<u64> for DeedId {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

/// Opaque transaction identifier carried back from a wallet redirect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap a raw transaction hash string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
