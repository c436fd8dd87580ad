//! Unified error type for gooddeed operations
//!
//! A single flat error enum shared by the ledger port and the application
//! layer. Constructor helpers keep call sites terse; categorized,
//! frontend-facing errors live in `deed-app`.

use serde::{Deserialize, Serialize};

/// Unified error type for ledger, wallet, and client operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DeedError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// What was invalid
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// What was not found
        message: String,
    },

    /// Network or transport error
    #[error("Network error: {message}")]
    Network {
        /// What failed in transit
        message: String,
    },

    /// The ledger rejected a call
    #[error("Ledger rejected: {message}")]
    Ledger {
        /// The rejection reason as reported by the ledger
        message: String,
    },

    /// Wallet session error
    #[error("Wallet error: {message}")]
    Wallet {
        /// What the wallet reported
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// What failed to (de)serialize
        message: String,
    },

    /// Internal invariant violation
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the broken invariant
        message: String,
    },
}

impl DeedError {
    /// Create an invalid input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a ledger rejection error.
    pub fn ledger(message: impl Into<String>) -> Self {
        Self::Ledger {
            message: message.into(),
        }
    }

    /// Create a wallet error.
    pub fn wallet(message: impl Into<String>) -> Self {
        Self::Wallet {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The message payload, regardless of variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message }
            | Self::NotFound { message }
            | Self::Network { message }
            | Self::Ledger { message }
            | Self::Wallet { message }
            | Self::Serialization { message }
            | Self::Internal { message } => message,
        }
    }

    /// Whether a retry without changed input could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for DeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
