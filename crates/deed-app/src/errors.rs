//! Categorized application errors
//!
//! Component-local failures resolve to one of these categories, which a
//! frontend consumes for rendering: notice severity, recoverability,
//! and a short code. There is no process-wide error channel; nothing in
//! this core is fatal.

use deed_core::DeedError;

// Re-export NoticeLevel from notify (single source of truth)
pub use crate::notify::NoticeLevel;

/// Categorized application error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Wallet session failures (no session, sign-in rejected)
    #[error("Wallet error: {context}")]
    Wallet {
        /// What the wallet reported
        context: String,
    },
    /// The ledger rejected a call
    #[error("Ledger rejected: {message}")]
    Ledger {
        /// The rejection reason
        message: String,
    },
    /// Network/transport failures
    #[error("Network error: {message}")]
    Network {
        /// What failed in transit
        message: String,
        /// Whether a retry could plausibly succeed
        recoverable: bool,
    },
    /// User input failures (correctable before resubmitting)
    #[error("{message} - {hint}")]
    Input {
        /// What was wrong
        message: String,
        /// How to fix it
        hint: String,
    },
    /// A response resolved after its viewer/identity context changed.
    /// Discarded, never surfaced to the user.
    #[error("Stale response discarded: {context}")]
    Stale {
        /// Which context went stale
        context: String,
    },
    /// Internal errors (unexpected conditions)
    #[error("{component}: {message}")]
    Internal {
        /// Component the error originated in
        component: String,
        /// Description
        message: String,
    },
}

impl AppError {
    /// Create a wallet error.
    pub fn wallet(context: impl Into<String>) -> Self {
        Self::Wallet {
            context: context.into(),
        }
    }

    /// Create a ledger rejection error.
    pub fn ledger(message: impl Into<String>) -> Self {
        Self::Ledger {
            message: message.into(),
        }
    }

    /// Create a recoverable network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            recoverable: true,
        }
    }

    /// Create an input error with a recovery hint.
    pub fn input(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create a stale-response marker.
    pub fn stale(context: impl Into<String>) -> Self {
        Self::Stale {
            context: context.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Internal {
            component: component.into(),
            message: message.into(),
        }
    }

    /// The notice severity a frontend should render this error with.
    pub fn notice_level(&self) -> NoticeLevel {
        match self {
            Self::Wallet { .. } => NoticeLevel::Error,
            Self::Ledger { .. } => NoticeLevel::Warning,
            Self::Network { recoverable, .. } => {
                if *recoverable {
                    NoticeLevel::Warning
                } else {
                    NoticeLevel::Error
                }
            }
            Self::Input { .. } => NoticeLevel::Info,
            Self::Stale { .. } => NoticeLevel::Info,
            Self::Internal { .. } => NoticeLevel::Error,
        }
    }

    /// Whether the caller can retry or correct the failure.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Wallet { .. } => true,
            Self::Ledger { .. } => true,
            Self::Network { recoverable, .. } => *recoverable,
            Self::Input { .. } => true,
            Self::Stale { .. } => true,
            Self::Internal { .. } => false,
        }
    }

    /// Whether a frontend should show this error at all.
    ///
    /// Stale responses are discarded silently per the error taxonomy.
    pub fn is_surfaceable(&self) -> bool {
        !matches!(self, Self::Stale { .. })
    }

    /// Short error code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Wallet { .. } => "WALLET",
            Self::Ledger { .. } => "LEDGER_REJECTED",
            Self::Network { .. } => "NETWORK",
            Self::Input { .. } => "INPUT",
            Self::Stale { .. } => "STALE",
            Self::Internal { .. } => "INTERNAL",
        }
    }
}

impl From<DeedError> for AppError {
    fn from(err: DeedError) -> Self {
        match err {
            DeedError::Wallet { message } => Self::wallet(message),
            DeedError::Ledger { message } => Self::ledger(message),
            DeedError::NotFound { message } => Self::ledger(message),
            DeedError::Network { message } => Self::network(message),
            DeedError::Invalid { message } => Self::Input {
                message,
                hint: "Check your input and try again".to_string(),
            },
            DeedError::Serialization { message } => Self::internal("serialization", message),
            DeedError::Internal { message } => Self::internal("core", message),
        }
    }
}
