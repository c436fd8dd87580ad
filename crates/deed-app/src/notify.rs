//! Transaction-result notification
//!
//! After a wallet-mediated transaction, the wallet redirects back with
//! either a transaction hash or an error payload appended to the
//! retained navigation state. `TransactionNotifier` turns that one-shot
//! signal into a user-visible notice and scrubs the carrier parameters
//! synchronously with consumption, so a reload never replays the
//! message.

use crate::navigation::{NavState, Navigator};
use deed_core::TransactionId;
use serde::{Deserialize, Serialize};

/// Query parameter carrying successful transaction hashes.
pub const PARAM_TX_HASHES: &str = "transactionHashes";

/// Query parameter carrying a rejected transaction's error payload.
pub const PARAM_ERROR_MESSAGE: &str = "errorMessage";

/// Query parameter carrying a rejected transaction's error code.
pub const PARAM_ERROR_CODE: &str = "errorCode";

const SIGNAL_KEYS: [&str; 3] = [PARAM_TX_HASHES, PARAM_ERROR_MESSAGE, PARAM_ERROR_CODE];

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Informational
    Info,
    /// Completed successfully
    Success,
    /// Degraded but recoverable
    Warning,
    /// Failed
    Error,
}

/// A user-visible message.
///
/// Not a timed toast: a notice persists until explicitly dismissed or
/// superseded by a newer signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity for rendering
    pub level: NoticeLevel,
    /// Human-readable message
    pub message: String,
}

impl Notice {
    /// Create a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// The redirect-carried result of a wallet-mediated transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionSignal {
    /// No signal present
    None,
    /// The ledger executed the transaction
    Success(TransactionId),
    /// The ledger rejected the signed transaction
    Failure {
        /// Decoded, human-readable error payload
        message: String,
    },
}

impl TransactionSignal {
    /// Whether a signal is present.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Parse the transaction signal out of a navigation-state snapshot.
///
/// Priority rule: if both an error payload and a success hash are
/// present, the error wins — only one message is ever produced.
pub fn parse_signal(state: &NavState) -> TransactionSignal {
    if let Some(raw) = state.get(PARAM_ERROR_MESSAGE) {
        let message = percent_decode(raw).unwrap_or_else(|| raw.to_string());
        return TransactionSignal::Failure { message };
    }
    if let Some(hash) = state.get(PARAM_TX_HASHES) {
        return TransactionSignal::Success(TransactionId::new(hash));
    }
    TransactionSignal::None
}

/// Decode a percent-encoded payload.
///
/// Malformed percent sequences pass through as literal characters;
/// `None` only when the decoded bytes are not valid UTF-8.
fn percent_decode(raw: &str) -> Option<String> {
    fn is_hex(b: u8) -> bool {
        matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
    }
    fn hex_val(b: u8) -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    }

    let bytes = raw.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() && is_hex(bytes[i + 1]) && is_hex(bytes[i + 2]) => {
                out.push(hex_val(bytes[i + 1]) << 4 | hex_val(bytes[i + 2]));
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

/// One-shot consumer of redirect-carried transaction signals.
#[derive(Debug, Default)]
pub struct TransactionNotifier {
    notice: Option<Notice>,
}

impl TransactionNotifier {
    /// Create a notifier with no pending notice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read, consume, and scrub the current transaction signal.
    ///
    /// The carrier parameters are removed from the retained navigation
    /// state before this returns, so re-invoking over the rewritten
    /// state yields `TransactionSignal::None`. Unrelated query
    /// parameters are preserved.
    pub fn consume(&mut self, nav: &dyn Navigator) -> TransactionSignal {
        let mut state = nav.retained();
        let signal = parse_signal(&state);
        if state.remove_all(&SIGNAL_KEYS) {
            nav.replace(state);
        }
        match &signal {
            TransactionSignal::Success(id) => {
                self.notice = Some(Notice::success(format!(
                    "Successfully executed transaction {id}"
                )));
            }
            TransactionSignal::Failure { message } => {
                self.notice = Some(Notice::error(message.clone()));
            }
            TransactionSignal::None => {}
        }
        signal
    }

    /// The currently displayed notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Clear the current notice (user dismissal).
    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}
