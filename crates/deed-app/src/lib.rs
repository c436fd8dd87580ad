//! # deed-app
//!
//! Portable headless application core for gooddeed: the session/view
//! gating state machine, the one-shot transaction-result notifier, the
//! deed feed paginator, the credit eligibility decision, and the
//! state-changing action workflows.
//!
//! Frontends render from the state types in this crate; the wallet and
//! the ledger plug in behind the `deed-ledger` ports. The retained
//! navigation state — the one resource shared between components — is
//! reached only through the [`navigation::Navigator`] capability.

pub mod config;
pub mod credit;
pub mod errors;
pub mod feed;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod workflows;

pub use config::AppConfig;
pub use credit::{decide, CreditDecision};
pub use errors::AppError;
pub use feed::{DeedFeedPaginator, FeedSnapshot, FeedState};
pub use navigation::{NavState, Navigator};
pub use notify::{Notice, NoticeLevel, TransactionNotifier, TransactionSignal};
pub use session::{RouteGate, SessionController, SessionStatus};
pub use workflows::{request_sign_in, Actions, DeedDraft};
