//! # deed-testkit
//!
//! In-memory doubles for the gooddeed ports — a ledger that reproduces
//! the deed contract's observable rules, a wallet with a settable
//! session, and a navigator over a plain `NavState` — plus fixture
//! builders. Everything here is deterministic and synchronous under
//! the hood; the async surface only exists to satisfy the ports.

pub mod fixtures;
pub mod memory_ledger;
pub mod memory_nav;
pub mod memory_wallet;

pub use memory_ledger::MemoryLedger;
pub use memory_nav::MemoryNavigator;
pub use memory_wallet::MemoryWallet;
