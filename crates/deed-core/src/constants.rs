//! Fixed call budgets for state-changing ledger operations
//!
//! Kept in the units `AppConfig` stores them in, so the config layer
//! consumes these directly as its defaults. The registration deposit is
//! not listed here: it is dynamic, read from
//! `storage_balance_bounds().min` at call time. The donation amount is
//! user-chosen.

/// Gas budget attached to every state-changing call, in teragas.
pub const DEFAULT_GAS_TERAGAS: u64 = 300;

/// Deposit attached when publishing a deed (covers record storage), in
/// thousandths of a NEAR.
pub const PUBLISH_DEPOSIT_MILLINEAR: u64 = 100;

/// Deposit attached when crediting a deed (covers creditor-set growth),
/// in thousandths of a NEAR.
pub const CREDIT_DEPOSIT_MILLINEAR: u64 = 10;
