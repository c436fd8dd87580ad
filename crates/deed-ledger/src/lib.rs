//! # deed-ledger
//!
//! The remote-service seams of the gooddeed client: an explicit,
//! substitutable method table for the deed ledger (`LedgerClient`) and
//! the wallet session surface (`WalletSession`). The application core
//! depends only on these traits; a production transport and the
//! in-memory test double (`deed-testkit`) both plug in behind them.

pub mod client;
pub mod wallet;

pub use client::{
    AddDeedArgs, CreditArgs, IsRegisteredArgs, LedgerClient, SocialDeedsArgs,
    StorageBalanceBounds, StorageDepositArgs, TransactionReceipt,
};
pub use wallet::{SignInRequest, WalletSession};
