//! # deed-core
//!
//! Foundation types for the gooddeed client core: identifiers, deed
//! records, token amounts, fixed call budgets, and the unified error
//! type shared by the ledger and application layers.
//!
//! This crate is pure: no I/O, no async, no transport assumptions.

pub mod constants;
pub mod errors;
pub mod identifiers;
pub mod types;

pub use constants::{CREDIT_DEPOSIT_MILLINEAR, DEFAULT_GAS_TERAGAS, PUBLISH_DEPOSIT_MILLINEAR};
pub use errors::DeedError;
pub use identifiers::{AccountId, DeedId, TransactionId};
pub use types::{Deed, Gas, Identity, YoctoNear};
