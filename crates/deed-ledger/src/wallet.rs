//! Wallet session surface
//!
//! The wallet SDK is an external collaborator; the client consumes it
//! through this trait. `account()` is synchronous by design: wallet
//! SDKs expose the current session from local storage without a network
//! round trip.

use deed_core::{AccountId, DeedError, Identity};

/// A sign-in request handed to the wallet.
///
/// The wallet redirects to `success_url` or `failure_url` after the
/// user approves or rejects, appending transaction results or an error
/// payload to the retained navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    /// The contract the session key is scoped to
    pub contract_id: AccountId,
    /// Method names the session key may call
    pub allowed_methods: Vec<String>,
    /// Redirect target on approval
    pub success_url: String,
    /// Redirect target on rejection
    pub failure_url: String,
}

/// The wallet session surface consumed by the client.
pub trait WalletSession: Send + Sync {
    /// The current session identity, if signed in.
    fn account(&self) -> Option<Identity>;

    /// Begin the wallet's sign-in redirect flow.
    fn request_sign_in(&self, request: SignInRequest) -> Result<(), DeedError>;

    /// End the wallet session.
    fn sign_out(&self);
}
