//! In-memory wallet session

use deed_core::{DeedError, Identity};
use deed_ledger::wallet::{SignInRequest, WalletSession};
use parking_lot::Mutex;

/// [`WalletSession`] double with a settable session.
///
/// Sign-in requests are recorded rather than redirected; tests assert on
/// the last request and then call [`MemoryWallet::sign_in`] to simulate
/// the approval redirect landing back in the app.
#[derive(Debug, Default)]
pub struct MemoryWallet {
    session: Mutex<Option<Identity>>,
    last_request: Mutex<Option<SignInRequest>>,
    refuse_sign_in: Mutex<Option<DeedError>>,
}

impl MemoryWallet {
    /// Create a wallet with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wallet already signed in as the given identity.
    pub fn signed_in(identity: Identity) -> Self {
        let wallet = Self::new();
        wallet.sign_in(identity);
        wallet
    }

    /// Establish a session, as the wallet would after an approved redirect.
    pub fn sign_in(&self, identity: Identity) {
        *self.session.lock() = Some(identity);
    }

    /// The last sign-in request handed to the wallet.
    pub fn last_sign_in_request(&self) -> Option<SignInRequest> {
        self.last_request.lock().clone()
    }

    /// Make the next `request_sign_in` call fail with the given error.
    pub fn refuse_sign_in(&self, error: DeedError) {
        *self.refuse_sign_in.lock() = Some(error);
    }
}

impl WalletSession for MemoryWallet {
    fn account(&self) -> Option<Identity> {
        self.session.lock().clone()
    }

    fn request_sign_in(&self, request: SignInRequest) -> Result<(), DeedError> {
        if let Some(err) = self.refuse_sign_in.lock().take() {
            return Err(err);
        }
        *self.last_request.lock() = Some(request);
        Ok(())
    }

    fn sign_out(&self) {
        *self.session.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_session_lifecycle() {
        let wallet = MemoryWallet::new();
        assert!(wallet.account().is_none());

        wallet.sign_in(fixtures::identity("alice"));
        assert_eq!(
            wallet.account().unwrap().account_id.as_str(),
            "alice"
        );

        wallet.sign_out();
        assert!(wallet.account().is_none());
    }

    #[test]
    fn test_records_sign_in_request() {
        let wallet = MemoryWallet::new();
        let request = SignInRequest {
            contract_id: fixtures::account("deeds.testnet"),
            allowed_methods: vec!["add_deed".into()],
            success_url: "https://app.example/feed".into(),
            failure_url: "https://app.example".into(),
        };
        wallet.request_sign_in(request.clone()).unwrap();
        assert_eq!(wallet.last_sign_in_request(), Some(request));
    }

    #[test]
    fn test_refusal_is_one_shot() {
        let wallet = MemoryWallet::new();
        wallet.refuse_sign_in(DeedError::wallet("user closed the popup"));
        let request = SignInRequest {
            contract_id: fixtures::account("deeds.testnet"),
            allowed_methods: vec![],
            success_url: String::new(),
            failure_url: String::new(),
        };
        assert!(wallet.request_sign_in(request.clone()).is_err());
        assert!(wallet.request_sign_in(request).is_ok());
    }
}
