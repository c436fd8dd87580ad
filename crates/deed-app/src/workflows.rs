//! Action workflows
//!
//! The state-changing flows: publish, credit, donate, register, and the
//! wallet sign-in handoff. Every remote call is wrapped so a failure
//! becomes a reported, recoverable [`AppError`] — never an unhandled
//! fault. An in-flight guard refuses a second invocation while one is
//! pending; frontends disable the triggering control for the duration.
//!
//! None of these flows auto-refresh the feed or the session; callers
//! refresh manually after a successful action (`register` in
//! particular must be followed by a session refresh).

use crate::config::AppConfig;
use crate::credit::{decide, CreditDecision};
use crate::errors::AppError;
use deed_core::{Deed, Identity, YoctoNear};
use deed_ledger::client::{
    AddDeedArgs, CreditArgs, LedgerClient, StorageDepositArgs, TransactionReceipt,
};
use deed_ledger::wallet::WalletSession;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Maximum length of a deed title.
pub const MAX_TITLE_LENGTH: usize = 128;

/// User input for a new deed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeedDraft {
    /// Short headline
    pub title: String,
    /// What was done
    pub description: String,
    /// URL of supporting evidence
    pub proof: String,
}

impl DeedDraft {
    /// Validate and trim the draft.
    pub fn validate(&self) -> Result<Self, AppError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::input(
                "Title is empty",
                "Give the deed a short headline",
            ));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(AppError::input(
                format!("Title too long: {} characters (max {MAX_TITLE_LENGTH})", title.len()),
                "Shorten the headline",
            ));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(AppError::input(
                "Description is empty",
                "Describe what was done",
            ));
        }
        let proof = self.proof.trim();
        if !proof.starts_with("https://") && !proof.starts_with("http://") {
            return Err(AppError::input(
                "Proof is not a link",
                "Provide an http(s) URL pointing at evidence",
            ));
        }
        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            proof: proof.to_string(),
        })
    }
}

/// Releases the in-flight flag when the action resolves either way.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// State-changing action flows over the ledger.
pub struct Actions {
    ledger: Arc<dyn LedgerClient>,
    config: AppConfig,
    in_flight: AtomicBool,
}

impl Actions {
    /// Create the action surface over a ledger handle.
    pub fn new(ledger: Arc<dyn LedgerClient>, config: AppConfig) -> Self {
        Self {
            ledger,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an action is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn acquire(&self) -> Result<InFlightGuard<'_>, AppError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(AppError::input(
                "An action is already in progress",
                "Wait for the pending transaction to finish",
            ));
        }
        Ok(InFlightGuard(&self.in_flight))
    }

    /// Publish a deed authored by the signed-in identity.
    pub async fn publish(
        &self,
        identity: &Identity,
        draft: &DeedDraft,
    ) -> Result<TransactionReceipt, AppError> {
        let draft = draft.validate()?;
        let _guard = self.acquire()?;
        tracing::info!(author = %identity.account_id, title = %draft.title, "publishing deed");
        let receipt = self
            .ledger
            .add_deed(
                AddDeedArgs {
                    author: identity.account_id.clone(),
                    title: draft.title,
                    description: draft.description,
                    proof: draft.proof,
                },
                self.config.gas(),
                self.config.publish_deposit(),
            )
            .await?;
        Ok(receipt)
    }

    /// Credit a deed on behalf of the signed-in identity.
    ///
    /// Refuses locally when the viewer is not eligible; the ledger
    /// enforces the same rules, but the local check avoids burning a
    /// transaction on a call that cannot succeed.
    pub async fn credit(
        &self,
        identity: &Identity,
        deed: &Deed,
    ) -> Result<TransactionReceipt, AppError> {
        match decide(deed, &identity.account_id) {
            CreditDecision::Eligible => {}
            decision => {
                return Err(AppError::input(
                    "Cannot credit this deed",
                    decision.explanation().unwrap_or_default(),
                ));
            }
        }
        let _guard = self.acquire()?;
        tracing::info!(creditor = %identity.account_id, deed = %deed.id, "crediting deed");
        let receipt = self
            .ledger
            .credit(
                CreditArgs { id: deed.id },
                self.config.gas(),
                self.config.credit_deposit(),
            )
            .await?;
        Ok(receipt)
    }

    /// Donate a user-chosen amount, distributed across reward holders.
    pub async fn donate(
        &self,
        identity: &Identity,
        amount: YoctoNear,
    ) -> Result<TransactionReceipt, AppError> {
        if amount.is_zero() {
            return Err(AppError::input(
                "Donation amount is zero",
                "Choose an amount to donate",
            ));
        }
        let _guard = self.acquire()?;
        tracing::info!(donor = %identity.account_id, %amount, "donating");
        let receipt = self.ledger.donate(self.config.gas(), amount).await?;
        Ok(receipt)
    }

    /// Register the signed-in identity on the ledger.
    ///
    /// Reads the dynamic storage bounds and attaches the minimum. The
    /// caller must refresh the session afterwards; the controller does
    /// not observe ledger events.
    pub async fn register(&self, identity: &Identity) -> Result<TransactionReceipt, AppError> {
        let _guard = self.acquire()?;
        let bounds = self.ledger.storage_balance_bounds().await?;
        tracing::info!(account = %identity.account_id, deposit = %bounds.min, "registering");
        let receipt = self
            .ledger
            .storage_deposit(
                StorageDepositArgs {
                    account_id: identity.account_id.clone(),
                    registration_only: true,
                },
                self.config.gas(),
                bounds.min,
            )
            .await?;
        Ok(receipt)
    }
}

/// Begin the wallet sign-in redirect flow for this configuration.
pub fn request_sign_in(wallet: &dyn WalletSession, config: &AppConfig) -> Result<(), AppError> {
    let request = config.sign_in_request()?;
    tracing::info!(contract = %request.contract_id, "requesting wallet sign-in");
    wallet.request_sign_in(request)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validation_trims() {
        let draft = DeedDraft {
            title: "  Cleaned the park  ".into(),
            description: " Two bags of litter ".into(),
            proof: " https://example.com/photo.jpg ".into(),
        };
        let valid = draft.validate().unwrap();
        assert_eq!(valid.title, "Cleaned the park");
        assert_eq!(valid.proof, "https://example.com/photo.jpg");
    }

    #[test]
    fn test_draft_validation_rejects() {
        let base = DeedDraft {
            title: "t".into(),
            description: "d".into(),
            proof: "https://example.com".into(),
        };

        let mut draft = base.clone();
        draft.title = "   ".into();
        assert_matches::assert_matches!(draft.validate(), Err(AppError::Input { .. }));

        let mut draft = base.clone();
        draft.description.clear();
        assert!(draft.validate().is_err());

        let mut draft = base.clone();
        draft.proof = "ftp://example.com".into();
        assert!(draft.validate().is_err());

        let mut draft = base;
        draft.title = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert!(draft.validate().is_err());
    }
}
