//! Session gating
//!
//! Derives the authorization state from the wallet identity and the
//! on-chain registration flag, and maps it to the single three-way view
//! dispatch every protected route consumes. The registration check is
//! asynchronous; while it is pending no variant is asserted, so the UI
//! never flashes the wrong branch.

use crate::navigation::Navigator;
use deed_core::{DeedError, Identity};
use deed_ledger::client::{IsRegisteredArgs, LedgerClient};
use deed_ledger::wallet::WalletSession;
use std::sync::Arc;

/// Wallet residue appended to the redirect URL on sign-in; stripped on
/// sign-out so no session-identifying state survives in navigation.
const WALLET_RESIDUE_KEYS: [&str; 3] = ["account_id", "public_key", "all_keys"];

/// Authorization state for the current page load.
///
/// Exactly one variant holds at any time. Transitions are monotonic
/// within a page load except sign-out, which resets to
/// `Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Registration check pending or not yet run; assert nothing
    #[default]
    Unknown,
    /// No wallet session
    Unauthenticated,
    /// Signed in, registration not completed on-chain
    Unregistered(Identity),
    /// Signed in and registered; full content available
    Registered(Identity),
    /// The registration check failed; distinct from both authenticated
    /// variants — the caller decides whether to retry or degrade
    CheckFailed {
        /// The identity the failed check was for
        identity: Identity,
        /// Why the check failed
        error: DeedError,
    },
}

impl SessionStatus {
    /// The signed-in identity, if any variant carries one.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unregistered(identity)
            | Self::Registered(identity)
            | Self::CheckFailed { identity, .. } => Some(identity),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }

    /// Whether the session is confirmed registered.
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    /// The view branch a protected route should render.
    pub fn gate(&self) -> RouteGate {
        match self {
            Self::Unknown => RouteGate::Pending,
            Self::CheckFailed { error, .. } => RouteGate::Failed(error.clone()),
            Self::Unauthenticated => RouteGate::SignIn,
            Self::Unregistered(identity) => RouteGate::Register(identity.clone()),
            Self::Registered(identity) => RouteGate::Content(identity.clone()),
        }
    }
}

/// The shared three-way (plus pending/failed) view dispatch.
///
/// Every protected route renders exactly the branch this names; there
/// are no route-specific exceptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGate {
    /// Registration check in flight; render a placeholder
    Pending,
    /// The check failed; render a retryable degraded state
    Failed(DeedError),
    /// Render the sign-in prompt
    SignIn,
    /// Render the registration step
    Register(Identity),
    /// Render the protected content
    Content(Identity),
}

/// Handle for completing a registration check begun with
/// [`SessionController::begin_check`].
///
/// Carries the generation the check was issued under; a completion for
/// a stale generation is discarded.
#[derive(Debug, Clone)]
pub struct RegistrationProbe {
    generation: u64,
    identity: Identity,
}

impl RegistrationProbe {
    /// The identity this probe checks registration for.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Derives [`SessionStatus`] from the wallet and the ledger.
pub struct SessionController {
    wallet: Arc<dyn WalletSession>,
    ledger: Arc<dyn LedgerClient>,
    status: SessionStatus,
    generation: u64,
}

impl SessionController {
    /// Create a controller over the given wallet and ledger handles.
    pub fn new(wallet: Arc<dyn WalletSession>, ledger: Arc<dyn LedgerClient>) -> Self {
        Self {
            wallet,
            ledger,
            status: SessionStatus::Unknown,
            generation: 0,
        }
    }

    /// The current authorization state.
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Resolve the authorization state end to end.
    ///
    /// Reads the wallet identity, and when one is present runs the
    /// registration check before asserting a variant.
    pub async fn resolve(&mut self) -> &SessionStatus {
        match self.begin_check() {
            None => &self.status,
            Some(probe) => {
                let result = self
                    .ledger
                    .is_registered(IsRegisteredArgs {
                        account_id: probe.identity.account_id.clone(),
                    })
                    .await;
                self.complete_check(probe, result);
                &self.status
            }
        }
    }

    /// Re-run the registration check for the current identity.
    ///
    /// The controller does not subscribe to ledger events; callers must
    /// invoke this after a registration-completing action succeeds.
    pub async fn refresh(&mut self) -> &SessionStatus {
        self.resolve().await
    }

    /// Begin a registration check.
    ///
    /// Returns `None` when there is no wallet session (the status is
    /// already final: `Unauthenticated`). Otherwise the status becomes
    /// `Unknown` until the probe is completed.
    pub fn begin_check(&mut self) -> Option<RegistrationProbe> {
        self.generation += 1;
        match self.wallet.account() {
            None => {
                self.status = SessionStatus::Unauthenticated;
                None
            }
            Some(identity) => {
                self.status = SessionStatus::Unknown;
                Some(RegistrationProbe {
                    generation: self.generation,
                    identity,
                })
            }
        }
    }

    /// Complete a registration check begun with [`Self::begin_check`].
    ///
    /// Returns false when the probe is stale (the identity context
    /// changed while the check was in flight); stale results are
    /// discarded without touching the status.
    pub fn complete_check(
        &mut self,
        probe: RegistrationProbe,
        result: Result<bool, DeedError>,
    ) -> bool {
        if probe.generation != self.generation {
            tracing::debug!(
                account = %probe.identity.account_id,
                "discarding stale registration check"
            );
            return false;
        }
        self.status = match result {
            Ok(true) => SessionStatus::Registered(probe.identity),
            Ok(false) => SessionStatus::Unregistered(probe.identity),
            Err(error) => {
                tracing::warn!(
                    account = %probe.identity.account_id,
                    %error,
                    "registration check failed"
                );
                SessionStatus::CheckFailed {
                    identity: probe.identity,
                    error,
                }
            }
        };
        true
    }

    /// Sign out: end the wallet session, reset to `Unauthenticated`,
    /// and strip wallet residue from the retained navigation state.
    pub fn sign_out(&mut self, nav: &dyn Navigator) {
        tracing::info!("signing out");
        self.wallet.sign_out();
        self.generation += 1;
        self.status = SessionStatus::Unauthenticated;
        let mut state = nav.retained();
        if state.remove_all(&WALLET_RESIDUE_KEYS) {
            nav.replace(state);
        }
    }
}
