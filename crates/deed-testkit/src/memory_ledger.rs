//! In-memory deed ledger
//!
//! Implements [`LedgerClient`] with the contract's observable rules:
//! append-only deed sequence, per-deed creditor sets, self/double-credit
//! rejection, author-must-match on publish, registration via storage
//! deposit, and the donation auto-deed. Rejection messages match the
//! contract so message-sensitive assertions hold.
//!
//! Calls attribute to the account set with [`MemoryLedger::set_caller`],
//! standing in for the wallet-signed predecessor. Failures can be
//! injected with [`MemoryLedger::fail_next`] to exercise error paths.

use async_trait::async_trait;
use deed_core::{AccountId, Deed, DeedError, DeedId, Gas, TransactionId, YoctoNear};
use deed_ledger::client::{
    AddDeedArgs, CreditArgs, IsRegisteredArgs, LedgerClient, SocialDeedsArgs,
    StorageBalanceBounds, StorageDepositArgs, TransactionReceipt,
};
use parking_lot::Mutex;
use std::collections::BTreeSet;

/// Proof URL the contract attaches to donation auto-deeds.
pub const DONATION_PROOF_URL: &str =
    "https://gifimage.net/wp-content/uploads/2017/10/donation-gif-10.gif";

/// Minimum registration deposit reported by default.
pub const DEFAULT_STORAGE_MIN: YoctoNear = YoctoNear::new(2_350_000_000_000_000_000_000);

#[derive(Debug, Clone)]
struct StoredDeed {
    author: AccountId,
    title: String,
    description: String,
    proof: String,
    creditors: BTreeSet<AccountId>,
}

#[derive(Debug, Default)]
struct Inner {
    deeds: Vec<StoredDeed>,
    registered: BTreeSet<AccountId>,
    caller: Option<AccountId>,
    injected_failure: Option<DeedError>,
    tx_counter: u64,
}

impl Inner {
    fn take_failure(&mut self) -> Result<(), DeedError> {
        match self.injected_failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn caller(&self) -> Result<AccountId, DeedError> {
        self.caller
            .clone()
            .ok_or_else(|| DeedError::wallet("no caller set on the memory ledger"))
    }

    fn next_receipt(&mut self) -> TransactionReceipt {
        self.tx_counter += 1;
        TransactionReceipt::new(TransactionId::new(format!("tx-{}", self.tx_counter)))
    }
}

/// In-memory [`LedgerClient`] double.
#[derive(Debug)]
pub struct MemoryLedger {
    inner: Mutex<Inner>,
    storage_min: YoctoNear,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedger {
    /// Create an empty ledger with the default storage bounds.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            storage_min: DEFAULT_STORAGE_MIN,
        }
    }

    /// Attribute subsequent calls to this account.
    pub fn set_caller(&self, caller: AccountId) {
        self.inner.lock().caller = Some(caller);
    }

    /// Mark an account as registered without a storage deposit.
    pub fn register(&self, account: AccountId) {
        self.inner.lock().registered.insert(account);
    }

    /// Make the next ledger call fail with the given error.
    pub fn fail_next(&self, error: DeedError) {
        self.inner.lock().injected_failure = Some(error);
    }

    /// Seed a deed directly, bypassing publish validation.
    pub fn seed_deed(&self, author: AccountId, title: &str, description: &str, proof: &str) {
        self.inner.lock().deeds.push(StoredDeed {
            author,
            title: title.to_string(),
            description: description.to_string(),
            proof: proof.to_string(),
            creditors: BTreeSet::new(),
        });
    }

    /// Seed a credit on a deed, bypassing the credit rules.
    pub fn seed_credit(&self, id: DeedId, creditor: AccountId) {
        let mut inner = self.inner.lock();
        if let Some(deed) = inner.deeds.get_mut(id.index() as usize) {
            deed.creditors.insert(creditor);
        }
    }

    /// Number of credits recorded for a deed.
    pub fn creditor_count(&self, id: DeedId) -> u64 {
        self.inner
            .lock()
            .deeds
            .get(id.index() as usize)
            .map(|d| d.creditors.len() as u64)
            .unwrap_or(0)
    }
}

#[async_trait]
impl LedgerClient for MemoryLedger {
    async fn get_deeds_count(&self) -> Result<u64, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        Ok(inner.deeds.len() as u64)
    }

    async fn social_deeds(&self, args: SocialDeedsArgs) -> Result<Vec<Deed>, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        if args.from_index >= inner.deeds.len() as u64 {
            return Err(DeedError::ledger(
                "Out of bounds, please use a smaller from_index.",
            ));
        }
        if args.limit == 0 {
            return Err(DeedError::ledger("Cannot provide limit of 0."));
        }
        Ok(inner
            .deeds
            .iter()
            .enumerate()
            .skip(args.from_index as usize)
            .take(args.limit as usize)
            .map(|(index, deed)| Deed {
                id: DeedId::new(index as u64),
                author: deed.author.clone(),
                title: deed.title.clone(),
                description: deed.description.clone(),
                proof: deed.proof.clone(),
                creditors: deed.creditors.len() as u64,
                is_creditor: deed.creditors.contains(&args.creditor_id),
            })
            .collect())
    }

    async fn add_deed(
        &self,
        args: AddDeedArgs,
        _gas: Gas,
        _deposit: YoctoNear,
    ) -> Result<TransactionReceipt, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        let caller = inner.caller()?;
        if args.author != caller {
            return Err(DeedError::ledger(
                "The author must be the same as the calling account.",
            ));
        }
        inner.deeds.push(StoredDeed {
            author: args.author,
            title: args.title,
            description: args.description,
            proof: args.proof,
            creditors: BTreeSet::new(),
        });
        Ok(inner.next_receipt())
    }

    async fn credit(
        &self,
        args: CreditArgs,
        _gas: Gas,
        _deposit: YoctoNear,
    ) -> Result<TransactionReceipt, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        let caller = inner.caller()?;
        let index = args.id.index() as usize;
        if index >= inner.deeds.len() {
            return Err(DeedError::ledger("The id is out of range."));
        }
        let author = inner.deeds[index].author.clone();
        if caller == author {
            return Err(DeedError::ledger("You cannot credit yourself."));
        }
        if !inner.deeds[index].creditors.insert(caller.clone()) {
            return Err(DeedError::ledger(format!(
                "{caller} cannot credit the deed of {author} again."
            )));
        }
        Ok(inner.next_receipt())
    }

    async fn donate(
        &self,
        _gas: Gas,
        deposit: YoctoNear,
    ) -> Result<TransactionReceipt, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        let caller = inner.caller()?;
        inner.deeds.push(StoredDeed {
            author: caller.clone(),
            title: "Donation to all users".to_string(),
            description: format!("{caller} donated {deposit} to all users. Thank you very much!"),
            proof: DONATION_PROOF_URL.to_string(),
            creditors: BTreeSet::new(),
        });
        Ok(inner.next_receipt())
    }

    async fn storage_balance_bounds(&self) -> Result<StorageBalanceBounds, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        Ok(StorageBalanceBounds {
            min: self.storage_min,
            max: Some(self.storage_min),
        })
    }

    async fn storage_deposit(
        &self,
        args: StorageDepositArgs,
        _gas: Gas,
        deposit: YoctoNear,
    ) -> Result<TransactionReceipt, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        if deposit < self.storage_min {
            return Err(DeedError::ledger(format!(
                "The attached deposit is less than the minimum storage balance ({})",
                self.storage_min
            )));
        }
        inner.registered.insert(args.account_id);
        Ok(inner.next_receipt())
    }

    async fn is_registered(&self, args: IsRegisteredArgs) -> Result<bool, DeedError> {
        let mut inner = self.inner.lock();
        inner.take_failure()?;
        Ok(inner.registered.contains(&args.account_id))
    }
}
