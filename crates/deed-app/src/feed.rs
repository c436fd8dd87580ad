//! Deed feed retrieval and row shaping
//!
//! The paginator reads the total deed count, fetches the whole known
//! set in one page, and partitions it into fixed-width rows for layout.
//! Ordering within and across rows preserves the ledger-returned order;
//! there is no client-side re-sort.
//!
//! The count and the page are two separate reads, so the window is not
//! atomic: a deed published between them is silently omitted, and a
//! deed removed yields a short page, which is tolerated by truncation.

use crate::errors::AppError;
use deed_core::{AccountId, Deed};
use deed_ledger::client::{LedgerClient, SocialDeedsArgs};
use std::sync::Arc;

/// Default number of deeds per layout row.
pub const DEFAULT_ROW_WIDTH: usize = 2;

/// The feed for one viewer, shaped into layout rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedSnapshot {
    /// The viewer the `is_creditor` flags are relative to
    pub viewer: Option<AccountId>,
    /// Deed count the page request was issued with
    pub requested_count: u64,
    rows: Vec<Vec<Deed>>,
}

impl FeedSnapshot {
    /// An empty snapshot for the given viewer.
    pub fn empty(viewer: AccountId) -> Self {
        Self {
            viewer: Some(viewer),
            requested_count: 0,
            rows: Vec::new(),
        }
    }

    /// The layout rows, in ledger order.
    pub fn rows(&self) -> &[Vec<Deed>] {
        &self.rows
    }

    /// Total number of deeds across all rows.
    pub fn deed_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether the snapshot holds no deeds.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all deeds in ledger order.
    pub fn deeds(&self) -> impl Iterator<Item = &Deed> {
        self.rows.iter().flatten()
    }
}

/// Partition a flat deed sequence into rows of the given width.
///
/// Produces `ceil(len / width)` rows; every row except possibly the
/// last has exactly `width` items. Order is preserved.
pub fn partition_rows(deeds: Vec<Deed>, width: usize) -> Vec<Vec<Deed>> {
    debug_assert!(width > 0, "row width must be positive");
    let width = width.max(1);
    let mut rows = Vec::with_capacity(deeds.len().div_ceil(width));
    let mut iter = deeds.into_iter();
    loop {
        let row: Vec<Deed> = iter.by_ref().take(width).collect();
        if row.is_empty() {
            break;
        }
        rows.push(row);
    }
    rows
}

/// Retrieves and shapes the deed feed for a viewer.
pub struct DeedFeedPaginator {
    ledger: Arc<dyn LedgerClient>,
    row_width: usize,
}

impl DeedFeedPaginator {
    /// Create a paginator with the default row width.
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self::with_row_width(ledger, DEFAULT_ROW_WIDTH)
    }

    /// Create a paginator with a custom row width.
    pub fn with_row_width(ledger: Arc<dyn LedgerClient>, row_width: usize) -> Self {
        Self {
            ledger,
            row_width: row_width.max(1),
        }
    }

    /// Load the entire known feed for a viewer.
    ///
    /// Requests the count, then a single page of `(0, count)`. A page
    /// shorter than the count is accepted as-is; a page longer than the
    /// requested limit is truncated to the limit. `count == 0` short-
    /// circuits without a page request (the ledger rejects an
    /// out-of-bounds `from_index`).
    pub async fn load(&self, viewer: &AccountId) -> Result<FeedSnapshot, AppError> {
        let count = self.ledger.get_deeds_count().await?;
        tracing::debug!(viewer = %viewer, count, "loading deed feed");
        if count == 0 {
            return Ok(FeedSnapshot::empty(viewer.clone()));
        }
        let mut deeds = self
            .ledger
            .social_deeds(SocialDeedsArgs {
                creditor_id: viewer.clone(),
                from_index: 0,
                limit: count,
            })
            .await?;
        deeds.truncate(count as usize);
        Ok(FeedSnapshot {
            viewer: Some(viewer.clone()),
            requested_count: count,
            rows: partition_rows(deeds, self.row_width),
        })
    }
}

/// Handle for applying a feed load begun with [`FeedState::begin`].
#[derive(Debug, Clone)]
pub struct FeedProbe {
    generation: u64,
    viewer: AccountId,
}

impl FeedProbe {
    /// The viewer this load was issued for.
    pub fn viewer(&self) -> &AccountId {
        &self.viewer
    }
}

/// Holds the current feed snapshot; each load replaces it wholesale.
///
/// A snapshot resolved for a stale viewer (the viewer changed while the
/// load was in flight) is discarded rather than applied.
#[derive(Debug, Default)]
pub struct FeedState {
    current: Option<FeedSnapshot>,
    generation: u64,
}

impl FeedState {
    /// Create an empty feed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if one has been applied.
    pub fn snapshot(&self) -> Option<&FeedSnapshot> {
        self.current.as_ref()
    }

    /// Begin a load for a viewer, invalidating in-flight loads.
    pub fn begin(&mut self, viewer: AccountId) -> FeedProbe {
        self.generation += 1;
        FeedProbe {
            generation: self.generation,
            viewer,
        }
    }

    /// Apply a loaded snapshot; false when the probe is stale.
    pub fn apply(&mut self, probe: FeedProbe, snapshot: FeedSnapshot) -> bool {
        if probe.generation != self.generation {
            tracing::debug!(viewer = %probe.viewer, "discarding stale feed snapshot");
            return false;
        }
        self.current = Some(snapshot);
        true
    }

    /// Drop the current snapshot (viewer signed out).
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deed_core::DeedId;
    use proptest::prelude::*;

    fn deed(id: u64) -> Deed {
        Deed {
            id: DeedId::new(id),
            author: AccountId::new("author").unwrap(),
            title: format!("deed {id}"),
            description: "d".into(),
            proof: "https://example.com".into(),
            creditors: 0,
            is_creditor: false,
        }
    }

    fn deeds(n: u64) -> Vec<Deed> {
        (0..n).map(deed).collect()
    }

    #[test]
    fn test_partition_expected_row_counts() {
        for (n, expected_rows) in [(0u64, 0usize), (1, 1), (2, 1), (3, 2), (5, 3)] {
            let rows = partition_rows(deeds(n), 2);
            assert_eq!(rows.len(), expected_rows, "n = {n}");
            for row in rows.iter().take(rows.len().saturating_sub(1)) {
                assert_eq!(row.len(), 2);
            }
        }
    }

    #[test]
    fn test_partition_preserves_order() {
        let rows = partition_rows(deeds(5), 2);
        let flat: Vec<u64> = rows.iter().flatten().map(|d| d.id.index()).collect();
        assert_eq!(flat, vec![0, 1, 2, 3, 4]);
        assert_eq!(rows[2].len(), 1);
    }

    proptest! {
        #[test]
        fn prop_partition_roundtrip(n in 0u64..64, width in 1usize..5) {
            let input = deeds(n);
            let rows = partition_rows(input.clone(), width);
            prop_assert_eq!(rows.len(), (n as usize).div_ceil(width));
            for row in rows.iter().take(rows.len().saturating_sub(1)) {
                prop_assert_eq!(row.len(), width);
            }
            let flat: Vec<Deed> = rows.into_iter().flatten().collect();
            prop_assert_eq!(flat, input);
        }
    }

    #[test]
    fn test_feed_state_wholesale_replace() {
        let mut state = FeedState::new();
        let viewer = AccountId::new("alice").unwrap();
        let probe = state.begin(viewer.clone());
        assert!(state.apply(probe, FeedSnapshot::empty(viewer.clone())));
        assert!(state.snapshot().is_some());

        let stale = state.begin(viewer.clone());
        let fresh = state.begin(viewer.clone());
        assert!(!state.apply(stale, FeedSnapshot::empty(viewer.clone())));
        assert!(state.apply(fresh, FeedSnapshot::empty(viewer)));
    }

    #[test]
    fn test_feed_state_clear_invalidates() {
        let mut state = FeedState::new();
        let viewer = AccountId::new("alice").unwrap();
        let probe = state.begin(viewer.clone());
        state.clear();
        assert!(!state.apply(probe, FeedSnapshot::empty(viewer)));
        assert!(state.snapshot().is_none());
    }
}
