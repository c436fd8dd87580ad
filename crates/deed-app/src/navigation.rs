//! Navigation-state port
//!
//! The browser's retained navigation state (path + query string) is the
//! only mutable resource touched by more than one component: the session
//! controller strips wallet residue on sign-out, and the transaction
//! notifier scrubs redirect signals on consumption. Both go through this
//! explicit port with read-modify-write semantics rather than touching
//! ambient global state.

use std::collections::BTreeMap;

/// A snapshot of the retained navigation state.
///
/// Query parameters are kept in a sorted map so `replace` calls are
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    /// Current path, without the query string
    pub path: String,
    query: BTreeMap<String, String>,
}

impl NavState {
    /// Create an empty state at the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    /// Look up a query parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Whether a query parameter is present.
    pub fn contains(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }

    /// Set a query parameter (upsert semantics).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Remove a query parameter, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.query.remove(key)
    }

    /// Remove several query parameters; true if any was present.
    pub fn remove_all(&mut self, keys: &[&str]) -> bool {
        let mut removed = false;
        for key in keys {
            removed |= self.query.remove(*key).is_some();
        }
        removed
    }

    /// Number of query parameters.
    pub fn len(&self) -> usize {
        self.query.len()
    }

    /// Whether there are no query parameters.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Iterate over query parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Capability for reading and rewriting the retained navigation state.
///
/// Writers must read the current state, modify it, and hand the result to
/// `replace` — never construct a replacement blind, or unrelated
/// navigation data gets clobbered.
pub trait Navigator: Send + Sync {
    /// The currently retained navigation state.
    fn retained(&self) -> NavState;

    /// Replace the retained navigation state without adding a history entry.
    fn replace(&self, state: NavState);
}
