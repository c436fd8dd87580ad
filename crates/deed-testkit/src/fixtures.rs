//! Fixture builders
//!
//! Shorthand constructors for values that are tedious to build inline.
//! All panics here are deliberate; a malformed fixture is a test bug.

use deed_core::{AccountId, Deed, DeedId, Identity};

/// A validated account id, panicking on malformed input.
pub fn account(raw: &str) -> AccountId {
    AccountId::new(raw).unwrap_or_else(|err| panic!("bad fixture account '{raw}': {err}"))
}

/// An identity for the given account with a nominal balance.
pub fn identity(raw: &str) -> Identity {
    Identity::new(account(raw), "100000000000000000000000000")
}

/// A deed at the given index authored by `author`, with no credits.
pub fn deed(id: u64, author: &str) -> Deed {
    Deed {
        id: DeedId::new(id),
        author: account(author),
        title: format!("Deed {id}"),
        description: format!("Description of deed {id}"),
        proof: format!("https://example.com/proof/{id}"),
        creditors: 0,
        is_creditor: false,
    }
}

/// A deed the viewer has already credited.
pub fn credited_deed(id: u64, author: &str) -> Deed {
    Deed {
        creditors: 1,
        is_creditor: true,
        ..deed(id, author)
    }
}
