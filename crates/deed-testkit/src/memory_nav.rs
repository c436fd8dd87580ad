//! In-memory navigation state

use deed_app::{NavState, Navigator};
use parking_lot::Mutex;

/// [`Navigator`] double over a plain retained [`NavState`].
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    state: Mutex<NavState>,
}

impl MemoryNavigator {
    /// Create a navigator with an empty retained state at `/`.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(NavState::new("/")),
        }
    }

    /// Create a navigator retaining the given state.
    pub fn with_state(state: NavState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

impl Navigator for MemoryNavigator {
    fn retained(&self) -> NavState {
        self.state.lock().clone()
    }

    fn replace(&self, state: NavState) {
        *self.state.lock() = state;
    }
}
