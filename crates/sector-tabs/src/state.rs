//! Per-tab load state machine
//!
//! ```text
//! Loading
//!   ↓ commit            ↓ navigation error
//! Loaded                Failed
//!   ↓ new navigation      ↓ new navigation
//! Loading               Loading
//! ```
//!
//! Any state can move to `Closed` via an explicit close. `Closed` is
//! terminal: no further events are applied to a closed tab.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// A navigation is in flight. Indefinite loading is a valid steady state.
    Loading,
    /// The last navigation committed successfully
    Loaded,
    /// The last navigation ended in an error
    Failed,
    /// The tab has been closed; terminal
    Closed,
}

impl LoadState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: LoadState) -> bool {
        match (self, target) {
            // Nothing leaves Closed
            (LoadState::Closed, _) => false,
            // Any open state can be closed
            (_, LoadState::Closed) => true,
            // A load in flight either commits or fails
            (LoadState::Loading, LoadState::Loaded) => true,
            (LoadState::Loading, LoadState::Failed) => true,
            // A new navigation restarts the machine
            (LoadState::Loaded, LoadState::Loading) => true,
            (LoadState::Failed, LoadState::Loading) => true,
            // Same state is a no-op (re-entrant navigation, redirect commits)
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, LoadState::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed => "failed",
            LoadState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
