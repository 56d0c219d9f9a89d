//! Ephemeral session state
//!
//! Rebuilt fresh on every launch, never persisted. The active workspace and
//! active tab live in their managers; this holds the remaining UI state.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    /// Whether the sector sidebar is expanded
    pub sidebar_expanded: bool,
    /// Engine name the address bar searches with
    pub selected_engine: String,
    /// Placeholder metric: advanced by a fixed step on a chrome timer, no
    /// detection logic behind it
    pub trackers_blocked: u64,
}

impl SessionState {
    pub fn new(selected_engine: String) -> Self {
        Self {
            sidebar_expanded: true,
            selected_engine,
            trackers_blocked: 0,
        }
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_expanded = !self.sidebar_expanded;
        self.sidebar_expanded
    }

    pub fn bump_trackers_blocked(&mut self) {
        self.trackers_blocked += 1;
    }
}
