//! Tab data structure

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::ContextId;
use crate::error::TabError;
use crate::state::LoadState;
use crate::Result;

/// Stable identity of a tab. Unique for the process lifetime; the id of a
/// closed tab is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: TabId,
    /// Engine-owned browsing context backing this tab
    pub context: ContextId,
    /// Current URL
    pub url: String,
    /// Page title, empty until the engine reports one
    pub title: String,
    /// Current state in the load state machine
    pub state: LoadState,
}

impl Tab {
    pub(crate) fn new(context: ContextId, url: &str) -> Self {
        Self {
            id: TabId::new(),
            context,
            url: url.to_string(),
            title: String::new(),
            state: LoadState::Loading,
        }
    }

    fn transition_to(&mut self, new_state: LoadState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state,
                to: new_state,
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;
        Ok(())
    }

    /// A new navigation starts in this tab; the title is stale until the
    /// engine reports a fresh one.
    pub(crate) fn begin_navigation(&mut self) -> Result<()> {
        self.transition_to(LoadState::Loading)?;
        self.title.clear();
        Ok(())
    }

    /// The engine committed a navigation at `url`.
    pub(crate) fn mark_committed(&mut self, url: String) -> Result<()> {
        self.transition_to(LoadState::Loaded)?;
        self.url = url;
        Ok(())
    }

    /// The engine reported a navigation error.
    pub(crate) fn mark_failed(&mut self) -> Result<()> {
        self.transition_to(LoadState::Failed)
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Terminal; no events are applied to a closed tab.
    pub(crate) fn close(&mut self) {
        tracing::debug!(tab_id = %self.id, from = %self.state, "Tab closed");
        self.state = LoadState::Closed;
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Display title with fallback to the URL
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}
