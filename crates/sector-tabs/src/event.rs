//! Shared event types
//!
//! [`PageEvent`] is what the rendering engine reports about one context;
//! [`TabEvent`] is what the registry emits towards the chrome layer. Both
//! flow through ordered queues drained one at a time, so no state mutation
//! ever races another.

use serde::{Deserialize, Serialize};

use crate::tab::TabId;

/// Engine-side notification about one browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    /// A navigation committed successfully at `url`
    Committed { url: String },
    /// The document title changed
    TitleChanged { title: String },
    /// The navigation ended in an error
    Failed { reason: String },
}

/// Registry-side notification consumed by the address bar and tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabEvent {
    Created { id: TabId },
    Activated { id: TabId },
    Closed { id: TabId },
    UrlChanged { id: TabId, url: String },
    TitleChanged { id: TabId, title: String },
    LoadFailed { id: TabId, reason: String },
}
