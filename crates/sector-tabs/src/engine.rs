//! Rendering-engine collaborator interface
//!
//! The shell never parses, lays out, or executes page content; all of that
//! lives behind this trait. The engine may load many contexts concurrently,
//! but it reports progress only as serialized per-context notifications
//! ([`crate::PageEvent`]) which the shell applies in arrival order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque handle to an engine-owned browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(pub u64);

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait RenderEngine {
    /// Create a browsing context and start loading `url` into it.
    fn create_context(&mut self, url: &str) -> ContextId;

    /// Load `url` into an existing context.
    fn navigate(&mut self, context: ContextId, url: &str);

    fn go_back(&mut self, context: ContextId);

    fn go_forward(&mut self, context: ContextId);

    fn reload(&mut self, context: ContextId);

    /// Destroy the context and release its event subscription. Events the
    /// engine already queued for it may still arrive afterwards.
    fn destroy_context(&mut self, context: ContextId);

    /// The URL the context currently displays, if it is still alive.
    fn current_url(&self, context: ContextId) -> Option<String>;

    /// Capture a visual snapshot of the context, encoded by the engine.
    fn capture_snapshot(&self, context: ContextId) -> Option<Vec<u8>>;
}

/// Engine stand-in that renders nothing. Used headless, before a real
/// renderer is attached, and throughout the tests.
#[derive(Debug, Default)]
pub struct NullEngine {
    next_id: u64,
    contexts: HashMap<ContextId, String>,
}

impl NullEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contexts still alive, for assertions in tests.
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }
}

impl RenderEngine for NullEngine {
    fn create_context(&mut self, url: &str) -> ContextId {
        let id = ContextId(self.next_id);
        self.next_id += 1;
        self.contexts.insert(id, url.to_string());
        tracing::debug!(context = %id, url, "NullEngine created context");
        id
    }

    fn navigate(&mut self, context: ContextId, url: &str) {
        if let Some(current) = self.contexts.get_mut(&context) {
            *current = url.to_string();
        }
    }

    fn go_back(&mut self, _context: ContextId) {}

    fn go_forward(&mut self, _context: ContextId) {}

    fn reload(&mut self, _context: ContextId) {}

    fn destroy_context(&mut self, context: ContextId) {
        self.contexts.remove(&context);
    }

    fn current_url(&self, context: ContextId) -> Option<String> {
        self.contexts.get(&context).cloned()
    }

    fn capture_snapshot(&self, _context: ContextId) -> Option<Vec<u8>> {
        None
    }
}
