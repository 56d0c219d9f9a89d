//! Tab registry
//!
//! Exclusive owner of all open tabs. Every mutation happens synchronously on
//! the single control flow; notifications for the chrome layer queue up in
//! arrival order and are drained between commands.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::engine::RenderEngine;
use crate::error::TabError;
use crate::event::{PageEvent, TabEvent};
use crate::tab::{Tab, TabId};
use crate::Result;

pub struct TabRegistry {
    /// Open tabs by id
    tabs: HashMap<TabId, Tab>,
    /// Display order
    order: Vec<TabId>,
    /// Always refers to an open tab
    active: TabId,
    /// Ids of tabs closed during this process lifetime, so a late engine
    /// event is detected as stale instead of resurrecting a removed tab
    closed: HashSet<TabId>,
    /// Rendering-engine collaborator
    engine: Box<dyn RenderEngine>,
    /// Pending notifications, drained by the shell
    events: VecDeque<TabEvent>,
}

impl TabRegistry {
    /// Open the registry with its first tab already loading `initial_url`,
    /// so there is never a moment with zero open tabs.
    pub fn new(mut engine: Box<dyn RenderEngine>, initial_url: &str) -> Self {
        let context = engine.create_context(initial_url);
        let tab = Tab::new(context, initial_url);
        let id = tab.id;

        let mut tabs = HashMap::new();
        tabs.insert(id, tab);

        let mut events = VecDeque::new();
        events.push_back(TabEvent::Created { id });

        tracing::info!(tab_id = %id, url = initial_url, "Created tab");

        Self {
            tabs,
            order: vec![id],
            active: id,
            closed: HashSet::new(),
            engine,
            events,
        }
    }

    /// Create a tab bound to `url`, append it to the display order and make
    /// it active.
    pub fn create_tab(&mut self, url: &str) -> TabId {
        let context = self.engine.create_context(url);
        let tab = Tab::new(context, url);
        let id = tab.id;

        self.tabs.insert(id, tab);
        self.order.push(id);
        self.active = id;
        self.events.push_back(TabEvent::Created { id });

        tracing::info!(tab_id = %id, url, "Created tab");

        id
    }

    /// Close a tab. Refused when it is the only one left; if it was active,
    /// activation moves to the tab now occupying the same display index,
    /// clamped to the new tail.
    pub fn close_tab(&mut self, id: TabId) -> Result<()> {
        if self.order.len() == 1 && self.order[0] == id {
            tracing::debug!(tab_id = %id, "Refusing to close the last remaining tab");
            return Err(TabError::LastTabCloseRefused);
        }

        let Some(mut tab) = self.tabs.remove(&id) else {
            return Err(TabError::UnknownTab(id));
        };

        let index = self.order.iter().position(|t| *t == id).unwrap_or(0);
        self.order.retain(|t| *t != id);

        tab.close();
        self.engine.destroy_context(tab.context);
        self.closed.insert(id);
        self.events.push_back(TabEvent::Closed { id });

        tracing::info!(tab_id = %id, "Closed tab");

        if self.active == id {
            let next = self.order[index.min(self.order.len() - 1)];
            self.active = next;
            self.events.push_back(TabEvent::Activated { id: next });
        }

        Ok(())
    }

    /// Make `id` the active tab. Idempotent: re-activating the active tab
    /// emits nothing.
    pub fn set_active(&mut self, id: TabId) -> Result<()> {
        if !self.tabs.contains_key(&id) {
            return Err(TabError::UnknownTab(id));
        }
        if self.active == id {
            return Ok(());
        }

        self.active = id;
        self.events.push_back(TabEvent::Activated { id });
        Ok(())
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn active(&self) -> &Tab {
        // Invariant: the active id always refers to an open tab
        &self.tabs[&self.active]
    }

    pub fn get(&self, id: TabId) -> Result<&Tab> {
        self.tabs.get(&id).ok_or(TabError::UnknownTab(id))
    }

    /// Open tabs in display order
    pub fn list(&self) -> Vec<&Tab> {
        self.order.iter().filter_map(|id| self.tabs.get(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        // Never true while the registry is alive
        self.order.is_empty()
    }

    /// Move a tab to a new display position, clamped to the valid range.
    pub fn move_tab(&mut self, id: TabId, new_index: usize) -> Result<()> {
        let Some(current) = self.order.iter().position(|t| *t == id) else {
            return Err(TabError::UnknownTab(id));
        };

        let id = self.order.remove(current);
        let insert = new_index.min(self.order.len());
        self.order.insert(insert, id);
        Ok(())
    }

    /// Load `url` into a tab.
    pub fn navigate(&mut self, id: TabId, url: &str) -> Result<()> {
        let Some(tab) = self.tabs.get_mut(&id) else {
            return Err(TabError::UnknownTab(id));
        };

        tab.begin_navigation()?;
        self.engine.navigate(tab.context, url);
        Ok(())
    }

    pub fn go_back(&mut self, id: TabId) -> Result<()> {
        let Some(tab) = self.tabs.get_mut(&id) else {
            return Err(TabError::UnknownTab(id));
        };

        tab.begin_navigation()?;
        self.engine.go_back(tab.context);
        Ok(())
    }

    pub fn go_forward(&mut self, id: TabId) -> Result<()> {
        let Some(tab) = self.tabs.get_mut(&id) else {
            return Err(TabError::UnknownTab(id));
        };

        tab.begin_navigation()?;
        self.engine.go_forward(tab.context);
        Ok(())
    }

    pub fn reload(&mut self, id: TabId) -> Result<()> {
        let Some(tab) = self.tabs.get_mut(&id) else {
            return Err(TabError::UnknownTab(id));
        };

        tab.begin_navigation()?;
        self.engine.reload(tab.context);
        Ok(())
    }

    /// Apply one engine notification. Events for a tab closed earlier in
    /// this process are stale and silently discarded.
    pub fn apply_page_event(&mut self, id: TabId, event: PageEvent) -> Result<()> {
        if self.closed.contains(&id) {
            tracing::debug!(tab_id = %id, ?event, "Discarding stale event for closed tab");
            return Ok(());
        }

        let Some(tab) = self.tabs.get_mut(&id) else {
            return Err(TabError::UnknownTab(id));
        };

        match event {
            PageEvent::Committed { url } => {
                tab.mark_committed(url.clone())?;
                self.events.push_back(TabEvent::UrlChanged { id, url });
            }
            PageEvent::TitleChanged { title } => {
                tab.set_title(title.clone());
                self.events.push_back(TabEvent::TitleChanged { id, title });
            }
            PageEvent::Failed { reason } => {
                tab.mark_failed()?;
                self.events.push_back(TabEvent::LoadFailed { id, reason });
            }
        }

        Ok(())
    }

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        self.events.drain(..).collect()
    }

    /// The URL the engine currently reports for a tab's context.
    pub fn engine_url(&self, id: TabId) -> Result<Option<String>> {
        let tab = self.get(id)?;
        Ok(self.engine.current_url(tab.context))
    }

    /// Capture a visual snapshot of a tab's context.
    pub fn capture_snapshot(&self, id: TabId) -> Result<Option<Vec<u8>>> {
        let tab = self.get(id)?;
        Ok(self.engine.capture_snapshot(tab.context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullEngine;
    use crate::state::LoadState;

    fn registry() -> TabRegistry {
        TabRegistry::new(Box::new(NullEngine::new()), "https://start.example")
    }

    #[test]
    fn test_starts_with_one_active_tab() {
        let registry = registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active().url, "https://start.example");
        assert!(registry.active().is_loading());
    }

    #[test]
    fn test_create_appends_and_activates() {
        let mut registry = registry();
        let first = registry.active_id();

        let second = registry.create_tab("https://second.example");
        assert_eq!(registry.active_id(), second);

        let urls: Vec<&str> = registry.list().iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls, vec!["https://start.example", "https://second.example"]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_never_reaches_zero_tabs() {
        let mut registry = registry();
        registry.create_tab("https://a.example");
        registry.create_tab("https://b.example");

        // Close everything closable; the registry must bottom out at one tab
        loop {
            let id = registry.active_id();
            match registry.close_tab(id) {
                Ok(()) => {}
                Err(TabError::LastTabCloseRefused) => break,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_close_background_tab_keeps_active() {
        let mut registry = registry();
        let t1 = registry.active_id();
        let t2 = registry.create_tab("https://b.example");

        registry.set_active(t1).unwrap();
        registry.close_tab(t2).unwrap();

        let ids: Vec<TabId> = registry.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t1]);
        assert_eq!(registry.active_id(), t1);
    }

    #[test]
    fn test_close_active_moves_to_same_index() {
        let mut registry = registry();
        let t2 = registry.create_tab("https://b.example");
        let t3 = registry.create_tab("https://c.example");

        registry.set_active(t2).unwrap();
        registry.close_tab(t2).unwrap();
        // t3 now occupies index 1
        assert_eq!(registry.active_id(), t3);
    }

    #[test]
    fn test_close_active_tail_clamps() {
        let mut registry = registry();
        let t1 = registry.active_id();
        let t2 = registry.create_tab("https://b.example");

        registry.close_tab(t2).unwrap();
        assert_eq!(registry.active_id(), t1);
    }

    #[test]
    fn test_set_active_is_idempotent() {
        let mut registry = registry();
        let t2 = registry.create_tab("https://b.example");
        registry.drain_events();

        registry.set_active(t2).unwrap();
        registry.set_active(t2).unwrap();

        let activations = registry
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, TabEvent::Activated { .. }))
            .count();
        assert_eq!(activations, 0);

        let t1 = registry.list()[0].id;
        registry.set_active(t1).unwrap();
        registry.set_active(t1).unwrap();

        let activations = registry
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, TabEvent::Activated { .. }))
            .count();
        assert_eq!(activations, 1);
    }

    #[test]
    fn test_unknown_tab_surfaced() {
        let mut registry = registry();
        let t2 = registry.create_tab("https://b.example");
        registry.close_tab(t2).unwrap();

        assert!(matches!(
            registry.set_active(t2),
            Err(TabError::UnknownTab(_))
        ));
        assert!(matches!(
            registry.close_tab(t2),
            Err(TabError::UnknownTab(_))
        ));
    }

    #[test]
    fn test_stale_event_is_discarded() {
        let mut registry = registry();
        let t2 = registry.create_tab("https://b.example");
        registry.close_tab(t2).unwrap();
        registry.drain_events();

        // The engine already had this queued when the tab went away
        registry
            .apply_page_event(
                t2,
                PageEvent::Committed {
                    url: "https://late.example".to_string(),
                },
            )
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.get(t2).is_err());
        assert!(registry.drain_events().is_empty());
    }

    #[test]
    fn test_page_events_drive_state() {
        let mut registry = registry();
        let id = registry.active_id();

        registry
            .apply_page_event(
                id,
                PageEvent::Committed {
                    url: "https://start.example/".to_string(),
                },
            )
            .unwrap();
        assert_eq!(registry.active().state, LoadState::Loaded);
        assert_eq!(registry.active().url, "https://start.example/");

        registry
            .apply_page_event(
                id,
                PageEvent::TitleChanged {
                    title: "Start".to_string(),
                },
            )
            .unwrap();
        assert_eq!(registry.active().title, "Start");

        registry.reload(id).unwrap();
        assert!(registry.active().is_loading());

        registry
            .apply_page_event(
                id,
                PageEvent::Failed {
                    reason: "dns".to_string(),
                },
            )
            .unwrap();
        assert_eq!(registry.active().state, LoadState::Failed);
    }

    #[test]
    fn test_navigate_updates_engine_context() {
        let mut registry = registry();
        let id = registry.active_id();

        registry.navigate(id, "https://next.example").unwrap();
        assert!(registry.active().is_loading());
        assert_eq!(
            registry.engine_url(id).unwrap().as_deref(),
            Some("https://next.example")
        );
    }

    #[test]
    fn test_move_tab_reorders() {
        let mut registry = registry();
        let t1 = registry.active_id();
        let t2 = registry.create_tab("https://b.example");
        let t3 = registry.create_tab("https://c.example");

        registry.move_tab(t3, 0).unwrap();
        let ids: Vec<TabId> = registry.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t3, t1, t2]);

        // Out-of-range index clamps to the tail
        registry.move_tab(t3, 99).unwrap();
        let ids: Vec<TabId> = registry.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t1, t2, t3]);
    }
}
