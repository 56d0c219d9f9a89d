//! Main shell state container
//!
//! One instance owns the whole control surface: tab registry, query router,
//! workspace manager, history store and address bar. Every command mutates
//! state synchronously and then drains the registry's notifications into the
//! address bar, so the visible chrome can never observe a half-applied
//! mutation.

use sector_navigation::{HistoryFilter, HistoryRecord, HistoryStore, NavigationTarget, QueryRouter};
use sector_storage::Database;
use sector_tabs::{PageEvent, RenderEngine, TabId, TabRegistry};
use sector_workspaces::WorkspaceManager;

use crate::address_bar::AddressBar;
use crate::config::Config;
use crate::session::SessionState;
use crate::Result;

pub struct Shell {
    config: Config,
    /// Open tabs; shared across all workspaces
    tabs: TabRegistry,
    /// Address input classification
    router: QueryRouter,
    /// Sector table and active sector
    workspaces: WorkspaceManager,
    /// Append-only visit log
    history: HistoryStore,
    /// Displayed address text and tab labels
    address_bar: AddressBar,
    /// Ephemeral per-run UI state
    session: SessionState,
}

impl Shell {
    /// Build the shell from static configuration. The first tab opens the
    /// initial workspace's homepage, so the registry is never empty.
    pub fn new(config: Config, engine: Box<dyn RenderEngine>) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?;
        let history = HistoryStore::new(db);
        let router = QueryRouter::new(config.search_engines.clone(), &config.default_engine)?;
        let workspaces =
            WorkspaceManager::new(config.workspaces.clone(), &config.initial_workspace)?;

        let homepage = workspaces.active().homepage.clone();
        let tabs = TabRegistry::new(engine, &homepage);
        let session = SessionState::new(config.default_engine.clone());

        let mut shell = Self {
            config,
            tabs,
            router,
            workspaces,
            history,
            address_bar: AddressBar::new(),
            session,
        };

        shell.pump();
        tracing::info!(workspace = %shell.workspaces.active().name, "Shell initialized");

        Ok(shell)
    }

    /// Dispatch pending registry notifications to the address bar.
    fn pump(&mut self) {
        let events = self.tabs.drain_events();
        for event in &events {
            self.address_bar.apply(event, &self.tabs, &self.history);
        }
    }

    // === Tab commands ===

    /// Open a tab on the active workspace's homepage.
    pub fn new_tab(&mut self) -> TabId {
        let homepage = self.workspaces.active().homepage.clone();
        self.open_tab(&homepage)
    }

    /// Open a tab on an explicit URL (search result, ancillary page).
    pub fn open_tab(&mut self, url: &str) -> TabId {
        let id = self.tabs.create_tab(url);
        self.pump();
        id
    }

    pub fn close_tab(&mut self, id: TabId) -> Result<()> {
        self.tabs.close_tab(id)?;
        self.pump();
        Ok(())
    }

    pub fn activate_tab(&mut self, id: TabId) -> Result<()> {
        self.tabs.set_active(id)?;
        self.pump();
        Ok(())
    }

    pub fn move_tab(&mut self, id: TabId, new_index: usize) -> Result<()> {
        self.tabs.move_tab(id, new_index)?;
        Ok(())
    }

    // === Workspace commands ===

    pub fn switch_workspace(&mut self, name: &str) -> Result<TabId> {
        let id = self.workspaces.switch(name, &mut self.tabs)?;
        self.pump();
        Ok(id)
    }

    // === Navigation commands ===

    /// Pick the engine the address bar searches with. Unknown names are
    /// kept as typed; routing falls back to the default engine for them.
    pub fn select_engine(&mut self, name: &str) {
        self.session.selected_engine = name.to_string();
    }

    /// Resolve address-bar input and navigate the active tab to it.
    pub fn submit_address_input(&mut self, input: &str) -> Result<NavigationTarget> {
        let target = self.router.route(input, &self.session.selected_engine);
        let active = self.tabs.active_id();

        tracing::debug!(input, target = ?target, "Routed address input");

        self.tabs.navigate(active, target.url())?;
        self.pump();
        Ok(target)
    }

    pub fn navigate_back(&mut self) -> Result<()> {
        let active = self.tabs.active_id();
        self.tabs.go_back(active)?;
        self.pump();
        Ok(())
    }

    pub fn navigate_forward(&mut self) -> Result<()> {
        let active = self.tabs.active_id();
        self.tabs.go_forward(active)?;
        self.pump();
        Ok(())
    }

    pub fn reload(&mut self) -> Result<()> {
        let active = self.tabs.active_id();
        self.tabs.reload(active)?;
        self.pump();
        Ok(())
    }

    // === Engine notifications ===

    /// Apply one engine notification from the ordered inbound queue. Events
    /// for closed tabs are discarded inside the registry.
    pub fn handle_page_event(&mut self, id: TabId, event: PageEvent) -> Result<()> {
        self.tabs.apply_page_event(id, event)?;
        self.pump();
        Ok(())
    }

    // === History ===

    pub fn query_history(&self, filter: &HistoryFilter) -> Result<Vec<HistoryRecord>> {
        Ok(self.history.query(filter)?)
    }

    // === Session / chrome state ===

    pub fn toggle_sidebar(&mut self) -> bool {
        self.session.toggle_sidebar()
    }

    pub fn bump_trackers_blocked(&mut self) {
        self.session.bump_trackers_blocked();
    }

    pub fn capture_active_snapshot(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.tabs.capture_snapshot(self.tabs.active_id())?)
    }

    // === Accessors ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    pub fn workspaces(&self) -> &WorkspaceManager {
        &self.workspaces
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Text currently shown in the address field
    pub fn address_text(&self) -> &str {
        self.address_bar.text()
    }

    /// Display label for a tab, truncated to the label budget
    pub fn tab_label(&self, id: TabId) -> Option<&str> {
        self.address_bar.label(id)
    }

    /// Sidebar label of the active workspace
    pub fn workspace_label(&self) -> &str {
        self.workspaces.label()
    }
}
