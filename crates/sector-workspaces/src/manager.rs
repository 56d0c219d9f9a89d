//! Workspace manager
//!
//! Maps workspace names to homepages and drives the switch flow. Switching
//! opens a homepage tab through the registry; there is no per-workspace
//! isolation of browsing contexts, all workspaces share the global pool.

use sector_tabs::{TabId, TabRegistry};

use crate::error::WorkspaceError;
use crate::workspace::Workspace;
use crate::Result;

pub struct WorkspaceManager {
    /// Static configuration, immutable after startup
    workspaces: Vec<Workspace>,
    /// Index into `workspaces`
    active: usize,
}

impl WorkspaceManager {
    pub fn new(workspaces: Vec<Workspace>, initial: &str) -> Result<Self> {
        if workspaces.is_empty() {
            return Err(WorkspaceError::Empty);
        }

        let active = workspaces
            .iter()
            .position(|w| w.name.eq_ignore_ascii_case(initial))
            .ok_or_else(|| WorkspaceError::Unknown(initial.to_string()))?;

        Ok(Self { workspaces, active })
    }

    pub fn active(&self) -> &Workspace {
        &self.workspaces[self.active]
    }

    /// Sidebar label of the active workspace
    pub fn label(&self) -> &str {
        &self.active().label
    }

    pub fn list(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn get(&self, name: &str) -> Option<&Workspace> {
        self.workspaces
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }

    /// Switch the active workspace and open its homepage in a fresh tab.
    /// An unknown name leaves the active workspace and the tab pool
    /// untouched.
    pub fn switch(&mut self, name: &str, tabs: &mut TabRegistry) -> Result<TabId> {
        let index = self
            .workspaces
            .iter()
            .position(|w| w.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| WorkspaceError::Unknown(name.to_string()))?;

        self.active = index;
        let workspace = &self.workspaces[index];
        let id = tabs.create_tab(&workspace.homepage);

        tracing::info!(
            workspace = %workspace.name,
            tab_id = %id,
            "Switched workspace"
        );

        Ok(id)
    }
}
