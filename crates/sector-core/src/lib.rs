//! Sector Core
//!
//! Central coordination layer for the Sector browsing shell. The shell owns
//! all state; the rendering engine is a stateless collaborator behind the
//! [`RenderEngine`] trait. Every mutation happens synchronously on one
//! event-driven control flow, so the core needs no locks.

mod address_bar;
mod config;
mod error;
mod session;
mod shell;

pub use address_bar::{AddressBar, LABEL_BUDGET};
pub use config::Config;
pub use error::ShellError;
pub use session::SessionState;
pub use shell::Shell;

// Re-export core components
pub use sector_navigation::{
    HistoryFilter, HistoryRecord, HistoryStore, NavigationError, NavigationTarget, QueryRouter,
    SearchEngine,
};
pub use sector_storage::{Database, StorageError};
pub use sector_tabs::{
    ContextId, LoadState, NullEngine, PageEvent, RenderEngine, Tab, TabError, TabEvent, TabId,
    TabRegistry,
};
pub use sector_workspaces::{Workspace, WorkspaceError, WorkspaceManager};

pub type Result<T> = std::result::Result<T, ShellError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
