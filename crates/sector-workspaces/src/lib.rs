//! Sector Workspaces
//!
//! A workspace (sector) is a named context with a default homepage, used to
//! quickly scope a fresh tab. Workspaces are configured once at startup and
//! immutable at runtime; all of them share one global tab pool.

mod error;
mod manager;
mod workspace;

pub use error::WorkspaceError;
pub use manager::WorkspaceManager;
pub use workspace::Workspace;

pub type Result<T> = std::result::Result<T, WorkspaceError>;
