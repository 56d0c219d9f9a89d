//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Tab error: {0}")]
    Tab(#[from] sector_tabs::TabError),

    #[error("Workspace error: {0}")]
    Workspace(#[from] sector_workspaces::WorkspaceError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] sector_navigation::NavigationError),

    #[error("Storage error: {0}")]
    Storage(#[from] sector_storage::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for ShellError {
    fn from(e: std::io::Error) -> Self {
        ShellError::Config(e.to_string())
    }
}
