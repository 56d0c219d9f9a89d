//! Workspace error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Unknown workspace: {0}")]
    Unknown(String),

    #[error("No workspaces configured")]
    Empty,
}
