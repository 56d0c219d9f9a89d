//! Tab error types

use thiserror::Error;

use crate::state::LoadState;
use crate::tab::TabId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    UnknownTab(TabId),

    #[error("Cannot close the last remaining tab")]
    LastTabCloseRefused,

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: LoadState, to: LoadState },
}
