//! Sector Tab Management
//!
//! The registry is the exclusive owner of all open tabs. At least one tab is
//! open at all times; closing the sole remaining tab is refused. The
//! rendering engine is an external collaborator reached through the
//! [`RenderEngine`] trait, and its notifications arrive as [`PageEvent`]s
//! applied one at a time by the single control flow.

mod engine;
mod error;
mod event;
mod registry;
mod state;
mod tab;

pub use engine::{ContextId, NullEngine, RenderEngine};
pub use error::TabError;
pub use event::{PageEvent, TabEvent};
pub use registry::TabRegistry;
pub use state::LoadState;
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
