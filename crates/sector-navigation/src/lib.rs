//! Sector Navigation
//!
//! Address-bar input resolution and the persisted visit history.
//! Routing never fails: anything that does not look like a URL becomes a
//! search against a configured engine, falling back to the default engine
//! for unknown engine names.

mod error;
mod history;
mod router;

pub use error::NavigationError;
pub use history::{HistoryFilter, HistoryRecord, HistoryStore};
pub use router::{NavigationTarget, QueryRouter, SearchEngine, DEFAULT_SCHEME};

pub type Result<T> = std::result::Result<T, NavigationError>;
