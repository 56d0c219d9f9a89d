//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Search engine {0:?} must contain exactly one %s placeholder")]
    InvalidTemplate(String),

    #[error("No search engines configured")]
    NoEngines,

    #[error("Default search engine is not configured: {0}")]
    UnknownDefaultEngine(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sector_storage::StorageError),
}
