//! Sector Storage Layer
//!
//! SQLite-based persistence for the browsing shell. The only durable data
//! this core writes is the append-ordered visit log; everything else is
//! rebuilt fresh on each run.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
