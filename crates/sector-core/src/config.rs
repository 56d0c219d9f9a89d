//! Shell configuration
//!
//! Built once at startup and handed into the managers; nothing here is
//! mutable at runtime.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use sector_navigation::SearchEngine;
use sector_workspaces::Workspace;

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the history database file
    pub database_path: PathBuf,
    /// Search engine table; templates carry one %s substitution point
    pub search_engines: Vec<SearchEngine>,
    /// Engine used when the selected name is unknown
    pub default_engine: String,
    /// Workspace sectors shown in the sidebar
    pub workspaces: Vec<Workspace>,
    /// Workspace entered on startup
    pub initial_workspace: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("sector.db"),
            search_engines: vec![
                SearchEngine::new("Google", "https://www.google.com/search?q=%s"),
                SearchEngine::new("DuckDuckGo", "https://duckduckgo.com/?q=%s"),
                SearchEngine::new("Bing", "https://www.bing.com/search?q=%s"),
            ],
            default_engine: "Google".to_string(),
            workspaces: vec![
                Workspace::new("AI", "https://chat.openai.com", "A"),
                Workspace::new("Work", "https://www.google.com", "W"),
                Workspace::new("Personal", "https://www.google.com", "P"),
            ],
            initial_workspace: "Personal".to_string(),
        }
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Sector"))
            .unwrap_or_else(|| PathBuf::from(".sector"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Simple dirs implementation for the platform data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
