//! Workspace data structure

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Name the user switches by, e.g. "Work"
    pub name: String,
    /// Homepage opened when the workspace is entered
    pub homepage: String,
    /// Short label shown in the sidebar
    pub label: String,
}

impl Workspace {
    pub fn new(
        name: impl Into<String>,
        homepage: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            homepage: homepage.into(),
            label: label.into(),
        }
    }
}
