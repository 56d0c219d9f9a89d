//! Address bar and tab-strip synchronization
//!
//! Consumes the registry's event queue and keeps the displayed address text
//! and per-tab labels consistent with the active tab. Every committed
//! url-change is forwarded to the history store exactly once, whether or not
//! the tab is visible.

use std::collections::HashMap;

use chrono::Utc;

use sector_navigation::HistoryStore;
use sector_tabs::{TabEvent, TabId, TabRegistry};

/// Character budget for tab strip labels
pub const LABEL_BUDGET: usize = 24;

pub struct AddressBar {
    /// Text shown in the address field
    text: String,
    /// Display labels by tab, truncated to the budget
    labels: HashMap<TabId, String>,
}

impl AddressBar {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            labels: HashMap::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self, id: TabId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    /// Apply one registry notification.
    pub fn apply(&mut self, event: &TabEvent, tabs: &TabRegistry, history: &HistoryStore) {
        match event {
            TabEvent::Created { id } => {
                if let Ok(tab) = tabs.get(*id) {
                    self.text = tab.url.clone();
                    self.labels.insert(*id, truncate_label(tab.display_title()));
                }
            }
            TabEvent::Activated { id } => {
                if let Ok(tab) = tabs.get(*id) {
                    self.text = tab.url.clone();
                }
            }
            TabEvent::UrlChanged { id, url } => {
                if tabs.active_id() == *id {
                    self.text = url.clone();
                }

                let title = tabs
                    .get(*id)
                    .ok()
                    .map(|t| t.title.clone())
                    .filter(|t| !t.is_empty());
                history.record(url, title.as_deref(), Utc::now());
            }
            TabEvent::TitleChanged { id, title } => {
                self.labels.insert(*id, truncate_label(title));
            }
            TabEvent::Closed { id } => {
                self.labels.remove(id);
            }
            TabEvent::LoadFailed { id, reason } => {
                tracing::debug!(tab_id = %id, reason, "Tab load failed");
            }
        }
    }
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_label(title: &str) -> String {
    if title.chars().count() <= LABEL_BUDGET {
        title.to_string()
    } else {
        let mut label: String = title.chars().take(LABEL_BUDGET - 1).collect();
        label.push('…');
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_untouched() {
        assert_eq!(truncate_label("Example"), "Example");
        assert_eq!(truncate_label(""), "");
    }

    #[test]
    fn test_long_title_truncated() {
        let long = "An unreasonably verbose page title for a small tab";
        let label = truncate_label(long);
        assert_eq!(label.chars().count(), LABEL_BUDGET);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn test_budget_boundary() {
        let exact: String = "x".repeat(LABEL_BUDGET);
        assert_eq!(truncate_label(&exact), exact);

        let over: String = "x".repeat(LABEL_BUDGET + 1);
        assert_eq!(truncate_label(&over).chars().count(), LABEL_BUDGET);
    }
}
