//! Visit history
//!
//! Append-only log of committed navigations. Rows are never updated or
//! deleted here; writes are fire-and-forget so navigation never depends on
//! storage availability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use sector_storage::Database;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub visited_at: DateTime<Utc>,
}

/// Filter for the external history viewer
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Case-insensitive substring over url and title
    pub contains: Option<String>,
    /// Row cap; unlimited when absent
    pub limit: Option<usize>,
}

pub struct HistoryStore {
    db: Database,
}

impl HistoryStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Append one visit. Persistence failures are logged and swallowed: the
    /// caller is mid-navigation and must not be blocked by storage.
    pub fn record(&self, url: &str, title: Option<&str>, visited_at: DateTime<Utc>) {
        if let Err(e) = self.insert(url, title, visited_at) {
            tracing::warn!(url, error = %e, "Failed to persist visit");
        }
    }

    fn insert(&self, url: &str, title: Option<&str>, visited_at: DateTime<Utc>) -> Result<()> {
        let title = title.map(str::trim).filter(|t| !t.is_empty());

        Ok(self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO visits (url, title, visited_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![url, title, visited_at.to_rfc3339()],
            )?;
            Ok(())
        })?)
    }

    /// Visits newest first. Materialized per call; re-invoke to restart.
    pub fn query(&self, filter: &HistoryFilter) -> Result<Vec<HistoryRecord>> {
        // LIMIT -1 disables the cap in SQLite
        let limit = filter.limit.map(|l| l as i64).unwrap_or(-1);
        let pattern = filter
            .contains
            .as_ref()
            .map(|c| format!("%{}%", c.to_lowercase()));

        Ok(self.db.with_connection(|conn| {
            let records = match pattern {
                Some(pattern) => {
                    let mut stmt = conn.prepare(
                        "SELECT id, url, title, visited_at FROM visits
                         WHERE LOWER(url) LIKE ?1 OR LOWER(IFNULL(title, '')) LIKE ?1
                         ORDER BY visited_at DESC, id DESC
                         LIMIT ?2",
                    )?;

                    let records: Vec<HistoryRecord> = stmt
                        .query_map(rusqlite::params![pattern, limit], |row| {
                            let visited_str: String = row.get(3)?;
                            let visited_at = DateTime::parse_from_rfc3339(&visited_str)
                                .map(|dt| dt.with_timezone(&Utc))
                                .unwrap_or_else(|_| Utc::now());

                            Ok(HistoryRecord {
                                id: row.get(0)?,
                                url: row.get(1)?,
                                title: row.get(2)?,
                                visited_at,
                            })
                        })?
                        .filter_map(|r| r.ok())
                        .collect();

                    records
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT id, url, title, visited_at FROM visits
                         ORDER BY visited_at DESC, id DESC
                         LIMIT ?1",
                    )?;

                    let records: Vec<HistoryRecord> = stmt
                        .query_map([limit], |row| {
                            let visited_str: String = row.get(3)?;
                            let visited_at = DateTime::parse_from_rfc3339(&visited_str)
                                .map(|dt| dt.with_timezone(&Utc))
                                .unwrap_or_else(|_| Utc::now());

                            Ok(HistoryRecord {
                                id: row.get(0)?,
                                url: row.get(1)?,
                                title: row.get(2)?,
                                visited_at,
                            })
                        })?
                        .filter_map(|r| r.ok())
                        .collect();

                    records
                }
            };

            Ok(records)
        })?)
    }

    /// Total number of recorded visits
    pub fn count(&self) -> Result<i64> {
        Ok(self.db.with_connection(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM visits", [], |row| row.get(0))?;
            Ok(count)
        })?)
    }
}

impl Clone for HistoryStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn store() -> HistoryStore {
        HistoryStore::new(Database::open_in_memory().unwrap())
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_record_and_query_newest_first() {
        let store = store();
        store.record("https://example.com", Some("Example"), at(0));
        store.record("https://rust-lang.org", Some("Rust"), at(10));

        let records = store.query(&HistoryFilter::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://rust-lang.org");
        assert_eq!(records[1].url, "https://example.com");
    }

    #[test]
    fn test_revisit_appends_a_new_row() {
        let store = store();
        store.record("https://example.com", Some("Example"), at(0));
        store.record("https://example.com", Some("Example"), at(5));

        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_filter_and_limit() {
        let store = store();
        store.record("https://example.com", Some("Example Domain"), at(0));
        store.record("https://rust-lang.org", Some("Rust"), at(10));
        store.record("https://example.com/docs", None, at(20));

        let records = store
            .query(&HistoryFilter {
                contains: Some("example".to_string()),
                limit: None,
            })
            .unwrap();
        assert_eq!(records.len(), 2);

        let records = store
            .query(&HistoryFilter {
                contains: None,
                limit: Some(1),
            })
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://example.com/docs");
    }

    #[test]
    fn test_empty_title_stored_as_null() {
        let store = store();
        store.record("https://example.com", Some("   "), at(0));

        let records = store.query(&HistoryFilter::default()).unwrap();
        assert_eq!(records[0].title, None);
    }
}
