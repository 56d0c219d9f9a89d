//! Address input routing
//!
//! Trimmed input containing a dot and no whitespace is a direct URL
//! (a default scheme is prepended when none is given); everything else is a
//! search against the selected engine. The dot heuristic intentionally
//! misreads a bare filename like `notes.txt` as a URL; that limitation is
//! accepted rather than special-cased.

use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;

use crate::error::NavigationError;
use crate::Result;

/// Scheme prepended to schemeless direct URLs
pub const DEFAULT_SCHEME: &str = "https://";

/// Substitution point in a search engine template
const QUERY_PLACEHOLDER: &str = "%s";

/// One configured search engine. The template carries exactly one `%s`
/// substitution point, validated when the router is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEngine {
    pub name: String,
    pub template: String,
}

impl SearchEngine {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

/// Resolved outcome of address-bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationTarget {
    /// Literal navigation to the URL the user typed
    Direct { url: String },
    /// Search via a configured engine
    Search { engine: String, url: String },
}

impl NavigationTarget {
    pub fn url(&self) -> &str {
        match self {
            NavigationTarget::Direct { url } => url,
            NavigationTarget::Search { url, .. } => url,
        }
    }
}

pub struct QueryRouter {
    engines: Vec<SearchEngine>,
    /// Index into `engines`; resolved at construction so fallback can never
    /// miss at route time
    default: usize,
}

impl QueryRouter {
    /// Build the router from static configuration, validating every engine
    /// template up front.
    pub fn new(engines: Vec<SearchEngine>, default_engine: &str) -> Result<Self> {
        if engines.is_empty() {
            return Err(NavigationError::NoEngines);
        }

        for engine in &engines {
            if engine.template.matches(QUERY_PLACEHOLDER).count() != 1 {
                return Err(NavigationError::InvalidTemplate(engine.name.clone()));
            }
        }

        let default = engines
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(default_engine))
            .ok_or_else(|| NavigationError::UnknownDefaultEngine(default_engine.to_string()))?;

        Ok(Self { engines, default })
    }

    pub fn engines(&self) -> &[SearchEngine] {
        &self.engines
    }

    pub fn default_engine(&self) -> &SearchEngine {
        &self.engines[self.default]
    }

    /// Resolve address-bar input. Never fails: an unknown engine name falls
    /// back to the default engine so navigation always proceeds.
    pub fn route(&self, input: &str, engine: &str) -> NavigationTarget {
        let input = input.trim();

        if input.is_empty() {
            return NavigationTarget::Direct {
                url: "about:blank".to_string(),
            };
        }

        if looks_like_url(input) {
            return NavigationTarget::Direct {
                url: ensure_scheme(input),
            };
        }

        let engine = self.engine_or_default(engine);
        let query: String = byte_serialize(input.as_bytes()).collect();

        NavigationTarget::Search {
            engine: engine.name.clone(),
            url: engine.template.replace(QUERY_PLACEHOLDER, &query),
        }
    }

    fn engine_or_default(&self, name: &str) -> &SearchEngine {
        match self
            .engines
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
        {
            Some(engine) => engine,
            None => {
                tracing::warn!(engine = name, "Unknown search engine, using default");
                &self.engines[self.default]
            }
        }
    }
}

fn has_explicit_scheme(input: &str) -> bool {
    input.starts_with("http://")
        || input.starts_with("https://")
        || input.starts_with("file://")
        || input.starts_with("about:")
}

fn looks_like_url(input: &str) -> bool {
    // Whitespace anywhere overrides dot presence
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    has_explicit_scheme(input) || input.contains('.')
}

fn ensure_scheme(input: &str) -> String {
    if has_explicit_scheme(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> QueryRouter {
        QueryRouter::new(
            vec![
                SearchEngine::new("Google", "https://www.google.com/search?q=%s"),
                SearchEngine::new("DuckDuckGo", "https://duckduckgo.com/?q=%s"),
            ],
            "Google",
        )
        .unwrap()
    }

    #[test]
    fn test_domain_gets_scheme() {
        let target = router().route("example.com", "Google");
        assert_eq!(
            target,
            NavigationTarget::Direct {
                url: "https://example.com".to_string()
            }
        );
    }

    #[test]
    fn test_full_url_passes_through() {
        let target = router().route("https://example.com/a?b=c", "Google");
        assert_eq!(target.url(), "https://example.com/a?b=c");

        let target = router().route("about:blank", "Google");
        assert_eq!(target.url(), "about:blank");
    }

    #[test]
    fn test_query_is_searched() {
        let target = router().route("weather today", "Google");
        match target {
            NavigationTarget::Search { engine, url } => {
                assert_eq!(engine, "Google");
                assert_eq!(url, "https://www.google.com/search?q=weather+today");
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_space_overrides_dot() {
        // "a.b c" carries a dot but also whitespace, so it is a search
        let target = router().route("a.b c", "Google");
        assert!(matches!(target, NavigationTarget::Search { .. }));
    }

    #[test]
    fn test_input_is_trimmed() {
        let target = router().route("  example.com  ", "Google");
        assert_eq!(target.url(), "https://example.com");
    }

    #[test]
    fn test_empty_input_goes_blank() {
        let target = router().route("   ", "Google");
        assert_eq!(target.url(), "about:blank");
    }

    #[test]
    fn test_unknown_engine_falls_back() {
        let target = router().route("rust programming", "AltaVista");
        match target {
            NavigationTarget::Search { engine, url } => {
                assert_eq!(engine, "Google");
                assert!(url.contains("rust+programming"));
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_engine_lookup_is_case_insensitive() {
        let target = router().route("rust", "duckduckgo");
        match target {
            NavigationTarget::Search { engine, .. } => assert_eq!(engine, "DuckDuckGo"),
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_query_is_escaped() {
        let target = router().route("c++ & rust?", "Google");
        match target {
            NavigationTarget::Search { url, .. } => {
                assert_eq!(url, "https://www.google.com/search?q=c%2B%2B+%26+rust%3F");
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_template_validation() {
        let err = QueryRouter::new(
            vec![SearchEngine::new("Broken", "https://broken.example/")],
            "Broken",
        );
        assert!(matches!(err, Err(NavigationError::InvalidTemplate(_))));

        let err = QueryRouter::new(
            vec![SearchEngine::new("Twice", "https://t.example/?a=%s&b=%s")],
            "Twice",
        );
        assert!(matches!(err, Err(NavigationError::InvalidTemplate(_))));

        let err = QueryRouter::new(
            vec![SearchEngine::new("Google", "https://www.google.com/search?q=%s")],
            "Missing",
        );
        assert!(matches!(err, Err(NavigationError::UnknownDefaultEngine(_))));

        assert!(matches!(
            QueryRouter::new(Vec::new(), "Google"),
            Err(NavigationError::NoEngines)
        ));
    }
}
