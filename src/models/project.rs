//! Normalized, display-ready project entity.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::raw::RawProjectRecord;

/// Sentinel language used when the feed reports no primary language.
pub const UNKNOWN_LANGUAGE: &str = "Code";

/// A resolved image reference for a project card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "src")]
pub enum ImageRef {
    /// A remote URL confirmed to exist by an existence probe
    Remote(String),

    /// A self-contained synthesized placeholder (data URI)
    Placeholder(String),
}

impl ImageRef {
    /// The embeddable image source.
    pub fn src(&self) -> &str {
        match self {
            ImageRef::Remote(url) => url,
            ImageRef::Placeholder(data) => data,
        }
    }
}

/// Build a language-usage breakdown from an optional primary language.
///
/// The result is never empty: an unknown language maps to the
/// [`UNKNOWN_LANGUAGE`] sentinel with full weight.
pub fn language_breakdown(language: Option<&str>) -> BTreeMap<String, u32> {
    let key = match language {
        Some(lang) if !lang.trim().is_empty() => lang.to_string(),
        _ => UNKNOWN_LANGUAGE.to_string(),
    };
    BTreeMap::from([(key, 100)])
}

/// A normalized project, immutable once created.
///
/// Created once per normalization pass and replaced wholesale on the next
/// pass, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectEntity {
    /// Feed identifier
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Primary language as reported by the feed
    pub language: Option<String>,

    /// Star count
    pub stargazers_count: u64,

    /// Fork count
    pub forks_count: u64,

    /// Creation timestamp (normalization sort key)
    pub created_at: DateTime<Utc>,

    /// Last-updated timestamp
    pub updated_at: DateTime<Utc>,

    /// Homepage URL for a deployed demo
    pub homepage: Option<String>,

    /// Canonical repository URL
    pub html_url: String,

    /// Resolved card image
    pub image: ImageRef,

    /// Language name to relative-usage weight; never empty
    pub language_breakdown: BTreeMap<String, u32>,

    /// Topic tags
    pub topics: Vec<String>,
}

impl ProjectEntity {
    /// Build an entity from a raw record and its resolved image.
    pub fn from_raw(raw: RawProjectRecord, image: ImageRef) -> Self {
        let language_breakdown = language_breakdown(raw.language.as_deref());
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            language: raw.language,
            stargazers_count: raw.stargazers_count,
            forks_count: raw.forks_count,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            homepage: raw.homepage,
            html_url: raw.html_url,
            image,
            language_breakdown,
            topics: raw.topics,
        }
    }

    /// Whether this entity's breakdown contains the given language key.
    pub fn has_language(&self, language: &str) -> bool {
        self.language_breakdown.contains_key(language)
    }

    /// Breakdown keys sorted by usage weight descending.
    ///
    /// Equal weights keep alphabetical order (the map iterates sorted by key
    /// and the sort is stable).
    pub fn languages_by_weight(&self) -> Vec<&str> {
        let mut entries: Vec<(&str, u32)> = self
            .language_breakdown
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(name, _)| name).collect()
    }

    /// Homepage URL when present and non-empty.
    pub fn demo_url(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn raw_with_language(language: Option<&str>) -> RawProjectRecord {
        RawProjectRecord {
            id: 1,
            name: "demo".to_string(),
            description: None,
            language: language.map(str::to_string),
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
            size: 1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            homepage: None,
            html_url: "https://github.com/user/demo".to_string(),
            topics: Vec::new(),
        }
    }

    #[test]
    fn breakdown_uses_primary_language() {
        let breakdown = language_breakdown(Some("Rust"));
        assert_eq!(breakdown.get("Rust"), Some(&100));
        assert_eq!(breakdown.len(), 1);
    }

    #[test]
    fn breakdown_never_empty() {
        assert_eq!(language_breakdown(None).get(UNKNOWN_LANGUAGE), Some(&100));
        assert_eq!(
            language_breakdown(Some("  ")).get(UNKNOWN_LANGUAGE),
            Some(&100)
        );
    }

    #[test]
    fn entity_without_language_is_filterable_by_sentinel() {
        let entity = ProjectEntity::from_raw(
            raw_with_language(None),
            ImageRef::Placeholder("data:".to_string()),
        );
        assert!(entity.has_language(UNKNOWN_LANGUAGE));
        assert!(!entity.has_language("Rust"));
    }

    #[test]
    fn demo_url_rejects_empty_homepage() {
        let mut raw = raw_with_language(Some("Rust"));
        raw.homepage = Some("   ".to_string());
        let entity = ProjectEntity::from_raw(raw, ImageRef::Placeholder("data:".to_string()));
        assert!(entity.demo_url().is_none());

        let mut raw = raw_with_language(Some("Rust"));
        raw.homepage = Some("https://demo.example".to_string());
        let entity = ProjectEntity::from_raw(raw, ImageRef::Placeholder("data:".to_string()));
        assert_eq!(entity.demo_url(), Some("https://demo.example"));
    }

    #[test]
    fn languages_sorted_by_weight() {
        let mut entity = ProjectEntity::from_raw(
            raw_with_language(Some("Rust")),
            ImageRef::Placeholder("data:".to_string()),
        );
        entity.language_breakdown =
            BTreeMap::from([("HTML".to_string(), 20), ("Rust".to_string(), 80)]);
        assert_eq!(entity.languages_by_weight(), vec!["Rust", "HTML"]);
    }
}
