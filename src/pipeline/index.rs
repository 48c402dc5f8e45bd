// src/pipeline/index.rs

//! Language filter index builder.
//!
//! Derives the selectable filter options from the normalized entity set.
//! Options come from the single primary language of each entity, while
//! filter application later matches against breakdown keys. The breakdown is
//! currently derived solely from the primary language, so the two views
//! agree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{ALL, FilterState, ProjectEntity};

/// One selectable filter option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Selection key passed back through [`FilterState`]
    pub key: String,

    /// Display label
    pub label: String,
}

/// The ordered filter option list: the `all` sentinel first, then the
/// distinct languages alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterIndex {
    pub options: Vec<FilterOption>,
}

impl FilterIndex {
    /// Whether a selection key is one of the derived options.
    pub fn contains(&self, key: &str) -> bool {
        self.options.iter().any(|option| option.key == key)
    }

    /// Whether the given option is the active one under a selection.
    pub fn is_active(option: &FilterOption, filter: &FilterState) -> bool {
        option.key == filter.key()
    }
}

/// Build the filter index from the full entity collection.
///
/// Entities without a primary language contribute no option; they stay
/// reachable through the `all` view (and through their sentinel breakdown
/// key).
pub fn build_filter_index(entities: &[ProjectEntity]) -> FilterIndex {
    let languages: BTreeSet<&str> = entities
        .iter()
        .filter_map(|entity| entity.language.as_deref())
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .collect();

    let mut options = Vec::with_capacity(languages.len() + 1);
    options.push(FilterOption {
        key: ALL.to_string(),
        label: "All".to_string(),
    });
    // BTreeSet iteration is already alphabetical
    options.extend(languages.into_iter().map(|language| FilterOption {
        key: language.to_string(),
        label: language.to_string(),
    }));

    FilterIndex { options }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::models::{ImageRef, RawProjectRecord};

    use super::*;

    fn entity(name: &str, language: Option<&str>) -> ProjectEntity {
        let raw = RawProjectRecord {
            id: 1,
            name: name.to_string(),
            description: None,
            language: language.map(str::to_string),
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
            size: 1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            homepage: None,
            html_url: format!("https://github.com/user/{name}"),
            topics: Vec::new(),
        };
        ProjectEntity::from_raw(raw, ImageRef::Placeholder("data:".to_string()))
    }

    #[test]
    fn options_sorted_with_leading_sentinel() {
        let entities = vec![
            entity("a", Some("Rust")),
            entity("b", Some("C++")),
            entity("c", Some("JavaScript")),
        ];
        let index = build_filter_index(&entities);
        let keys: Vec<&str> = index.options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["all", "C++", "JavaScript", "Rust"]);
    }

    #[test]
    fn duplicate_languages_collapse() {
        let entities = vec![entity("a", Some("Rust")), entity("b", Some("Rust"))];
        let index = build_filter_index(&entities);
        assert_eq!(index.options.len(), 2);
    }

    #[test]
    fn missing_language_contributes_no_option() {
        let entities = vec![entity("a", Some("Rust")), entity("b", None)];
        let index = build_filter_index(&entities);
        assert!(index.contains("Rust"));
        assert!(!index.contains("Code"));
        assert_eq!(index.options.len(), 2);
    }

    #[test]
    fn empty_catalog_still_has_all() {
        let index = build_filter_index(&[]);
        assert_eq!(index.options.len(), 1);
        assert_eq!(index.options[0].key, "all");
    }

    #[test]
    fn active_flag_matches_selection() {
        let index = build_filter_index(&[entity("a", Some("Rust"))]);
        let rust = FilterState::Language("Rust".to_string());
        assert!(FilterIndex::is_active(&index.options[1], &rust));
        assert!(!FilterIndex::is_active(&index.options[0], &rust));
        assert!(FilterIndex::is_active(&index.options[0], &FilterState::All));
    }
}
