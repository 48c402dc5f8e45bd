// src/pipeline/filter.rs

//! Catalog application state and filter controller.
//!
//! The entity collection and the active selection live in one explicit state
//! object rather than ambient globals. The collection is replaced wholesale
//! per normalization pass and only read afterwards; a generation counter
//! keeps a superseded refresh from clobbering newer state.

use crate::models::{FilterState, ProjectEntity};

/// Owns the normalized catalog and the active filter selection.
#[derive(Debug, Default)]
pub struct CatalogState {
    projects: Vec<ProjectEntity>,
    filter: FilterState,
    generation: u64,
}

impl CatalogState {
    /// Create an empty state with the default `all` selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh and return its generation token.
    ///
    /// Starting a newer refresh invalidates every token handed out before
    /// it.
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Replace the catalog wholesale with the result of a refresh.
    ///
    /// Returns false and leaves the state untouched when the token is stale,
    /// i.e. a newer refresh has started since the token was issued.
    pub fn replace(&mut self, token: u64, projects: Vec<ProjectEntity>) -> bool {
        if token != self.generation {
            log::warn!(
                "Discarding stale catalog refresh (token {token}, current generation {})",
                self.generation
            );
            return false;
        }
        self.projects = projects;
        true
    }

    /// Change the active selection. Selecting one option deselects the
    /// previous one; there is never more than one active filter.
    pub fn select(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    /// The active selection.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The full normalized collection in normalization order.
    pub fn projects(&self) -> &[ProjectEntity] {
        &self.projects
    }

    /// The subset visible under the active selection, order preserved.
    pub fn visible(&self) -> Vec<&ProjectEntity> {
        self.projects
            .iter()
            .filter(|entity| self.filter.matches(entity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::models::{ImageRef, RawProjectRecord, UNKNOWN_LANGUAGE};

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

    fn populated_state() -> CatalogState {
        let mut state = CatalogState::new();
        let token = state.begin_refresh();
        state.replace(
            token,
            vec![
                entity("a", Some("Rust")),
                entity("b", Some("JavaScript")),
                entity("c", None),
                entity("d", Some("Rust")),
            ],
        );
        state
    }

    #[test]
    fn all_preserves_full_set_and_order() {
        let state = populated_state();
        let names: Vec<&str> = state.visible().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn language_selection_yields_exact_subset() {
        let mut state = populated_state();
        state.select(FilterState::Language("Rust".to_string()));
        let names: Vec<&str> = state.visible().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "d"]);
    }

    #[test]
    fn sentinel_breakdown_key_is_selectable() {
        let mut state = populated_state();
        state.select(FilterState::Language(UNKNOWN_LANGUAGE.to_string()));
        let names: Vec<&str> = state.visible().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c"]);
    }

    #[test]
    fn reselecting_replaces_previous_selection() {
        let mut state = populated_state();
        state.select(FilterState::Language("Rust".to_string()));
        state.select(FilterState::All);
        assert_eq!(state.filter(), &FilterState::All);
        assert_eq!(state.visible().len(), 4);
    }

    #[test]
    fn stale_refresh_is_rejected() {
        let mut state = CatalogState::new();
        let stale = state.begin_refresh();
        let fresh = state.begin_refresh();

        assert!(state.replace(fresh, vec![entity("fresh", Some("Rust"))]));
        assert!(!state.replace(stale, vec![entity("stale", Some("Go"))]));

        assert_eq!(state.projects().len(), 1);
        assert_eq!(state.projects()[0].name, "fresh");
    }
}
