//! Language filter selection state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::project::ProjectEntity;

/// The sentinel key for the unfiltered view.
pub const ALL: &str = "all";

/// Current language filter selection.
///
/// Exactly one value is active at a time; mutated only by explicit user
/// selection and never persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterState {
    /// Show every project
    #[default]
    All,

    /// Show projects whose language breakdown contains this key
    Language(String),
}

impl FilterState {
    /// Parse a user-supplied filter argument; `all` (any case) or absence
    /// selects the unfiltered view.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            None => FilterState::All,
            Some(value) if value.is_empty() || value.eq_ignore_ascii_case(ALL) => FilterState::All,
            Some(value) => FilterState::Language(value.to_string()),
        }
    }

    /// Whether the given entity is visible under this selection.
    pub fn matches(&self, entity: &ProjectEntity) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Language(language) => entity.has_language(language),
        }
    }

    /// The option key this selection corresponds to.
    pub fn key(&self) -> &str {
        match self {
            FilterState::All => ALL,
            FilterState::Language(language) => language,
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
