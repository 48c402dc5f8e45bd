// src/pipeline/stats.rs

//! Headline catalog totals.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::RawProjectRecord;

/// Totals computed over the raw record set, before normalization filtering,
/// so the counters reflect the whole profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Repository count
    pub repositories: usize,

    /// Star total
    pub stars: u64,

    /// Fork total
    pub forks: u64,

    /// Distinct primary languages
    pub languages: usize,
}

impl CatalogStats {
    /// Compute totals from the fetched records.
    pub fn from_records(records: &[RawProjectRecord]) -> Self {
        let languages: HashSet<&str> = records
            .iter()
            .filter_map(|record| record.language.as_deref())
            .filter(|language| !language.trim().is_empty())
            .collect();

        Self {
            repositories: records.len(),
            stars: records.iter().map(|r| r.stargazers_count).sum(),
            forks: records.iter().map(|r| r.forks_count).sum(),
            languages: languages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn record(language: Option<&str>, stars: u64, forks: u64) -> RawProjectRecord {
        RawProjectRecord {
            id: 1,
            name: "r".to_string(),
            description: None,
            language: language.map(str::to_string),
            stargazers_count: stars,
            forks_count: forks,
            fork: false,
            size: 1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            homepage: None,
            html_url: "https://github.com/user/r".to_string(),
            topics: Vec::new(),
        }
    }

    #[test]
    fn totals_sum_over_all_records() {
        let records = vec![
            record(Some("Rust"), 3, 1),
            record(Some("Rust"), 2, 0),
            record(Some("Go"), 5, 4),
            record(None, 1, 1),
        ];
        let stats = CatalogStats::from_records(&records);
        assert_eq!(stats.repositories, 4);
        assert_eq!(stats.stars, 11);
        assert_eq!(stats.forks, 6);
        assert_eq!(stats.languages, 2);
    }

    #[test]
    fn empty_set_is_all_zero() {
        assert_eq!(CatalogStats::from_records(&[]), CatalogStats::default());
    }
}
