//! Raw project record as delivered by the aggregation feed.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A repository record in the shape the aggregation worker returns.
///
/// Field names follow the feed payload exactly so the record deserializes
/// straight from the JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawProjectRecord {
    /// Unique identifier within one fetch result
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Free-form description, absent for undescribed repositories
    #[serde(default)]
    pub description: Option<String>,

    /// Primary language, absent when the feed could not detect one
    #[serde(default)]
    pub language: Option<String>,

    /// Star count
    #[serde(default)]
    pub stargazers_count: u64,

    /// Fork count
    #[serde(default)]
    pub forks_count: u64,

    /// Whether this repository is a fork of another
    #[serde(default)]
    pub fork: bool,

    /// Size metric reported by the feed; zero means an empty repository
    #[serde(default)]
    pub size: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last-updated timestamp
    pub updated_at: DateTime<Utc>,

    /// Homepage URL for a deployed demo, often an empty string
    #[serde(default)]
    pub homepage: Option<String>,

    /// Canonical repository URL
    pub html_url: String,

    /// Topic tags
    #[serde(default)]
    pub topics: Vec<String>,
}

impl RawProjectRecord {
    /// Built-in sample catalog used when the feed is unavailable.
    ///
    /// Every entry is a non-fork with a positive size so the whole set
    /// survives normalization and the page is never empty.
    pub fn sample_catalog() -> Vec<RawProjectRecord> {
        vec![
            Self::sample(
                1,
                "mubin-portfolio",
                "Modern responsive portfolio website with dark theme and techy animations",
                Some("JavaScript"),
                Utc.with_ymd_and_hms(2024, 9, 14, 0, 0, 0).unwrap(),
            ),
            Self::sample(
                2,
                "cpp-projects",
                "Collection of C++ programming projects and algorithms",
                Some("C++"),
                Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap(),
            ),
            Self::sample(
                3,
                "java-applications",
                "Java-based desktop and console applications",
                Some("Java"),
                Utc.with_ymd_and_hms(2023, 11, 20, 0, 0, 0).unwrap(),
            ),
            Self::sample(
                4,
                "web-development",
                "Frontend web development projects using HTML, CSS, and JavaScript",
                Some("HTML"),
                Utc.with_ymd_and_hms(2023, 3, 8, 0, 0, 0).unwrap(),
            ),
        ]
    }

    fn sample(
        id: u64,
        name: &str,
        description: &str,
        language: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> RawProjectRecord {
        RawProjectRecord {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            language: language.map(str::to_string),
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
            size: 1,
            created_at,
            updated_at: created_at,
            homepage: None,
            html_url: format!("https://github.com/mubin25-dodu/{name}"),
            topics: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_shape() {
        let json = r#"{
            "id": 42,
            "name": "demo",
            "description": null,
            "language": "Rust",
            "stargazers_count": 3,
            "forks_count": 1,
            "fork": false,
            "size": 120,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T12:30:00Z",
            "homepage": "",
            "html_url": "https://github.com/user/demo",
            "topics": ["cli", "rust"]
        }"#;

        let record: RawProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.language.as_deref(), Some("Rust"));
        assert_eq!(record.topics.len(), 2);
        assert!(record.description.is_none());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": 1,
            "name": "bare",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "html_url": "https://github.com/user/bare"
        }"#;

        let record: RawProjectRecord = serde_json::from_str(json).unwrap();
        assert!(!record.fork);
        assert_eq!(record.size, 0);
        assert!(record.topics.is_empty());
    }

    #[test]
    fn sample_catalog_survives_normalization_filter() {
        let samples = RawProjectRecord::sample_catalog();
        assert!(samples.len() >= 4);
        assert!(samples.iter().all(|r| !r.fork && r.size > 0));
    }
}
