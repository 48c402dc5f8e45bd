//! Storage abstractions for catalog persistence.
//!
//! One build produces two artifacts:
//! - `catalog.json` - the normalized snapshot (entities + stats), read back
//!   by offline re-renders and `info`
//! - `index.html` - the rendered page
//!
//! All state is replaced wholesale per build; nothing is merged.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ProjectEntity;
use crate::pipeline::CatalogStats;

// Re-export for convenience
pub use local::LocalStorage;

/// A persisted catalog snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// ISO 8601 timestamp of the build
    pub generated_at: DateTime<Utc>,

    /// Total entity count
    pub count: usize,

    /// Whether the build used the sample catalog fallback
    pub used_fallback: bool,

    /// Headline totals for the page header
    pub stats: CatalogStats,

    /// The normalized entities in display order
    pub projects: Vec<ProjectEntity>,
}

impl Snapshot {
    pub fn new(projects: Vec<ProjectEntity>, stats: CatalogStats, used_fallback: bool) -> Self {
        Self {
            generated_at: Utc::now(),
            count: projects.len(),
            used_fallback,
            stats,
            projects,
        }
    }
}

/// Trait for catalog storage backends.
#[async_trait]
pub trait CatalogStorage: Send + Sync {
    /// Persist the snapshot, replacing any previous one.
    async fn write_snapshot(&self, snapshot: &Snapshot) -> Result<()>;

    /// Load the current snapshot, if one exists.
    async fn load_snapshot(&self) -> Result<Option<Snapshot>>;

    /// Persist the rendered page, replacing any previous one.
    async fn write_page(&self, html: &str) -> Result<()>;
}
