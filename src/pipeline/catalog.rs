// src/pipeline/catalog.rs

//! End-to-end catalog pipeline.
//!
//! Fetch → normalize → index → render, with the sample-catalog fallback when
//! the feed is unavailable and an offline re-render path over the persisted
//! snapshot.

use crate::error::{AppError, Result};
use crate::models::{Config, FilterState};
use crate::render::render_page;
use crate::services::{ImageResolver, ProjectSource};
use crate::storage::{CatalogStorage, Snapshot};
use crate::utils::http;

use super::filter::CatalogState;
use super::index::build_filter_index;
use super::normalize::normalize;
use super::stats::CatalogStats;

/// Outcome of one pipeline run.
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    /// Normalized entity count
    pub project_count: usize,

    /// Entities visible under the requested selection
    pub visible_count: usize,

    /// Whether the sample catalog stood in for the feed
    pub used_fallback: bool,

    /// Headline totals
    pub stats: CatalogStats,
}

/// Run the full build: fetch the feed (or fall back), normalize, persist the
/// snapshot, and render the page under the requested selection.
pub async fn run_build(
    config: &Config,
    storage: &dyn CatalogStorage,
    filter: FilterState,
) -> Result<CatalogSummary> {
    let client = http::create_client(&config.source)?;

    let source = ProjectSource::new(client.clone(), config.source.clone());
    let (records, used_fallback) = source.fetch_or_fallback().await;

    let stats = CatalogStats::from_records(&records);
    log::info!(
        "Catalog totals: {} repositories, {} stars, {} forks, {} languages",
        stats.repositories,
        stats.stars,
        stats.forks,
        stats.languages
    );

    let resolver = ImageResolver::new(client, config.images.clone(), config.render.name_limit);
    let entities = normalize(records, &resolver, config.images.max_concurrent).await;

    let mut state = CatalogState::new();
    let token = state.begin_refresh();
    state.replace(token, entities);
    state.select(filter);

    let snapshot = Snapshot::new(state.projects().to_vec(), stats.clone(), used_fallback);
    storage.write_snapshot(&snapshot).await?;

    let summary = render_and_store(config, storage, &state, &stats, used_fallback).await?;
    Ok(summary)
}

/// Re-render the page from the persisted snapshot without refetching.
pub async fn run_render(
    config: &Config,
    storage: &dyn CatalogStorage,
    filter: FilterState,
) -> Result<CatalogSummary> {
    let snapshot = storage
        .load_snapshot()
        .await?
        .ok_or_else(|| AppError::config("No snapshot found. Run 'folio build' first."))?;

    let Snapshot {
        stats,
        projects,
        used_fallback,
        ..
    } = snapshot;

    let mut state = CatalogState::new();
    let token = state.begin_refresh();
    state.replace(token, projects);
    state.select(filter);

    render_and_store(config, storage, &state, &stats, used_fallback).await
}

async fn render_and_store(
    config: &Config,
    storage: &dyn CatalogStorage,
    state: &CatalogState,
    stats: &CatalogStats,
    used_fallback: bool,
) -> Result<CatalogSummary> {
    let index = build_filter_index(state.projects());
    let visible = state.visible();

    log::info!(
        "Rendering {} of {} projects under filter '{}'",
        visible.len(),
        state.projects().len(),
        state.filter()
    );

    let html = render_page(
        &config.render.page_title,
        stats,
        &index,
        state.filter(),
        &visible,
        config.render.description_limit,
    );
    storage.write_page(&html).await?;

    Ok(CatalogSummary {
        project_count: state.projects().len(),
        visible_count: visible.len(),
        used_fallback,
        stats: stats.clone(),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::models::{ImageRef, ProjectEntity, RawProjectRecord};
    use crate::storage::LocalStorage;

    use super::*;

    fn sample_entities() -> Vec<ProjectEntity> {
        RawProjectRecord::sample_catalog()
            .into_iter()
            .map(|raw| {
                let image = ImageRef::Placeholder("data:image/svg".to_string());
                ProjectEntity::from_raw(raw, image)
            })
            .collect()
    }

    #[tokio::test]
    async fn render_from_snapshot_filters_subset() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let config = Config::default();

        let entities = sample_entities();
        let stats = CatalogStats {
            repositories: entities.len(),
            stars: 0,
            forks: 0,
            languages: 4,
        };
        storage
            .write_snapshot(&Snapshot::new(entities, stats, true))
            .await
            .unwrap();

        let summary = run_render(
            &config,
            &storage,
            FilterState::Language("C++".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(summary.project_count, 4);
        assert_eq!(summary.visible_count, 1);
        assert!(summary.used_fallback);

        let html = tokio::fs::read_to_string(storage.path("index.html"))
            .await
            .unwrap();
        assert!(html.contains("cpp-projects"));
        assert!(!html.contains("java-applications"));
    }

    #[tokio::test]
    async fn render_without_snapshot_fails() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let config = Config::default();

        let result = run_render(&config, &storage, FilterState::All).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
