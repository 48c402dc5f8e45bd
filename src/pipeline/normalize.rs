// src/pipeline/normalize.rs

//! Record normalization: filter, sort, enrich.

use futures::stream::{self, StreamExt};

use crate::models::{ProjectEntity, RawProjectRecord};
use crate::services::ImageResolver;

/// Drop records that must not reach the catalog: forks and empty
/// repositories.
pub fn filter_records(records: Vec<RawProjectRecord>) -> Vec<RawProjectRecord> {
    records
        .into_iter()
        .filter(|record| !record.fork && record.size > 0)
        .collect()
}

/// Sort by creation timestamp descending, star count descending on ties.
///
/// This ordering is fixed here; the renderer never re-sorts.
pub fn sort_records(records: &mut [RawProjectRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then(b.stargazers_count.cmp(&a.stargazers_count))
    });
}

/// Normalize a raw record set into display-ready entities.
///
/// Image resolution runs concurrently across records with bounded
/// concurrency; results are awaited together and output order matches the
/// sorted input order.
pub async fn normalize(
    records: Vec<RawProjectRecord>,
    resolver: &ImageResolver,
    max_concurrent: usize,
) -> Vec<ProjectEntity> {
    let mut records = filter_records(records);
    sort_records(&mut records);

    log::info!("Normalizing {} records", records.len());

    stream::iter(records)
        .map(|record| async move {
            let image = resolver
                .resolve(&record.name, record.language.as_deref())
                .await;
            ProjectEntity::from_raw(record, image)
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}
