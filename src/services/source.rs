// src/services/source.rs

//! Project feed fetcher.
//!
//! Issues a single GET against the aggregation endpoint and decodes the
//! returned JSON array into raw project records.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{RawProjectRecord, SourceConfig};

/// Fetches the raw project list from the aggregation feed.
pub struct ProjectSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl ProjectSource {
    /// Create a new source for the given feed configuration.
    pub fn new(client: reqwest::Client, config: SourceConfig) -> Self {
        Self { client, config }
    }

    /// Fetch the feed once.
    ///
    /// A non-2xx response, a non-array payload, an empty array, or an array
    /// with no decodable records all map to [`AppError::SourceUnavailable`].
    /// No retry is attempted.
    pub async fn fetch(&self) -> Result<Vec<RawProjectRecord>> {
        log::info!("Fetching project feed from {}", self.config.endpoint);

        let response = self.client.get(&self.config.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::source_unavailable(format!(
                "feed responded with status {status}"
            )));
        }

        let text = response.text().await?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| AppError::source_unavailable(format!("payload is not valid JSON: {e}")))?;

        Self::decode_records(payload)
    }

    /// Fetch the feed, falling back to the built-in sample catalog when the
    /// source is unavailable. Returns the records and whether the fallback
    /// was used.
    pub async fn fetch_or_fallback(&self) -> (Vec<RawProjectRecord>, bool) {
        match self.fetch().await {
            Ok(records) => {
                log::info!("Feed returned {} records", records.len());
                (records, false)
            }
            Err(e) => {
                log::warn!("Project feed unavailable: {e}. Using sample catalog.");
                (RawProjectRecord::sample_catalog(), true)
            }
        }
    }

    /// Decode a feed payload into records.
    ///
    /// Null or malformed array elements are dropped with a warning instead of
    /// failing the whole fetch.
    pub fn decode_records(payload: Value) -> Result<Vec<RawProjectRecord>> {
        let Value::Array(items) = payload else {
            return Err(AppError::source_unavailable("payload is not an array"));
        };
        if items.is_empty() {
            return Err(AppError::source_unavailable("feed returned an empty array"));
        }

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            if item.is_null() {
                log::warn!("Skipping null record in feed payload");
                continue;
            }
            match serde_json::from_value::<RawProjectRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("Skipping malformed record in feed payload: {e}"),
            }
        }

        if records.is_empty() {
            return Err(AppError::source_unavailable(
                "feed contained no decodable records",
            ));
        }
        Ok(records)
    }
}
