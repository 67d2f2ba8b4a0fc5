use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::{stream, StreamExt};
use serde::Deserialize;

use montage_core::is_eligible;

use crate::fetch::fetch_bytes;
use crate::types::{SeriesId, WorkRecord};

#[derive(Debug, Deserialize)]
struct PublicationResponse {
    #[serde(default)]
    series_list: Vec<SeriesEntry>,
}

#[derive(Debug, Deserialize)]
struct SeriesEntry {
    series_id: SeriesId,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    title: Option<String>,
    url: Option<String>,
    image: Option<SeriesImage>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct SeriesImage {
    url: Option<SeriesImageUrl>,
}

#[derive(Debug, Deserialize)]
struct SeriesImageUrl {
    original: Option<String>,
}

/// Client for the publication-listing and series-metadata endpoints.
pub struct CatalogClient {
    client: reqwest::Client,
    api_base: String,
}

impl CatalogClient {
    pub fn new(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Look up the ordered series ids published under `imprint`.
    ///
    /// Failures never escape this boundary: an unreachable endpoint or an
    /// unexpected body is logged (with the raw body, when there is one) and
    /// yields an empty list, which the caller treats as nothing-to-process.
    pub async fn lookup_series_ids(&self, imprint: &str) -> Vec<SeriesId> {
        let url = format!("{}/publishers/publication", self.api_base);
        let bytes = match fetch_bytes(&self.client, &url, &[("pubname", imprint)]).await {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("publication lookup for {imprint} failed: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_slice::<PublicationResponse>(&bytes) {
            Ok(parsed) => parsed
                .series_list
                .into_iter()
                .map(|entry| entry.series_id)
                .collect(),
            Err(err) => {
                log::error!("publication lookup for {imprint} returned unexpected body: {err}");
                log::error!("response: {}", String::from_utf8_lossy(&bytes));
                Vec::new()
            }
        }
    }

    /// Fetch metadata for every id with at most `workers` requests in
    /// flight, keeping the records that pass the eligibility rule. Each
    /// worker returns its own optional record; results are merged here
    /// after the stream drains, so no shared collection is locked.
    pub async fn fetch_eligible(&self, ids: &[SeriesId], workers: usize) -> Vec<WorkRecord> {
        let total = ids.len();
        let done = AtomicUsize::new(0);
        let done = &done;
        let results: Vec<Option<WorkRecord>> = stream::iter(ids.iter().copied())
            .map(|id| async move {
                let record = self.fetch_series(id).await;
                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                log::info!("series metadata {finished}/{total}");
                record
            })
            .buffer_unordered(workers.max(1))
            .collect()
            .await;
        results.into_iter().flatten().collect()
    }

    /// Fetch one series and apply the eligibility rule. Any failure is
    /// logged with the id and excludes the work; the batch continues.
    async fn fetch_series(&self, id: SeriesId) -> Option<WorkRecord> {
        let url = format!("{}/series/{id}", self.api_base);
        let bytes = match fetch_bytes(&self.client, &url, &[]).await {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("error fetching series {id}: {err}");
                return None;
            }
        };
        let parsed = match serde_json::from_slice::<SeriesResponse>(&bytes) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("error fetching series {id}: unexpected body: {err}");
                return None;
            }
        };
        let Some(title) = parsed.title else {
            log::warn!("series {id} has no title, skipping");
            return None;
        };

        if !is_eligible(parsed.completed, &parsed.status) {
            return None;
        }

        let detail_url = parsed.url.unwrap_or_default();
        let image_url = parsed
            .image
            .and_then(|image| image.url)
            .and_then(|url| url.original);
        log::info!("{title}: {detail_url} - Completed - {}", parsed.status);
        Some(WorkRecord {
            series_id: id,
            title,
            detail_url,
            image_url,
            completed: parsed.completed,
        })
    }
}
