use std::path::PathBuf;

use thiserror::Error;

use montage_core::MontageConfig;

use crate::catalog::CatalogClient;
use crate::covers::fetch_covers;
use crate::fetch::{build_client, FetchError, FetchSettings};
use crate::font::{load_font, FontError};
use crate::persist::{save_png, PersistError};
use crate::render::compose_montage;
use crate::types::CoverSource;

/// What a run accomplished. `output_path` is `None` when the pipeline
/// short-circuited with nothing to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub total_ids: usize,
    pub eligible: usize,
    pub placeholders: usize,
    pub output_path: Option<PathBuf>,
}

/// Failures that cannot be skipped or substituted away. Per-series and
/// per-cover problems never surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Font(#[from] FontError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Run the whole pipeline once: catalog lookup, series metadata fetch,
/// cover fetch, render, persist. Each stage drains before the next starts.
pub async fn run(config: &MontageConfig) -> Result<PipelineSummary, PipelineError> {
    let settings = FetchSettings {
        connect_timeout: config.connect_timeout,
        request_timeout: config.request_timeout,
    };
    let client = build_client(&settings)?;
    let font = load_font(config.font_path.as_deref())?;
    let catalog = CatalogClient::new(client.clone(), config.api_base.clone());

    let ids = catalog.lookup_series_ids(&config.imprint).await;
    log::info!("found {} series under {}", ids.len(), config.imprint);
    if ids.is_empty() {
        log::info!("nothing to process for {}", config.imprint);
        return Ok(PipelineSummary {
            total_ids: 0,
            eligible: 0,
            placeholders: 0,
            output_path: None,
        });
    }

    let records = catalog.fetch_eligible(&ids, config.series_workers).await;
    log::info!(
        "{} of {} series are completed non-oneshots",
        records.len(),
        ids.len()
    );
    if records.is_empty() {
        log::info!("no eligible series for {}", config.imprint);
        return Ok(PipelineSummary {
            total_ids: ids.len(),
            eligible: 0,
            placeholders: 0,
            output_path: None,
        });
    }

    let items = fetch_covers(&client, &records, &font, config).await;
    let placeholders = items
        .iter()
        .filter(|item| item.source == CoverSource::Placeholder)
        .count();

    let banner = config.banner_text();
    let output_path = match compose_montage(&items, &banner, &font, config) {
        Some(canvas) => {
            let path = save_png(&canvas, &config.output_dir, &config.output_filename())?;
            log::info!("chart saved as {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(PipelineSummary {
        total_ids: ids.len(),
        eligible: records.len(),
        placeholders,
        output_path,
    })
}
