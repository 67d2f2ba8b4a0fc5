//! One-shot montage run: look up the imprint's catalog, fetch covers, and
//! write `{imprint}.png` into the current directory.

use montage_core::MontageConfig;
use montage_logging::{initialize, LogDestination};

/// The publishing label to chart. Changed by editing this constant.
const IMPRINT: &str = "Afternoon";

fn main() -> anyhow::Result<()> {
    initialize(LogDestination::Terminal);

    let config = MontageConfig {
        imprint: IMPRINT.to_string(),
        ..MontageConfig::default()
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(montage_engine::run(&config))?;

    match &summary.output_path {
        Some(path) => log::info!(
            "done: {} series, {} eligible, {} placeholders -> {}",
            summary.total_ids,
            summary.eligible,
            summary.placeholders,
            path.display()
        ),
        None => log::info!("done: nothing to render for {IMPRINT}"),
    }
    Ok(())
}
