//! `iconctl fetch` – download icons until the CDN runs out.

use anyhow::Result;
use iconctl_core::config::IconctlConfig;
use iconctl_core::fetcher::{Fetcher, StopReason};
use iconctl_core::http::CurlClient;
use std::path::PathBuf;

/// Always succeeds once configured: running off the end of the range is the normal way to stop.
pub fn run_fetch(
    cfg: &IconctlConfig,
    dir: Option<PathBuf>,
    start: Option<u64>,
    end: Option<u64>,
) -> Result<()> {
    let output_dir = dir.unwrap_or_else(|| cfg.output_dir.clone());
    let start_id = start.unwrap_or(cfg.fetch.start_id);
    let end_id = end.or(cfg.fetch.end_id);

    let fetcher = Fetcher::new(CurlClient::new(), &cfg.fetch, &output_dir)
        .with_extension(&cfg.naming.extension)
        .with_range(start_id, end_id);
    tracing::info!(
        dir = %output_dir.display(),
        start_id,
        end_id = ?end_id,
        "starting fetch"
    );

    let report = fetcher.run_with(|id, _| println!("Downloaded {}.{}", id, cfg.naming.extension));

    match (&report.reason, report.stopped_at) {
        (StopReason::NotFound, Some(id)) => println!("Stopped on id {} (not found).", id),
        (StopReason::Failed(msg), Some(id)) => {
            println!("Stopped on id {} (download failed: {}).", id, msg)
        }
        _ => println!("Reached end of requested range."),
    }
    tracing::info!(stored = report.stored.len(), "fetch finished");
    Ok(())
}
