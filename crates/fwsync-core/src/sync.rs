//! Orchestration of one sync run: fetch the manifest, resolve the
//! destination directory, download each entry in order.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::FwsyncConfig;
use crate::dest_dir;
use crate::download::{self, DownloadOutcome};
use crate::manifest;

/// Counters for one sync run. `processed` covers every manifest entry,
/// whatever its per-file outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub processed: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Runs the full fetch-and-download cycle, strictly sequentially.
///
/// A manifest that cannot be fetched (non-2xx) yields an empty report.
/// Per-file HTTP failures are counted and the run continues; transport and
/// filesystem failures abort with an error.
pub fn run_sync(cfg: &FwsyncConfig) -> Result<SyncReport> {
    let timeout = Duration::from_secs(cfg.http_timeout_secs);
    let urls = manifest::fetch_manifest(&cfg.manifest_url, timeout)?;

    let mut report = SyncReport::default();
    if urls.is_empty() {
        tracing::info!("no firmware entries to download");
        return Ok(report);
    }

    let dest = dest_dir::ensure_dest_dir(&cfg.download_root)
        .context("could not prepare destination directory")?;

    for url in &urls {
        println!("Downloading {}", url);
        let outcome = download::download_file(&dest, url, timeout)?;
        report.processed += 1;
        match outcome {
            DownloadOutcome::Downloaded => report.downloaded += 1,
            DownloadOutcome::AlreadyPresent => report.skipped += 1,
            DownloadOutcome::HttpError(_) => report.failed += 1,
        }
    }

    tracing::info!(
        "sync finished: {} processed, {} downloaded, {} already present, {} failed",
        report.processed,
        report.downloaded,
        report.skipped,
        report.failed
    );
    Ok(report)
}
