//! `fwsync sync` – fetch the manifest and download missing firmware files.

use anyhow::Result;
use fwsync_core::config::FwsyncConfig;
use fwsync_core::sync;

pub fn run_sync(cfg: &FwsyncConfig) -> Result<()> {
    let report = sync::run_sync(cfg)?;
    if report.processed == 0 {
        println!("No firmware entries found.");
    } else {
        println!(
            "Done, {} firmware file(s) processed ({} downloaded, {} already present, {} failed)",
            report.processed, report.downloaded, report.skipped, report.failed
        );
    }
    Ok(())
}
