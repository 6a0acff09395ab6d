//! `fwsync list` – print the firmware URLs from the manifest.

use anyhow::Result;
use fwsync_core::config::FwsyncConfig;
use fwsync_core::manifest;
use std::time::Duration;

pub fn run_list(cfg: &FwsyncConfig) -> Result<()> {
    let timeout = Duration::from_secs(cfg.http_timeout_secs);
    let urls = manifest::fetch_manifest(&cfg.manifest_url, timeout)?;
    if urls.is_empty() {
        println!("No firmware entries found.");
    } else {
        for url in urls {
            println!("{url}");
        }
    }
    Ok(())
}
