//! Single-shot firmware file download.
//!
//! Skips files already present, streams the response body to a `.part`
//! file, and renames it into place once the status is known, so failed
//! attempts leave nothing behind.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::url_model;

/// Outcome of processing one manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was fetched and written.
    Downloaded,
    /// A file of the same name already existed; no request was issued.
    AlreadyPresent,
    /// The server answered with a non-2xx status; nothing was written.
    HttpError(u32),
}

/// Temp path used while the response body is streamed to disk.
fn part_path(final_path: &Path) -> PathBuf {
    let mut os = final_path.as_os_str().to_owned();
    os.push(".part");
    PathBuf::from(os)
}

/// Downloads `url` into `dest_dir` under its derived basename.
///
/// Presence of the target file skips the download entirely; no content or
/// hash verification is performed. A non-2xx response is reported in the
/// outcome and the `.part` file removed; transport and local I/O failures
/// are errors.
pub fn download_file(dest_dir: &Path, url: &str, timeout: Duration) -> Result<DownloadOutcome> {
    let filename = url_model::derive_filename(url);
    let final_path = dest_dir.join(&filename);
    if final_path.is_file() {
        tracing::debug!("{} already present, skipping", final_path.display());
        return Ok(DownloadOutcome::AlreadyPresent);
    }

    let temp = part_path(&final_path);
    let file =
        File::create(&temp).with_context(|| format!("failed to create {}", temp.display()))?;
    let mut writer = BufWriter::new(file);
    let mut write_err: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.timeout(timeout)?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match writer.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        drop(writer);
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| format!("failed to write {}", temp.display()));
    }

    if let Err(e) = perform_result {
        drop(writer);
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| format!("GET {} failed", url));
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        drop(writer);
        let _ = fs::remove_file(&temp);
        tracing::warn!("failed to download {} (HTTP {})", url, code);
        return Ok(DownloadOutcome::HttpError(code));
    }

    if let Err(e) = writer.flush() {
        drop(writer);
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| format!("failed to write {}", temp.display()));
    }
    drop(writer);
    fs::rename(&temp, &final_path)
        .with_context(|| format!("failed to move {} into place", final_path.display()))?;

    tracing::info!("downloaded {} to {}", url, final_path.display());
    Ok(DownloadOutcome::Downloaded)
}
