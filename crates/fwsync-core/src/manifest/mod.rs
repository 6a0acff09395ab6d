//! Manifest fetching and parsing.
//!
//! One HTTP GET to the configured manifest endpoint, then a structural scan
//! of the XML body for firmware download URLs.

mod parse;

use anyhow::{Context, Result};
use std::time::Duration;

/// Malformed manifest XML.
#[derive(Debug, thiserror::Error)]
#[error("malformed manifest XML: {0}")]
pub struct ManifestError(#[from] quick_xml::Error);

/// Fetches the manifest and returns the firmware URLs it lists, in document order.
///
/// A non-2xx response is treated as "no firmware available": a warning is
/// logged and an empty list returned. Transport failures (timeout, DNS,
/// connection reset) and malformed XML are errors.
pub fn fetch_manifest(manifest_url: &str, timeout: Duration) -> Result<Vec<String>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(manifest_url).context("invalid manifest URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("manifest GET {} failed", manifest_url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        tracing::warn!("manifest GET {} returned HTTP {}", manifest_url, code);
        return Ok(Vec::new());
    }

    let urls = parse::firmware_urls(&body)?;
    tracing::debug!("manifest listed {} firmware URL(s)", urls.len());
    Ok(urls)
}
