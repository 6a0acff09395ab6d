use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Vendor endpoint serving the firmware update manifest.
pub const DEFAULT_MANIFEST_URL: &str = "https://www.shearwater.com/updates/firmwareupdate.xml";

/// Per-request HTTP timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 100;

/// Global configuration loaded from `~/.config/fwsync/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FwsyncConfig {
    /// URL of the XML manifest enumerating available firmware files.
    pub manifest_url: String,
    /// Directory under which the date-stamped download directory is created.
    pub download_root: PathBuf,
    /// Timeout in seconds applied to each HTTP request (manifest and files).
    pub http_timeout_secs: u64,
}

impl Default for FwsyncConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            download_root: PathBuf::from("."),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fwsync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FwsyncConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FwsyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FwsyncConfig = toml::from_str(&data)?;
    Ok(cfg)
}
