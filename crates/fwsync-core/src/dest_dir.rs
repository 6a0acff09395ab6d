//! Date-stamped destination directory resolution.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Formats the directory name for a calendar date as `DDMMYYYY`.
pub fn dir_name(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// Directory name for today's local date.
pub fn today_dir_name() -> String {
    dir_name(chrono::Local::now().date_naive())
}

/// Ensures `<root>/<DDMMYYYY>` exists for today's date and returns its path.
///
/// Re-creation on a later run the same day is a no-op; any other creation
/// failure (e.g. permission denied) is returned as an error instead of
/// being swallowed.
pub fn ensure_dest_dir(root: &Path) -> Result<PathBuf> {
    let path = root.join(today_dir_name());
    match fs::create_dir(&path) {
        Ok(()) => tracing::debug!("created destination directory {}", path.display()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to create destination directory {}", path.display())
            })
        }
    }
    Ok(path)
}
