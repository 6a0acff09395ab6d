//! Firmware filename derivation from download URLs.
//!
//! The local name is the basename after the final path separator, lightly
//! sanitized for the filesystem.

/// Default filename when the URL yields nothing usable.
const DEFAULT_FILENAME: &str = "firmware.bin";

/// Extracts the last non-empty path segment from a URL.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    cleaned.trim_matches(|c| c == ' ' || c == '.').to_string()
}

/// Derives the local filename for a firmware URL.
///
/// Falls back to a raw substring-after-last-`/` split for inputs the `url`
/// crate cannot parse, and to `"firmware.bin"` when nothing usable remains.
pub fn derive_filename(url: &str) -> String {
    let raw = filename_from_url_path(url).or_else(|| url.rsplit('/').next().map(str::to_string));

    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
