//! Structural traversal of the firmware manifest XML.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ManifestError;

/// Nesting depth of the `url` leaf: manifest root, device group, firmware
/// entry, then the leaf itself.
const URL_LEAF_DEPTH: usize = 4;

/// Extracts firmware download URLs from the manifest body, in document order.
///
/// Only the nesting depth and the leaf tag name are significant; enclosing
/// tag names are not validated, and unknown sibling leaves are skipped.
/// Duplicate URLs are kept.
pub(crate) fn firmware_urls(xml: &[u8]) -> Result<Vec<String>, ManifestError> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(true);

    let mut urls = Vec::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut in_url_leaf = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                in_url_leaf = depth == URL_LEAF_DEPTH && e.name().as_ref() == b"url";
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                in_url_leaf = false;
            }
            Event::Text(t) if in_url_leaf => {
                let text = t.unescape()?;
                let text = text.trim();
                if !text.is_empty() {
                    urls.push(text.to_string());
                }
            }
            Event::CData(cd) if in_url_leaf => {
                let raw = cd.into_inner();
                let text = String::from_utf8_lossy(&raw);
                let text = text.trim();
                if !text.is_empty() {
                    urls.push(text.to_string());
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(urls)
}
