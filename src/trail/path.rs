//! Path parsing and ambient path providers
//!
//! `parse_path` turns `/shop/Shoes/running` into one crumb per non-empty
//! segment, each linking to the cumulative path up to and including it.
//! The ambient location is never read from a global; hosts inject a
//! [`PathProvider`] instead.

use super::error::TrailError;
use super::item::BreadcrumbItem;

/// Parse a navigational path into an ordered breadcrumb sequence
///
/// Empty segments are discarded, so leading, trailing and doubled slashes
/// are harmless. `""` and `"/"` both yield an empty sequence.
pub fn parse_path(path: &str) -> Vec<BreadcrumbItem> {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    parts
        .iter()
        .enumerate()
        .map(|(idx, part)| BreadcrumbItem {
            href: format!("/{}", parts[..=idx].join("/")),
            label: segment_label(part),
        })
        .collect()
}

/// Decode a single segment and capitalize its first character
///
/// Malformed percent-encoding falls back to the raw segment text.
pub fn segment_label(segment: &str) -> String {
    let decoded = match decode_segment(segment) {
        Ok(decoded) if !decoded.trim().is_empty() => decoded,
        Ok(_) => {
            tracing::debug!(segment, "Segment decodes to blank label, using raw text");
            segment.to_string()
        }
        Err(e) => {
            tracing::debug!("{}, using raw text", e);
            segment.to_string()
        }
    };
    capitalize_first(&decoded)
}

/// Percent-decode a segment
///
/// Fails if any escape is malformed or the decoded bytes are not UTF-8.
pub fn decode_segment(segment: &str) -> Result<String, TrailError> {
    let invalid = || TrailError::InvalidPathSegment {
        segment: segment.to_string(),
    };
    if !has_valid_escapes(segment) {
        return Err(invalid());
    }
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .map_err(|_| invalid())
}

/// Every `%` must be followed by two hex digits
fn has_valid_escapes(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Uppercase only the first character, leaving the rest unchanged
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path providers
// ─────────────────────────────────────────────────────────────────────────────

/// Source of the ambient current path
///
/// Returns `None` when no ambient location exists (pre-rendering, headless).
pub trait PathProvider {
    fn current_path(&self) -> Option<String>;
}

/// A fixed path, for pre-rendered output and tests
#[derive(Debug, Clone)]
pub struct StaticPath(pub String);

impl StaticPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

impl PathProvider for StaticPath {
    fn current_path(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No ambient location is available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmbientPath;

impl PathProvider for NoAmbientPath {
    fn current_path(&self) -> Option<String> {
        None
    }
}

/// The process working directory, with `/` separators
#[derive(Debug, Clone, Copy, Default)]
pub struct CwdPath;

impl PathProvider for CwdPath {
    fn current_path(&self) -> Option<String> {
        match std::env::current_dir() {
            Ok(dir) => Some(dir.to_string_lossy().replace('\\', "/")),
            Err(e) => {
                tracing::debug!("Working directory unavailable: {}", e);
                None
            }
        }
    }
}

/// Resolve the path to derive from: a non-empty explicit path wins, then
/// the provider, then the empty path
pub fn resolve_path(explicit: Option<&str>, provider: &dyn PathProvider) -> String {
    match explicit {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => provider.current_path().unwrap_or_default(),
    }
}
