//! Breadcrumb items and display entries

use serde::{Deserialize, Serialize};

/// Label reserved for the collapse marker. Never produced by path parsing,
/// which always yields a capitalized first character.
pub const COLLAPSE_MARKER_LABEL: &str = "__COLLAPSE__";

/// A single navigational step in a trail, ordered root-to-leaf
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Path this crumb navigates to (not required to be unique)
    pub href: String,
    /// Display text
    pub label: String,
}

impl BreadcrumbItem {
    /// Create a new breadcrumb item
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Parse a `HREF=LABEL` pair, as accepted on the command line
    ///
    /// Splits on the first `=`. Returns `None` when there is no `=` or the
    /// label is empty.
    pub fn parse_pair(s: &str) -> Option<Self> {
        let (href, label) = s.split_once('=')?;
        if label.trim().is_empty() {
            return None;
        }
        Some(Self::new(href, label))
    }
}

/// One entry of the sequence actually displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayEntry {
    /// A real navigational item
    Item(BreadcrumbItem),
    /// Sentinel standing in for the elided middle section
    Marker {
        /// Number of items hidden behind the marker (zero when clamped)
        elided: usize,
    },
}

impl DisplayEntry {
    /// The real item, if this is not the marker
    pub fn item(&self) -> Option<&BreadcrumbItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Marker { .. } => None,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Marker { .. })
    }

    /// Label shown for this entry (the reserved label for the marker)
    pub fn label(&self) -> &str {
        match self {
            Self::Item(item) => &item.label,
            Self::Marker { .. } => COLLAPSE_MARKER_LABEL,
        }
    }
}

impl From<BreadcrumbItem> for DisplayEntry {
    fn from(item: BreadcrumbItem) -> Self {
        Self::Item(item)
    }
}
