//! Trail defaults configuration
//!
//! Collapse limits, path sync, separator and link style used when the
//! command line does not override them.

use crumbtrail::trail::{
    AnchorLink, BreadcrumbItem, CollapseLimits, LinkRenderer, Node, RouterLink, TrailOptions,
};
use serde::Deserialize;

/// Trail defaults
#[derive(Debug, Clone, PartialEq)]
pub struct TrailConfig {
    /// Collapse once the trail has more items than this
    pub max_items: usize,
    /// Items kept before the marker when collapsed
    pub items_before_collapse: usize,
    /// Items kept after the marker when collapsed
    pub items_after_collapse: usize,
    /// Derive crumbs from the current path when no items are configured
    pub sync_with_url: bool,
    /// Separator text (None = default glyph)
    pub separator: Option<String>,
    /// Class attached to the root `<nav>` in HTML output
    pub class_name: Option<String>,
    /// Router mount point for links, e.g. "#" or "/app" (None = plain anchors)
    pub link_base: Option<String>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        let limits = CollapseLimits::default();
        Self {
            max_items: limits.max_items,
            items_before_collapse: limits.items_before,
            items_after_collapse: limits.items_after,
            sync_with_url: true,
            separator: None,
            class_name: None,
            link_base: None,
        }
    }
}

/// Trail settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTrail {
    pub max_items: Option<usize>,
    pub items_before_collapse: Option<usize>,
    pub items_after_collapse: Option<usize>,
    pub sync_with_url: Option<bool>,
    pub separator: Option<String>,
    pub class_name: Option<String>,
    pub link_base: Option<String>,
}

impl TrailConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileTrail>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            max_items: file.max_items.unwrap_or(defaults.max_items),
            items_before_collapse: file
                .items_before_collapse
                .unwrap_or(defaults.items_before_collapse),
            items_after_collapse: file
                .items_after_collapse
                .unwrap_or(defaults.items_after_collapse),
            sync_with_url: file.sync_with_url.unwrap_or(defaults.sync_with_url),
            separator: file.separator.filter(|s| !s.is_empty()),
            class_name: file.class_name.filter(|s| !s.is_empty()),
            link_base: file.link_base.filter(|s| !s.is_empty()),
        }
    }

    pub fn limits(&self) -> CollapseLimits {
        CollapseLimits::new(
            self.max_items,
            self.items_before_collapse,
            self.items_after_collapse,
        )
    }

    /// Per-render options for the given explicit items
    pub fn to_options(&self, items: Vec<BreadcrumbItem>) -> TrailOptions {
        TrailOptions {
            items,
            sync_with_url: self.sync_with_url,
            limits: self.limits(),
            separator: self.separator.as_deref().map(Node::text),
            class_name: self.class_name.clone(),
            ..TrailOptions::default()
        }
    }

    /// Link renderer matching `link_base`
    pub fn link_renderer(&self) -> Box<dyn LinkRenderer> {
        match &self.link_base {
            Some(base) => Box::new(RouterLink::new(base.as_str())),
            None => Box::new(AnchorLink),
        }
    }
}
