//! Error conditions of the breadcrumb core
//!
//! Only `MissingLinkRenderer` is ever returned as a hard failure. The other
//! conditions are recovered where they occur (raw-label fallback, clamping)
//! and surface through logging or `TrailOptions::check`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrailError {
    /// A path segment could not be percent-decoded
    #[error("invalid percent-encoding in path segment {segment:?}")]
    InvalidPathSegment { segment: String },

    /// Kept head and tail leave nothing to elide
    #[error(
        "items_before_collapse ({before}) + items_after_collapse ({after}) \
         should be less than max_items ({max_items})"
    )]
    MisconfiguredCollapse {
        before: usize,
        after: usize,
        max_items: usize,
    },

    /// Non-terminal crumbs need a link renderer
    #[error("no link renderer configured for breadcrumb links")]
    MissingLinkRenderer,
}
