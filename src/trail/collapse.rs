//! Collapsing long trails
//!
//! A trail longer than `max_items` is shown as the first `items_before`
//! items, one marker, then the last `items_after` items, until the user
//! expands it. The decision is a pure function of the items, the limits and
//! the `expanded` flag; the flag itself lives in [`CollapseState`].

use super::item::{BreadcrumbItem, DisplayEntry};
use std::fmt;
use std::sync::Arc;

/// Synchronous instrumentation hook
pub type Hook = Arc<dyn Fn() + Send + Sync>;

/// Thresholds controlling when and how a trail collapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseLimits {
    /// Collapse once the trail has more items than this
    pub max_items: usize,
    /// Items kept at the start when collapsed
    pub items_before: usize,
    /// Items kept at the end when collapsed
    pub items_after: usize,
}

impl Default for CollapseLimits {
    fn default() -> Self {
        Self {
            max_items: 8,
            items_before: 1,
            items_after: 1,
        }
    }
}

impl CollapseLimits {
    pub fn new(max_items: usize, items_before: usize, items_after: usize) -> Self {
        Self {
            max_items,
            items_before,
            items_after,
        }
    }

    /// Whether a trail of `len` items exceeds the threshold
    pub fn should_collapse(&self, len: usize) -> bool {
        len > self.max_items
    }

    /// The kept head and tail leave nothing to elide below the threshold
    pub fn is_misconfigured(&self) -> bool {
        self.items_before.saturating_add(self.items_after) >= self.max_items
    }

    /// Head and tail counts clamped so they never overlap in a trail of `len`
    fn clamped(&self, len: usize) -> (usize, usize) {
        let before = self.items_before.min(len);
        let after = self.items_after.min(len - before);
        (before, after)
    }
}

/// Compute the sequence actually displayed
pub fn display_entries(
    items: &[BreadcrumbItem],
    limits: &CollapseLimits,
    expanded: bool,
) -> Vec<DisplayEntry> {
    if expanded || !limits.should_collapse(items.len()) {
        return items.iter().cloned().map(DisplayEntry::Item).collect();
    }

    let (before, after) = limits.clamped(items.len());
    let elided = items.len() - before - after;

    let mut entries = Vec::with_capacity(before + after + 1);
    entries.extend(items[..before].iter().cloned().map(DisplayEntry::Item));
    entries.push(DisplayEntry::Marker { elided });
    entries.extend(items[items.len() - after..].iter().cloned().map(DisplayEntry::Item));
    entries
}

/// Hooks fired around every toggle, in both directions
#[derive(Clone, Default)]
pub struct CollapseHooks {
    pub before_collapse: Option<Hook>,
    pub after_collapse: Option<Hook>,
}

impl fmt::Debug for CollapseHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapseHooks")
            .field("before_collapse", &self.before_collapse.is_some())
            .field("after_collapse", &self.after_collapse.is_some())
            .finish()
    }
}

/// Expanded/collapsed state owned by a single breadcrumb instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapseState {
    expanded: bool,
}

impl CollapseState {
    /// Start collapsed (`expanded == false`)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the state, firing `before_collapse` first and `after_collapse`
    /// once the new state is in place. Returns the new `expanded` value.
    pub fn toggle(&mut self, hooks: &CollapseHooks) -> bool {
        if let Some(before) = &hooks.before_collapse {
            before();
        }
        self.expanded = !self.expanded;
        if let Some(after) = &hooks.after_collapse {
            after();
        }
        tracing::debug!(expanded = self.expanded, "Breadcrumb collapse toggled");
        self.expanded
    }
}
