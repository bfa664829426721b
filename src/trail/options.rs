//! Per-render breadcrumb options
//!
//! One value object carries every recognized option with its default:
//!
//! | Option | Default |
//! |---|---|
//! | `items` | empty |
//! | `sync_with_url` | `true` |
//! | `current_path` | none (ask the path provider) |
//! | `limits.max_items` | 8 |
//! | `limits.items_before` | 1 |
//! | `limits.items_after` | 1 |
//! | `separator` | none ([`DEFAULT_SEPARATOR`](super::render::DEFAULT_SEPARATOR)) |
//! | `hooks` | none |
//! | `class_name` | none |

use super::collapse::{CollapseHooks, CollapseLimits};
use super::error::TrailError;
use super::item::BreadcrumbItem;
use super::render::Node;

#[derive(Debug, Clone)]
pub struct TrailOptions {
    /// Explicit items; when non-empty they win over path sync
    pub items: Vec<BreadcrumbItem>,
    /// Derive items from the current path when `items` is empty
    pub sync_with_url: bool,
    /// Path override, consulted before the path provider
    pub current_path: Option<String>,
    /// Collapse thresholds
    pub limits: CollapseLimits,
    /// Separator override
    pub separator: Option<Node>,
    /// Toggle instrumentation
    pub hooks: CollapseHooks,
    /// Class attached to the root container
    pub class_name: Option<String>,
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sync_with_url: true,
            current_path: None,
            limits: CollapseLimits::default(),
            separator: None,
            hooks: CollapseHooks::default(),
            class_name: None,
        }
    }
}

impl TrailOptions {
    /// Report limits whose head and tail reach the threshold
    ///
    /// Non-fatal: rendering clamps such limits instead of duplicating items.
    pub fn check(&self) -> Result<(), TrailError> {
        if self.limits.is_misconfigured() {
            return Err(TrailError::MisconfiguredCollapse {
                before: self.limits.items_before,
                after: self.limits.items_after,
                max_items: self.limits.max_items,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TrailOptions::default();
        assert!(opts.sync_with_url);
        assert_eq!(opts.limits, CollapseLimits::new(8, 1, 1));
        assert!(opts.check().is_ok());
    }

    #[test]
    fn test_check_flags_overlapping_limits() {
        let opts = TrailOptions {
            limits: CollapseLimits::new(4, 2, 2),
            ..Default::default()
        };
        assert_eq!(
            opts.check(),
            Err(TrailError::MisconfiguredCollapse {
                before: 2,
                after: 2,
                max_items: 4
            })
        );
    }
}
