//! Item source selection
//!
//! Precedence, evaluated once per render:
//! 1. Non-empty explicit items are used verbatim (sync is ignored)
//! 2. Otherwise, with sync enabled, the items parsed from the current path
//! 3. Otherwise, nothing

use super::item::BreadcrumbItem;

/// Where the effective items came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrigin {
    Explicit,
    Path,
    Empty,
}

impl ItemOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Path => "path",
            Self::Empty => "empty",
        }
    }
}

/// Pick the effective item sequence
///
/// `path_items` is only invoked when the path is actually the winning source.
pub fn select_items<F>(
    explicit: &[BreadcrumbItem],
    sync_with_url: bool,
    path_items: F,
) -> (Vec<BreadcrumbItem>, ItemOrigin)
where
    F: FnOnce() -> Vec<BreadcrumbItem>,
{
    let (items, origin) = if !explicit.is_empty() {
        (explicit.to_vec(), ItemOrigin::Explicit)
    } else if sync_with_url {
        (path_items(), ItemOrigin::Path)
    } else {
        (Vec::new(), ItemOrigin::Empty)
    };

    tracing::trace!(origin = origin.as_str(), count = items.len(), "Selected breadcrumb source");
    (items, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::path::parse_path;

    fn explicit() -> Vec<BreadcrumbItem> {
        vec![
            BreadcrumbItem::new("/", "Home"),
            BreadcrumbItem::new("/components", "Components"),
        ]
    }

    #[test]
    fn test_explicit_items_win_over_sync() {
        let (items, origin) = select_items(&explicit(), true, || parse_path("/a/b/c"));
        assert_eq!(origin, ItemOrigin::Explicit);
        assert_eq!(items, explicit());
    }

    #[test]
    fn test_path_not_parsed_when_explicit_present() {
        let (_, origin) = select_items(&explicit(), true, || panic!("path parsed"));
        assert_eq!(origin, ItemOrigin::Explicit);
    }

    #[test]
    fn test_sync_uses_path_items() {
        let (items, origin) = select_items(&[], true, || parse_path("/a/b"));
        assert_eq!(origin, ItemOrigin::Path);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_no_source_yields_empty() {
        let (items, origin) = select_items(&[], false, || parse_path("/a/b"));
        assert_eq!(origin, ItemOrigin::Empty);
        assert!(items.is_empty());
    }
}
