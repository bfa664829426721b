//! Render adapter: display entries → presentational node tree
//!
//! The adapter never builds navigational nodes itself. Every linked crumb
//! goes through the injected [`LinkRenderer`], so hosts can plug in plain
//! anchors, router-aware links or plain text. The tree is a description
//! only; the backends in [`crate::backend`] turn it into output.

use super::item::{BreadcrumbItem, DisplayEntry};
use serde::Serialize;

/// Glyph drawn for a separator without an override child
pub const DEFAULT_SEPARATOR: &str = "›";

/// Glyph drawn for the collapse toggle
pub const ELLIPSIS: &str = "…";

/// Accessible label for the navigation region
pub const NAV_ARIA_LABEL: &str = "breadcrumb";

/// Structured description of the breadcrumb presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// Labelled navigation region (root container)
    Nav {
        aria_label: String,
        class_name: Option<String>,
        children: Vec<Node>,
    },
    /// Ordered list of items and separators, referenced by the toggle
    List { id: String, children: Vec<Node> },
    /// Wrapper around one crumb
    Item { children: Vec<Node> },
    /// Navigational link
    Link { href: String, label: String },
    /// Non-interactive "current page" marker
    Page { label: String },
    /// Separator between adjacent items; `None` means the default glyph
    Separator { child: Option<Box<Node>> },
    /// Expand/collapse affordance standing in for elided items
    Toggle {
        expanded: bool,
        controls: String,
        aria_label: String,
        elided: usize,
    },
    /// Bare text
    Text { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Direct children of container nodes (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Nav { children, .. } | Self::List { children, .. } | Self::Item { children } => {
                children
            }
            _ => &[],
        }
    }

    /// This node and all descendants, collected in depth-first order
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        if let Self::Separator { child: Some(child) } = self {
            out.extend(child.descendants());
        }
        out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Link rendering capability
// ─────────────────────────────────────────────────────────────────────────────

/// Maps a crumb to the node that links to it
pub trait LinkRenderer {
    fn render_link(&self, item: &BreadcrumbItem) -> Node;
}

impl<F> LinkRenderer for F
where
    F: Fn(&BreadcrumbItem) -> Node,
{
    fn render_link(&self, item: &BreadcrumbItem) -> Node {
        self(item)
    }
}

/// Plain link straight to the item's href
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorLink;

impl LinkRenderer for AnchorLink {
    fn render_link(&self, item: &BreadcrumbItem) -> Node {
        Node::link(&item.href, &item.label)
    }
}

/// Router-aware link: hrefs are resolved under a mount point
///
/// `RouterLink::new("#")` gives hash routes (`#/shop`), `RouterLink::new("/app")`
/// mounts the trail under `/app`.
#[derive(Debug, Clone)]
pub struct RouterLink {
    base: String,
}

impl RouterLink {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.base, href)
        } else {
            format!("{}/{}", self.base, href)
        }
    }
}

impl LinkRenderer for RouterLink {
    fn render_link(&self, item: &BreadcrumbItem) -> Node {
        Node::link(self.resolve(&item.href), &item.label)
    }
}

/// No navigation at all: crumbs render as text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLabel;

impl LinkRenderer for PlainLabel {
    fn render_link(&self, item: &BreadcrumbItem) -> Node {
        Node::text(&item.label)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Per-render presentation inputs
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Current collapse state, reflected on the toggle
    pub expanded: bool,
    /// Id of the list the toggle controls
    pub list_id: &'a str,
    /// Override for the separator child
    pub separator: Option<&'a Node>,
    /// Class attached to the root container
    pub class_name: Option<&'a str>,
}

/// Accessible label of the toggle for the given state
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "Collapse breadcrumb items"
    } else {
        "Expand breadcrumb items"
    }
}

/// Build the node tree for a display sequence
///
/// Returns `None` for an empty sequence, leaving the region absent.
pub fn render_trail(
    entries: &[DisplayEntry],
    link: &dyn LinkRenderer,
    opts: &RenderOptions<'_>,
) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }

    let last_item = entries.iter().rposition(|e| !e.is_marker());
    let mut children = Vec::with_capacity(entries.len() * 2 - 1);

    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            children.push(Node::Separator {
                child: opts.separator.cloned().map(Box::new),
            });
        }

        let inner = match entry {
            DisplayEntry::Marker { elided } => Node::Toggle {
                expanded: opts.expanded,
                controls: opts.list_id.to_string(),
                aria_label: toggle_label(opts.expanded).to_string(),
                elided: *elided,
            },
            DisplayEntry::Item(item) if Some(idx) == last_item => Node::Page {
                label: item.label.clone(),
            },
            DisplayEntry::Item(item) => link.render_link(item),
        };
        children.push(Node::Item {
            children: vec![inner],
        });
    }

    Some(Node::Nav {
        aria_label: NAV_ARIA_LABEL.to_string(),
        class_name: opts.class_name.map(str::to_string),
        children: vec![Node::List {
            id: opts.list_id.to_string(),
            children,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: RenderOptions<'static> = RenderOptions {
        expanded: false,
        list_id: "crumbs-1",
        separator: None,
        class_name: None,
    };

    fn entries(labels: &[&str]) -> Vec<DisplayEntry> {
        labels
            .iter()
            .map(|l| {
                if *l == "…" {
                    DisplayEntry::Marker { elided: 2 }
                } else {
                    DisplayEntry::Item(BreadcrumbItem::new(format!("/{l}"), *l))
                }
            })
            .collect()
    }

    /// The rendered entries (unwrapped from `Item`) and separators, in order
    fn list_children(tree: &Node) -> &[Node] {
        tree.children()[0].children()
    }

    fn separators(tree: &Node) -> usize {
        list_children(tree)
            .iter()
            .filter(|n| matches!(n, Node::Separator { .. }))
            .count()
    }

    fn inner(tree: &Node) -> Vec<&Node> {
        list_children(tree)
            .iter()
            .filter_map(|n| match n {
                Node::Item { children } => children.first(),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        assert!(render_trail(&[], &AnchorLink, &OPTS).is_none());
    }

    #[test]
    fn test_separator_count() {
        for n in 1..6 {
            let labels: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let tree = render_trail(&entries(&refs), &AnchorLink, &OPTS).unwrap();
            assert_eq!(separators(&tree), n - 1);
            let kids = list_children(&tree);
            assert!(matches!(kids.first(), Some(Node::Item { .. })));
            assert!(matches!(kids.last(), Some(Node::Item { .. })));
        }
    }

    #[test]
    fn test_last_item_is_page_even_with_link_renderer() {
        let tree = render_trail(&entries(&["a", "b"]), &AnchorLink, &OPTS).unwrap();
        let nodes = inner(&tree);
        assert_eq!(nodes[0], &Node::link("/a", "a"));
        assert_eq!(nodes[1], &Node::Page { label: "b".into() });
    }

    #[test]
    fn test_single_item_is_page() {
        let tree = render_trail(&entries(&["only"]), &AnchorLink, &OPTS).unwrap();
        assert_eq!(inner(&tree), [&Node::Page { label: "only".into() }]);
        assert_eq!(separators(&tree), 0);
    }

    #[test]
    fn test_marker_becomes_toggle() {
        let tree = render_trail(&entries(&["a", "…", "z"]), &AnchorLink, &OPTS).unwrap();
        assert_eq!(
            inner(&tree)[1],
            &Node::Toggle {
                expanded: false,
                controls: "crumbs-1".into(),
                aria_label: "Expand breadcrumb items".into(),
                elided: 2,
            }
        );
    }

    #[test]
    fn test_trailing_marker_leaves_last_real_item_as_page() {
        let tree = render_trail(&entries(&["a", "b", "…"]), &AnchorLink, &OPTS).unwrap();
        let nodes = inner(&tree);
        assert_eq!(nodes[0], &Node::link("/a", "a"));
        assert_eq!(nodes[1], &Node::Page { label: "b".into() });
        assert!(matches!(nodes[2], Node::Toggle { .. }));
    }

    #[test]
    fn test_closure_link_renderer() {
        let calls = std::cell::Cell::new(0);
        let link = |item: &BreadcrumbItem| {
            calls.set(calls.get() + 1);
            Node::link(format!("/docs{}", item.href), item.label.to_uppercase())
        };
        let tree = render_trail(&entries(&["a", "b", "c"]), &link, &OPTS).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(inner(&tree)[0], &Node::link("/docs/a", "A"));
    }

    #[test]
    fn test_router_and_plain_links() {
        let item = BreadcrumbItem::new("/shop", "Shop");
        assert_eq!(RouterLink::new("#").render_link(&item), Node::link("#/shop", "Shop"));
        assert_eq!(RouterLink::new("/app/").render_link(&item), Node::link("/app/shop", "Shop"));
        assert_eq!(PlainLabel.render_link(&item), Node::text("Shop"));
    }

    #[test]
    fn test_custom_separator_and_class() {
        let sep = Node::text("/");
        let opts = RenderOptions {
            separator: Some(&sep),
            class_name: Some("crumbs"),
            ..OPTS
        };
        let tree = render_trail(&entries(&["a", "b"]), &AnchorLink, &opts).unwrap();
        let Node::Nav { class_name, aria_label, .. } = &tree else {
            panic!("root is not a nav");
        };
        assert_eq!(class_name.as_deref(), Some("crumbs"));
        assert_eq!(aria_label, NAV_ARIA_LABEL);
        assert_eq!(
            list_children(&tree)[1],
            Node::Separator {
                child: Some(Box::new(Node::text("/")))
            }
        );
    }
}
