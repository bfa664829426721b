//! Plain text backend

use crate::trail::{Node, DEFAULT_SEPARATOR, ELLIPSIS};

/// Render a node tree as a single line of text
pub fn to_text(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Nav { children, .. } | Node::List { children, .. } | Node::Item { children } => {
            for child in children {
                write_node(out, child);
            }
        }
        Node::Link { label, .. } | Node::Page { label } => out.push_str(label),
        Node::Text { text } => out.push_str(text),
        Node::Separator { child } => {
            out.push(' ');
            match child {
                Some(child) => write_node(out, child),
                None => out.push_str(DEFAULT_SEPARATOR),
            }
            out.push(' ');
        }
        Node::Toggle { .. } => out.push_str(ELLIPSIS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::{AnchorLink, Breadcrumb, BreadcrumbItem};

    #[test]
    fn test_text_from_path() {
        let crumbs = Breadcrumb::builder()
            .with_current_path("/shop/Shoes/running")
            .with_link(AnchorLink)
            .build()
            .unwrap();
        assert_eq!(to_text(&crumbs.render().unwrap()), "Shop › Shoes › Running");
    }

    #[test]
    fn test_text_collapsed_with_custom_separator() {
        let items = (0..6)
            .map(|i| BreadcrumbItem::new(format!("/{i}"), format!("c{i}")))
            .collect();
        let crumbs = Breadcrumb::builder()
            .with_items(items)
            .with_max_items(3)
            .with_separator(Node::text("/"))
            .with_link(AnchorLink)
            .build()
            .unwrap();
        assert_eq!(to_text(&crumbs.render().unwrap()), "c0 / … / c5");
    }
}
