//! HTML markup backend
//!
//! Emits the usual breadcrumb structure: a labelled `<nav>`, an
//! `<ol>` annotated as a schema.org `BreadcrumbList`, one `<li>` per crumb
//! and presentational `<li>` separators. All text and attribute values are
//! escaped.

use crate::trail::{Node, DEFAULT_SEPARATOR, ELLIPSIS};
use std::fmt::Write;

const LIST_ITEMTYPE: &str = "https://schema.org/BreadcrumbList";
const ITEM_ITEMTYPE: &str = "https://schema.org/ListItem";

/// Render a node tree as an HTML fragment
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Nav {
            aria_label,
            class_name,
            children,
        } => {
            let _ = write!(
                out,
                r#"<nav aria-label="{}" data-section-group="breadcrumb-list""#,
                escape(aria_label)
            );
            if let Some(class) = class_name {
                let _ = write!(out, r#" class="{}""#, escape(class));
            }
            out.push('>');
            write_children(out, children);
            out.push_str("</nav>");
        }
        Node::List { id, children } => {
            let _ = write!(
                out,
                r#"<ol id="{}" data-section="breadcrumb" itemscope itemtype="{}">"#,
                escape(id),
                LIST_ITEMTYPE
            );
            write_children(out, children);
            out.push_str("</ol>");
        }
        Node::Item { children } => {
            let _ = write!(
                out,
                r#"<li itemprop="itemListElement" itemscope itemtype="{}">"#,
                ITEM_ITEMTYPE
            );
            write_children(out, children);
            out.push_str("</li>");
        }
        Node::Link { href, label } => {
            let _ = write!(out, r#"<a href="{}">{}</a>"#, escape(href), escape(label));
        }
        Node::Page { label } => {
            let _ = write!(
                out,
                r#"<span role="link" aria-disabled="true" aria-current="page">{}</span>"#,
                escape(label)
            );
        }
        Node::Separator { child } => {
            out.push_str(r#"<li role="presentation" aria-hidden="true">"#);
            match child {
                Some(child) => write_node(out, child),
                None => out.push_str(DEFAULT_SEPARATOR),
            }
            out.push_str("</li>");
        }
        Node::Toggle {
            expanded,
            controls,
            aria_label,
            ..
        } => {
            let _ = write!(
                out,
                r#"<button type="button" aria-expanded="{}" aria-controls="{}" aria-label="{}">{}</button>"#,
                expanded,
                escape(controls),
                escape(aria_label),
                ELLIPSIS
            );
        }
        Node::Text { text } => out.push_str(&escape(text)),
    }
}

fn write_children(out: &mut String, children: &[Node]) {
    for child in children {
        write_node(out, child);
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::{AnchorLink, Breadcrumb, BreadcrumbItem};

    fn numbered(n: usize) -> Vec<BreadcrumbItem> {
        (1..=n)
            .map(|i| BreadcrumbItem::new(format!("/p{i}"), format!("P{i}")))
            .collect()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_structure_and_current_page() {
        let crumbs = Breadcrumb::builder()
            .with_items(numbered(2))
            .with_class_name("crumbs")
            .with_link(AnchorLink)
            .build()
            .unwrap();
        let html = to_html(&crumbs.render().unwrap());

        assert!(html.starts_with(
            r#"<nav aria-label="breadcrumb" data-section-group="breadcrumb-list" class="crumbs">"#
        ));
        assert!(html.contains(r#"itemtype="https://schema.org/BreadcrumbList""#));
        assert!(html.contains(r#"<a href="/p1">P1</a>"#));
        assert!(html.contains(r#"aria-current="page">P2</span>"#));
        assert!(!html.contains(r#"href="/p2""#));
        assert_eq!(html.matches(r#"role="presentation""#).count(), 1);
        assert!(html.ends_with("</ol></nav>"));
    }

    #[test]
    fn test_toggle_controls_list() {
        let crumbs = Breadcrumb::builder()
            .with_items(numbered(10))
            .with_max_items(4)
            .with_link(AnchorLink)
            .build()
            .unwrap();
        let html = to_html(&crumbs.render().unwrap());
        let id = crumbs.list_id();

        assert!(html.contains(&format!(r#"<ol id="{id}""#)));
        assert!(html.contains(&format!(
            r#"<button type="button" aria-expanded="false" aria-controls="{id}" aria-label="Expand breadcrumb items">…</button>"#
        )));
    }

    #[test]
    fn test_labels_are_escaped() {
        let crumbs = Breadcrumb::builder()
            .with_current_path("/a/%3Cscript%3E")
            .with_link(AnchorLink)
            .build()
            .unwrap();
        let html = to_html(&crumbs.render().unwrap());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
