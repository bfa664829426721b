//! Terminal backend: node tree → styled ratatui line
//!
//! Links and the collapse toggle are the interactive targets. They are
//! numbered left to right so a host can move focus between them and
//! activate the focused one.

use crate::trail::{Node, DEFAULT_SEPARATOR, ELLIPSIS};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Styles applied to each kind of node
#[derive(Debug, Clone, Copy)]
pub struct CrumbStyles {
    pub link: Style,
    pub page: Style,
    pub separator: Style,
    pub toggle: Style,
    pub text: Style,
    /// Added on top of the focused target's style
    pub focus: Style,
}

impl Default for CrumbStyles {
    fn default() -> Self {
        Self {
            link: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            page: Style::default().add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::DarkGray),
            toggle: Style::default().fg(Color::Yellow),
            text: Style::default(),
            focus: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Something the user can activate in the rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Navigate to this href
    Link(String),
    /// Expand or collapse the trail
    Toggle,
}

/// Interactive targets in display order
pub fn targets(node: &Node) -> Vec<Target> {
    node.descendants()
        .into_iter()
        .filter_map(|n| match n {
            Node::Link { href, .. } => Some(Target::Link(href.clone())),
            Node::Toggle { .. } => Some(Target::Toggle),
            _ => None,
        })
        .collect()
}

/// Render the tree as one line, highlighting the `focus`-th target
pub fn to_line(node: &Node, styles: &CrumbStyles, focus: Option<usize>) -> Line<'static> {
    let mut spans = Vec::new();
    let mut target_idx = 0;
    push_spans(&mut spans, node, styles, focus, &mut target_idx);
    Line::from(spans)
}

fn push_spans(
    spans: &mut Vec<Span<'static>>,
    node: &Node,
    styles: &CrumbStyles,
    focus: Option<usize>,
    target_idx: &mut usize,
) {
    let target = |style: Style, idx: &mut usize| {
        let focused = focus == Some(*idx);
        *idx += 1;
        if focused {
            style.patch(styles.focus)
        } else {
            style
        }
    };

    match node {
        Node::Nav { children, .. } | Node::List { children, .. } | Node::Item { children } => {
            for child in children {
                push_spans(spans, child, styles, focus, target_idx);
            }
        }
        Node::Link { label, .. } => {
            let style = target(styles.link, target_idx);
            spans.push(Span::styled(label.clone(), style));
        }
        Node::Toggle { .. } => {
            let style = target(styles.toggle, target_idx);
            spans.push(Span::styled(ELLIPSIS, style));
        }
        Node::Page { label } => spans.push(Span::styled(label.clone(), styles.page)),
        Node::Text { text } => spans.push(Span::styled(text.clone(), styles.text)),
        Node::Separator { child } => {
            spans.push(Span::styled(" ", styles.separator));
            match child {
                Some(child) => push_spans(spans, child, styles, focus, target_idx),
                None => spans.push(Span::styled(DEFAULT_SEPARATOR, styles.separator)),
            }
            spans.push(Span::styled(" ", styles.separator));
        }
    }
}

/// Display width of a line in terminal cells
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// Drop leading spans until the line fits `max_width`, marking the cut
///
/// The rightmost (current) end of a trail is the part worth keeping.
pub fn fit_to_width(line: Line<'static>, max_width: usize, styles: &CrumbStyles) -> Line<'static> {
    if line_width(&line) <= max_width {
        return line;
    }

    let prefix = format!("{ELLIPSIS} ");
    if max_width < prefix.width() {
        // No room for the marker and a crumb
        return match max_width {
            0 => Line::default(),
            _ => Line::from(Span::styled(ELLIPSIS, styles.separator)),
        };
    }
    let budget = max_width.saturating_sub(prefix.width());
    let mut spans = line.spans;
    let mut width: usize = spans.iter().map(|s| s.content.width()).sum();
    let mut start = 0;
    while width > budget && start < spans.len() {
        width -= spans[start].content.width();
        start += 1;
    }

    let mut fitted = vec![Span::styled(prefix, styles.separator)];
    fitted.extend(spans.drain(start..));
    Line::from(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::{AnchorLink, Breadcrumb, BreadcrumbItem};

    fn collapsed_tree() -> Node {
        let items = (1..=6)
            .map(|i| BreadcrumbItem::new(format!("/p{i}"), format!("P{i}")))
            .collect();
        Breadcrumb::builder()
            .with_items(items)
            .with_max_items(3)
            .with_items_before_collapse(2)
            .with_link(AnchorLink)
            .build()
            .unwrap()
            .render()
            .unwrap()
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_targets_in_display_order() {
        assert_eq!(
            targets(&collapsed_tree()),
            vec![
                Target::Link("/p1".into()),
                Target::Link("/p2".into()),
                Target::Toggle,
            ]
        );
    }

    #[test]
    fn test_line_text_matches_trail() {
        let line = to_line(&collapsed_tree(), &CrumbStyles::default(), None);
        assert_eq!(plain(&line), "P1 › P2 › … › P6");
        assert_eq!(line_width(&line), 16);
    }

    #[test]
    fn test_focus_highlights_one_target() {
        let styles = CrumbStyles::default();
        let line = to_line(&collapsed_tree(), &styles, Some(2));
        let focused: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style.add_modifier.contains(Modifier::REVERSED))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(focused, ["…"]);
    }

    #[test]
    fn test_page_is_never_a_target() {
        let styles = CrumbStyles::default();
        // focus past the last target highlights nothing
        let line = to_line(&collapsed_tree(), &styles, Some(3));
        assert!(line
            .spans
            .iter()
            .all(|s| !s.style.add_modifier.contains(Modifier::REVERSED)));
    }

    #[test]
    fn test_fit_keeps_the_current_end() {
        let styles = CrumbStyles::default();
        let line = to_line(&collapsed_tree(), &styles, None);
        let fitted = fit_to_width(line, 10, &styles);
        assert!(line_width(&fitted) <= 10);
        assert!(plain(&fitted).starts_with("… "));
        assert!(plain(&fitted).ends_with("P6"));
    }

    #[test]
    fn test_fit_never_exceeds_tiny_widths() {
        let styles = CrumbStyles::default();
        for max_width in 0..3 {
            let fitted = fit_to_width(to_line(&collapsed_tree(), &styles, None), max_width, &styles);
            assert!(line_width(&fitted) <= max_width, "width {max_width}: {:?}", plain(&fitted));
        }

        let one = fit_to_width(to_line(&collapsed_tree(), &styles, None), 1, &styles);
        assert_eq!(plain(&one), "…");
    }

    #[test]
    fn test_fit_leaves_short_lines_alone() {
        let styles = CrumbStyles::default();
        let line = to_line(&collapsed_tree(), &styles, None);
        let fitted = fit_to_width(line.clone(), 80, &styles);
        assert_eq!(fitted, line);
    }
}
