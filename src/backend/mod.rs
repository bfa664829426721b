//! Presentational backends for the breadcrumb node tree
//!
//! Each backend consumes a [`Node`](crate::trail::Node) tree as produced by
//! the render adapter and emits one output format. Backends keep the order
//! and count of the children they are handed.
//!
//! - [`text`]: `Shop › Shoes › Running`
//! - [`html`]: `<nav>` / `<ol>` markup with ARIA and schema.org attributes
//! - [`terminal`]: a styled ratatui [`Line`](ratatui::text::Line)

pub mod html;
pub mod terminal;
pub mod text;
