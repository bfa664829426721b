//! Breadcrumb derivation and collapsing
//!
//! - [`path`]: path string → crumbs, plus ambient path providers
//! - [`source`]: explicit items vs. path-derived items
//! - [`collapse`]: "first N … last M" condensing and the expanded flag
//! - [`render`]: display entries → [`Node`] tree via a [`LinkRenderer`]
//! - [`component`]: a mounted [`Breadcrumb`] wiring it all together

pub mod collapse;
pub mod component;
pub mod error;
pub mod item;
pub mod options;
pub mod path;
pub mod render;
pub mod source;

pub use collapse::{display_entries, CollapseHooks, CollapseLimits, CollapseState, Hook};
pub use component::{Breadcrumb, BreadcrumbBuilder};
pub use error::TrailError;
pub use item::{BreadcrumbItem, DisplayEntry, COLLAPSE_MARKER_LABEL};
pub use options::TrailOptions;
pub use path::{parse_path, resolve_path, CwdPath, NoAmbientPath, PathProvider, StaticPath};
pub use render::{
    render_trail, toggle_label, AnchorLink, LinkRenderer, Node, PlainLabel, RenderOptions,
    RouterLink, DEFAULT_SEPARATOR, ELLIPSIS,
};
pub use source::{select_items, ItemOrigin};
