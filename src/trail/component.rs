//! The breadcrumb component instance
//!
//! Ties the pieces together for one mounted breadcrumb:
//!
//! ```text
//! (items | path provider) → select_items → display_entries → render_trail → Node
//! ```
//!
//! The only state is the `expanded` flag, changed exclusively by
//! [`Breadcrumb::toggle`]. Everything else is recomputed from the options on
//! each call, so repeated renders with unchanged inputs are identical.

use super::collapse::{display_entries, CollapseState, Hook};
use super::error::TrailError;
use super::item::{BreadcrumbItem, DisplayEntry};
use super::options::TrailOptions;
use super::path::{parse_path, resolve_path, NoAmbientPath, PathProvider};
use super::render::{render_trail, LinkRenderer, Node, RenderOptions};
use super::source::{select_items, ItemOrigin};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(1);

fn next_list_id() -> String {
    format!("crumbtrail-list-{}", NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
}

/// A mounted breadcrumb trail
pub struct Breadcrumb {
    options: TrailOptions,
    link: Box<dyn LinkRenderer>,
    paths: Box<dyn PathProvider>,
    state: CollapseState,
    list_id: String,
}

impl fmt::Debug for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breadcrumb")
            .field("options", &self.options)
            .field("expanded", &self.state.expanded())
            .field("list_id", &self.list_id)
            .finish()
    }
}

impl Breadcrumb {
    pub fn builder() -> BreadcrumbBuilder {
        BreadcrumbBuilder::new()
    }

    pub fn options(&self) -> &TrailOptions {
        &self.options
    }

    /// Replace the per-render options, keeping the collapse state
    pub fn set_options(&mut self, options: TrailOptions) {
        warn_if_misconfigured(&options);
        self.options = options;
    }

    /// Point path derivation at a new location
    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.options.current_path = Some(path.into());
    }

    /// The path items would be derived from
    pub fn current_path(&self) -> String {
        resolve_path(self.options.current_path.as_deref(), self.paths.as_ref())
    }

    /// Effective items and where they came from
    pub fn derive(&self) -> (Vec<BreadcrumbItem>, ItemOrigin) {
        select_items(&self.options.items, self.options.sync_with_url, || {
            parse_path(&self.current_path())
        })
    }

    /// Effective items, root to leaf
    pub fn items(&self) -> Vec<BreadcrumbItem> {
        self.derive().0
    }

    /// The sequence actually displayed, honoring the collapse state
    pub fn display_items(&self) -> Vec<DisplayEntry> {
        display_entries(&self.items(), &self.options.limits, self.state.expanded())
    }

    pub fn expanded(&self) -> bool {
        self.state.expanded()
    }

    /// Whether the current view hides items behind the marker
    pub fn is_collapsed(&self) -> bool {
        !self.state.expanded() && self.options.limits.should_collapse(self.items().len())
    }

    /// Flip between collapsed and expanded, firing both hooks
    pub fn toggle(&mut self) -> bool {
        self.state.toggle(&self.options.hooks)
    }

    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Build the presentational tree; `None` when there is nothing to show
    pub fn render(&self) -> Option<Node> {
        let entries = self.display_items();
        let opts = RenderOptions {
            expanded: self.state.expanded(),
            list_id: &self.list_id,
            separator: self.options.separator.as_ref(),
            class_name: self.options.class_name.as_deref(),
        };
        render_trail(&entries, self.link.as_ref(), &opts)
    }
}

fn warn_if_misconfigured(options: &TrailOptions) {
    if let Err(e) = options.check() {
        tracing::warn!("{}; collapsed trails will be clamped", e);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for [`Breadcrumb`]
///
/// ```
/// use crumbtrail::trail::{AnchorLink, Breadcrumb, BreadcrumbItem};
///
/// let crumbs = Breadcrumb::builder()
///     .with_items(vec![
///         BreadcrumbItem::new("/", "Home"),
///         BreadcrumbItem::new("/docs", "Docs"),
///     ])
///     .with_link(AnchorLink)
///     .build()
///     .unwrap();
/// assert_eq!(crumbs.items().len(), 2);
/// ```
pub struct BreadcrumbBuilder {
    options: TrailOptions,
    link: Option<Box<dyn LinkRenderer>>,
    paths: Box<dyn PathProvider>,
}

impl Default for BreadcrumbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbBuilder {
    pub fn new() -> Self {
        Self {
            options: TrailOptions::default(),
            link: None,
            paths: Box::new(NoAmbientPath),
        }
    }

    /// Start from a complete options value
    pub fn with_options(mut self, options: TrailOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_items(mut self, items: Vec<BreadcrumbItem>) -> Self {
        self.options.items = items;
        self
    }

    pub fn with_item(mut self, item: BreadcrumbItem) -> Self {
        self.options.items.push(item);
        self
    }

    pub fn with_sync_with_url(mut self, sync: bool) -> Self {
        self.options.sync_with_url = sync;
        self
    }

    pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
        self.options.current_path = Some(path.into());
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.options.limits.max_items = max_items;
        self
    }

    pub fn with_items_before_collapse(mut self, count: usize) -> Self {
        self.options.limits.items_before = count;
        self
    }

    pub fn with_items_after_collapse(mut self, count: usize) -> Self {
        self.options.limits.items_after = count;
        self
    }

    pub fn with_separator(mut self, separator: Node) -> Self {
        self.options.separator = Some(separator);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.class_name = Some(class_name.into());
        self
    }

    pub fn with_before_collapse<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.options.hooks.before_collapse = Some(Arc::new(hook) as Hook);
        self
    }

    pub fn with_after_collapse<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.options.hooks.after_collapse = Some(Arc::new(hook) as Hook);
        self
    }

    /// Set the link renderer (required)
    pub fn with_link(mut self, link: impl LinkRenderer + 'static) -> Self {
        self.link = Some(Box::new(link));
        self
    }

    /// Set a link renderer chosen at runtime
    pub fn with_boxed_link(mut self, link: Box<dyn LinkRenderer>) -> Self {
        self.link = Some(link);
        self
    }

    /// Set the source of the ambient path (default: none available)
    pub fn with_path_provider(mut self, paths: impl PathProvider + 'static) -> Self {
        self.paths = Box::new(paths);
        self
    }

    /// Validate and mount the breadcrumb
    ///
    /// Fails when no link renderer was supplied. Misconfigured collapse
    /// limits only produce a warning.
    pub fn build(self) -> Result<Breadcrumb, TrailError> {
        let link = self.link.ok_or(TrailError::MissingLinkRenderer)?;
        warn_if_misconfigured(&self.options);

        Ok(Breadcrumb {
            options: self.options,
            link,
            paths: self.paths,
            state: CollapseState::new(),
            list_id: next_list_id(),
        })
    }
}
