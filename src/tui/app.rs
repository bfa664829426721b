// TUI application state
//
// Holds the mounted breadcrumb, which of its targets has focus, the log
// buffer shown in the log strip and transient UI state (toast, theme).

use super::clipboard;
use super::theme::{Theme, ThemeKind};
use super::toast::Toast;
use crate::logging::LogBuffer;
use crumbtrail::backend::terminal::{self, Target};
use crumbtrail::trail::{Breadcrumb, Node};

/// Main application state for the TUI
pub struct App {
    /// The trail being browsed
    pub crumbs: Breadcrumb,

    /// Index into the trail's interactive targets
    pub focus: usize,

    /// Captured log entries for the log strip
    pub log_buffer: LogBuffer,

    /// Current theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Transient status message
    pub toast: Option<Toast>,

    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl App {
    pub fn new(crumbs: Breadcrumb, log_buffer: LogBuffer, theme_kind: ThemeKind) -> Self {
        Self {
            crumbs,
            focus: 0,
            log_buffer,
            theme_kind,
            theme: theme_kind.theme(),
            toast: None,
            should_quit: false,
        }
    }

    /// Current presentational tree
    pub fn tree(&self) -> Option<Node> {
        self.crumbs.render()
    }

    /// Links and toggle in display order
    pub fn targets(&self) -> Vec<Target> {
        self.tree()
            .map(|node| terminal::targets(&node))
            .unwrap_or_default()
    }

    pub fn focused_target(&self) -> Option<Target> {
        self.targets().into_iter().nth(self.focus)
    }

    pub fn focus_next(&mut self) {
        let count = self.targets().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.targets().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    pub fn focus_first(&mut self) {
        self.focus = 0;
    }

    pub fn focus_last(&mut self) {
        self.focus = self.targets().len().saturating_sub(1);
    }

    /// Keep focus inside the target list after the trail changed shape
    fn clamp_focus(&mut self) {
        let count = self.targets().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }

    /// Expand or collapse the trail
    pub fn toggle_collapse(&mut self) {
        let expanded = self.crumbs.toggle();
        self.clamp_focus();
        self.toast = Some(Toast::new(if expanded { "Expanded" } else { "Collapsed" }));
    }

    /// Activate the focused target: toggle, or navigate to the link
    pub fn activate(&mut self) {
        match self.focused_target() {
            Some(Target::Toggle) => self.toggle_collapse(),
            Some(Target::Link(href)) => self.navigate(href),
            None => {}
        }
    }

    /// Move the trail to `href`
    ///
    /// Path-derived trails shrink to the chosen crumb; explicit items are
    /// unaffected apart from the recorded location.
    pub fn navigate(&mut self, href: String) {
        tracing::info!(href = %href, "navigate");
        self.crumbs.set_current_path(href.clone());
        self.focus_last();
        self.toast = Some(Toast::new(format!("→ {}", href)));
    }

    /// Copy the focused link's href to the clipboard
    pub fn copy_focused(&mut self) {
        let Some(Target::Link(href)) = self.focused_target() else {
            self.toast = Some(Toast::new("Nothing to copy"));
            return;
        };

        match clipboard::copy_to_clipboard(&href) {
            Ok(()) => self.toast = Some(Toast::new(format!("Copied {}", href))),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.toast = Some(Toast::error("Clipboard unavailable"));
            }
        }
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme_kind.name())));
    }

    /// Periodic housekeeping (expire toasts)
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
