// Theme system for the TUI
//
// Each theme defines the crumb styles handed to the terminal backend plus
// the colors of the surrounding chrome (borders, log strip, status bar).

use crumbtrail::backend::terminal::CrumbStyles;
use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Mono,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Mono]
    }

    /// Parse a config theme name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "mono" | "monochrome" => ThemeKind::Mono,
            "dark" => ThemeKind::Dark,
            other => {
                tracing::warn!("Unknown theme {:?}, using dark", other);
                ThemeKind::Dark
            }
        }
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Mono => "Mono",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Mono => Theme::mono(),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    /// Styles for the trail itself
    pub crumbs: CrumbStyles,

    // Chrome
    pub border: Color,
    pub title: Color,
    pub muted: Color,
    pub status_bar: Color,
    pub toast: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            crumbs: CrumbStyles::default(),

            border: Color::Gray,
            title: Color::Cyan,
            muted: Color::DarkGray,
            status_bar: Color::Green,
            toast: Color::Yellow,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            crumbs: CrumbStyles {
                link: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
                page: Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                separator: Style::default().fg(Color::Gray),
                toggle: Style::default().fg(Color::Magenta),
                text: Style::default().fg(Color::Black),
                focus: Style::default().add_modifier(Modifier::REVERSED),
            },

            border: Color::DarkGray,
            title: Color::Blue,
            muted: Color::Gray,
            status_bar: Color::DarkGray,
            toast: Color::Magenta,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// No colors, modifiers only
    pub fn mono() -> Self {
        Self {
            crumbs: CrumbStyles {
                link: Style::default().add_modifier(Modifier::UNDERLINED),
                page: Style::default().add_modifier(Modifier::BOLD),
                separator: Style::default().add_modifier(Modifier::DIM),
                toggle: Style::default().add_modifier(Modifier::BOLD),
                text: Style::default(),
                focus: Style::default().add_modifier(Modifier::REVERSED),
            },

            border: Color::Reset,
            title: Color::Reset,
            muted: Color::Reset,
            status_bar: Color::Reset,
            toast: Color::Reset,

            log_error: Color::Reset,
            log_warn: Color::Reset,
            log_info: Color::Reset,
            log_debug: Color::Reset,
            log_trace: Color::Reset,
        }
    }
}
