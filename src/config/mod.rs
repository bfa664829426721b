//! Configuration for the crumbtrail binary
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/crumbtrail/config.toml)
//! 3. Built-in defaults (lowest priority)

use crumbtrail::trail::BreadcrumbItem;
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;
mod trail;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use logging::{parse_level_name, FileLogging, LogRotation, LoggingConfig};
pub use trail::{FileTrail, TrailConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name for the interactive view: "dark", "light", "mono"
    pub theme: String,

    /// Trail defaults (collapse limits, sync, separator, links)
    pub trail: TrailConfig,

    /// Explicit items; when non-empty they replace path-derived crumbs
    pub items: Vec<BreadcrumbItem>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            trail: TrailConfig::default(),
            items: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [trail] section
    pub trail: Option<FileTrail>,

    /// Optional [[items]] array
    #[serde(default)]
    pub items: Vec<BreadcrumbItem>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl FileConfig {
    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/crumbtrail/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("crumbtrail").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Overwrite the config file with defaults
    pub fn reset_config_file() -> anyhow::Result<PathBuf> {
        use anyhow::Context;

        let path = Self::config_path().context("Could not determine config path")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be parsed.
    /// A broken config should fail fast with a clear error, not silently
    /// fall back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match FileConfig::parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - [[items]] entries without both href and label");
                    eprintln!("    - Negative numbers for collapse limits");
                    eprintln!("    - Unknown [logging] level or file_rotation values\n");
                    eprintln!("  To reset, run `crumbtrail config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_file_with_env(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn from_file_with_env<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Theme: env > file > default
        let theme = env("CRUMBTRAIL_THEME")
            .or(file.theme)
            .unwrap_or_else(|| "dark".to_string());

        let mut trail = TrailConfig::from_file(file.trail);

        // Max items: env > file > default
        if let Some(max_items) = env("CRUMBTRAIL_MAX_ITEMS").and_then(|v| v.parse().ok()) {
            trail.max_items = max_items;
        }

        let mut logging = LoggingConfig::from_file(file.logging);

        // Log level: env > file > default (RUST_LOG still wins at filter time)
        let env_level = env("CRUMBTRAIL_LOG");
        if let Some(level) = env_level.as_deref().and_then(parse_level_name) {
            logging.level = level;
        }

        Self {
            theme,
            trail,
            items: file.items,
            logging,
        }
    }
}
