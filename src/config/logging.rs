//! `[logging]` section: level and optional rolling file output
//!
//! Both the level and the rotation are checked while the file is parsed, so
//! a typo lands in the config error box instead of reaching the subscriber.

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;
use tracing::Level;

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, never rotated
    Never,
}

impl fmt::Display for LogRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        })
    }
}

/// Effective logging settings for the binary
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for `crumbtrail` targets when RUST_LOG is unset
    pub level: Level,
    /// Also write JSON lines to a file
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

impl LoggingConfig {
    /// Level as written in config files and filter directives
    pub fn level_name(&self) -> String {
        self.level.as_str().to_ascii_lowercase()
    }

    /// Overlay a parsed `[logging]` section on the defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let Some(file) = file else {
            return Self::default();
        };
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.unwrap_or(defaults.file_dir),
            file_rotation: file.file_rotation.unwrap_or(defaults.file_rotation),
            file_prefix: file
                .file_prefix
                .filter(|prefix| !prefix.is_empty())
                .unwrap_or(defaults.file_prefix),
        }
    }
}

/// `[logging]` as it appears in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    #[serde(default, deserialize_with = "parse_level")]
    pub level: Option<Level>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<PathBuf>,
    pub file_rotation: Option<LogRotation>,
    pub file_prefix: Option<String>,
}

/// Parse a level name (`trace` … `error`, any case)
pub fn parse_level_name(name: &str) -> Option<Level> {
    name.trim().parse().ok()
}

fn parse_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(name) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_level_name(&name).map(Some).ok_or_else(|| {
        de::Error::custom(format!(
            "unknown log level {name:?}, expected trace, debug, info, warn or error"
        ))
    })
}
