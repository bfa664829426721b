//! Configuration tests
//!
//! Round-trips guard the hand-written TOML template: every field written by
//! `to_toml()` must parse back into the same effective config.

use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

fn reload(config: &Config) -> Config {
    let toml_str = config.to_toml();
    let file = FileConfig::parse(&toml_str).unwrap_or_else(|e| {
        panic!("Config should round-trip.\nTOML:\n{}\nError: {:?}", toml_str, e)
    });
    Config::from_file_with_env(file, no_env)
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let parsed = reload(&config);

    assert_eq!(parsed.theme, config.theme);
    assert_eq!(parsed.trail, config.trail);
    assert!(parsed.items.is_empty());
    assert_eq!(parsed.logging.level, tracing::Level::INFO);
    assert_eq!(parsed.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_with_items_and_overrides() {
    let mut config = Config::default();
    config.theme = "mono".to_string();
    config.trail.max_items = 4;
    config.trail.items_before_collapse = 2;
    config.trail.separator = Some("/".to_string());
    config.trail.link_base = Some("#".to_string());
    config.logging.file_rotation = LogRotation::Never;
    config.items = vec![
        BreadcrumbItem::new("/", "Home"),
        BreadcrumbItem::new("/docs", "Docs \"quoted\""),
    ];

    let parsed = reload(&config);
    assert_eq!(parsed.theme, "mono");
    assert_eq!(parsed.trail, config.trail);
    assert_eq!(parsed.items, config.items);
    assert_eq!(parsed.logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.theme = "a\"b".to_string();
    config.trail.separator = Some("\\".to_string());
    config.logging.file_prefix = "crumb\ttrail".to_string();
    config.items = vec![
        BreadcrumbItem::new("/soft", "soft\u{ad}hyphen"),
        BreadcrumbItem::new("/ctl", "bell\u{7}and \"quote\""),
    ];

    let toml_str = config.to_toml();
    assert!(!toml_str.contains("\\u{"));

    let parsed = reload(&config);
    assert_eq!(parsed.theme, "a\"b");
    assert_eq!(parsed.trail.separator.as_deref(), Some("\\"));
    assert_eq!(parsed.logging.file_prefix, "crumb\ttrail");
    assert_eq!(parsed.items, config.items);
}

#[test]
fn test_config_roundtrip_logging_section() {
    let mut config = Config::default();
    config.logging.level = tracing::Level::TRACE;
    config.logging.file_enabled = true;
    config.logging.file_dir = std::path::PathBuf::from("/var/log/crumb trail");
    config.logging.file_rotation = LogRotation::Hourly;

    assert_eq!(reload(&config).logging, config.logging);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_sections_use_defaults() {
    let file = FileConfig::parse("").unwrap();
    let config = Config::from_file_with_env(file, no_env);
    assert_eq!(config.trail, TrailConfig::default());
    assert_eq!(config.theme, "dark");
}

#[test]
fn test_env_overrides_file() {
    let file = FileConfig::parse(
        r#"
theme = "light"
[trail]
max_items = 3
[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::from_file_with_env(file, |key| match key {
        "CRUMBTRAIL_THEME" => Some("mono".to_string()),
        "CRUMBTRAIL_MAX_ITEMS" => Some("12".to_string()),
        "CRUMBTRAIL_LOG" => Some("debug".to_string()),
        _ => None,
    });

    assert_eq!(config.theme, "mono");
    assert_eq!(config.trail.max_items, 12);
    assert_eq!(config.logging.level, tracing::Level::DEBUG);
}

#[test]
fn test_unparseable_env_number_is_ignored() {
    let file = FileConfig::parse("[trail]\nmax_items = 3\n").unwrap();
    let config = Config::from_file_with_env(file, |key| {
        (key == "CRUMBTRAIL_MAX_ITEMS").then(|| "lots".to_string())
    });
    assert_eq!(config.trail.max_items, 3);
}

#[test]
fn test_invalid_file_is_an_error() {
    assert!(FileConfig::parse("[trail]\nmax_items = -1\n").is_err());
    assert!(FileConfig::parse("[[items]]\nhref = \"/\"\n").is_err());
}

#[test]
fn test_invalid_logging_values_are_errors() {
    assert!(FileConfig::parse("[logging]\nlevel = \"loud\"\n").is_err());
    assert!(FileConfig::parse("[logging]\nfile_rotation = \"weekly\"\n").is_err());
}

#[test]
fn test_logging_section_is_typed() {
    let file = FileConfig::parse(
        "[logging]\nlevel = \"WARN\"\nfile_rotation = \"never\"\nfile_dir = \"/tmp/ct\"\n",
    )
    .unwrap();
    let config = Config::from_file_with_env(file, no_env);

    assert_eq!(config.logging.level, tracing::Level::WARN);
    assert_eq!(config.logging.level_name(), "warn");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.file_dir, std::path::PathBuf::from("/tmp/ct"));
    assert_eq!(config.logging.file_prefix, "crumbtrail");
}

#[test]
fn test_unknown_env_level_is_ignored() {
    let file = FileConfig::parse("[logging]\nlevel = \"warn\"\n").unwrap();
    let config = Config::from_file_with_env(file, |key| {
        (key == "CRUMBTRAIL_LOG").then(|| "chatty".to_string())
    });
    assert_eq!(config.logging.level, tracing::Level::WARN);
}

#[test]
fn test_empty_strings_mean_unset() {
    let file = FileConfig::parse("[trail]\nseparator = \"\"\nlink_base = \"\"\n").unwrap();
    let config = Config::from_file_with_env(file, no_env);
    assert_eq!(config.trail.separator, None);
    assert_eq!(config.trail.link_base, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion to trail options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_trail_options_from_config() {
    use crumbtrail::trail::{CollapseLimits, Node};

    let trail = TrailConfig {
        max_items: 5,
        items_before_collapse: 2,
        items_after_collapse: 1,
        sync_with_url: false,
        separator: Some("/".to_string()),
        class_name: Some("crumbs".to_string()),
        link_base: None,
    };
    let options = trail.to_options(vec![BreadcrumbItem::new("/", "Home")]);

    assert_eq!(options.limits, CollapseLimits::new(5, 2, 1));
    assert!(!options.sync_with_url);
    assert_eq!(options.separator, Some(Node::text("/")));
    assert_eq!(options.class_name.as_deref(), Some("crumbs"));
    assert_eq!(options.items.len(), 1);
}

#[test]
fn test_link_renderer_follows_link_base() {
    use crumbtrail::trail::Node;

    let item = BreadcrumbItem::new("/shop", "Shop");
    let mut trail = TrailConfig::default();
    assert_eq!(trail.link_renderer().render_link(&item), Node::link("/shop", "Shop"));

    trail.link_base = Some("#".to_string());
    assert_eq!(trail.link_renderer().render_link(&item), Node::link("#/shop", "Shop"));
}
