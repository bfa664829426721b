//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic or literal string
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_owned()).to_string()
}

impl Config {
    /// Serialize explicit items as [[items]] tables
    fn items_to_toml(&self) -> String {
        if self.items.is_empty() {
            // Show example comments when no items configured
            return r#"
# Explicit items replace path-derived crumbs entirely when present.
# [[items]]
# href = "/"
# label = "Home"
#
# [[items]]
# href = "/components"
# label = "Components"
"#
            .to_string();
        }

        let mut output = String::from("\n");
        for item in &self.items {
            output.push_str("[[items]]\n");
            output.push_str(&format!("href = {}\n", quoted(&item.href)));
            output.push_str(&format!("label = {}\n", quoted(&item.label)));
            output.push('\n');
        }
        output
    }

    /// Render a commented `key = "value"` line for optional strings
    fn optional_line(key: &str, value: &Option<String>, example: &str) -> String {
        match value {
            Some(v) => format!("{key} = {}\n", quoted(v)),
            None => format!("# {key} = {}\n", quoted(example)),
        }
    }

    /// Serialize the full config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let trail = &self.trail;
        let logging = &self.logging;

        format!(
            r#"# crumbtrail configuration

# Theme for the interactive view: dark, light, mono
theme = {theme}

# Trail defaults (command-line flags override these)
[trail]
# Collapse once the trail has more items than this
max_items = {max_items}
# Items kept at each end when collapsed
items_before_collapse = {before}
items_after_collapse = {after}
# Derive crumbs from the current path when no [[items]] are set
sync_with_url = {sync}
{separator}{class_name}{link_base}
# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"  # trace, debug, info, warn, error
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
{items}"#,
            theme = quoted(&self.theme),
            max_items = trail.max_items,
            before = trail.items_before_collapse,
            after = trail.items_after_collapse,
            sync = trail.sync_with_url,
            separator = Self::optional_line("separator", &trail.separator, "/"),
            class_name = Self::optional_line("class_name", &trail.class_name, "breadcrumbs"),
            link_base = Self::optional_line("link_base", &trail.link_base, "#"),
            log_level = logging.level_name(),
            log_file_enabled = logging.file_enabled,
            log_file_dir = quoted(&logging.file_dir.display().to_string().replace('\\', "/")),
            log_file_rotation = logging.file_rotation,
            log_file_prefix = quoted(&logging.file_prefix),
            items = self.items_to_toml(),
        )
    }
}
