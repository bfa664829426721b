// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - render: one-shot render of a trail as text, html or json
// - tui: interactive view of a trail (the default with no subcommand)
// - config --show / --path / --reset: inspect or regenerate the config file

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crumbtrail::backend::{html, text};
use crumbtrail::trail::{
    Breadcrumb, BreadcrumbItem, CwdPath, LinkRenderer, Node, PathProvider,
};

/// crumbtrail - breadcrumb trails for paths and item lists
#[derive(Parser, Debug)]
#[command(name = "crumbtrail")]
#[command(version = VERSION)]
#[command(about = "Breadcrumb trails for paths and item lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a trail once and print it
    Render(RenderArgs),

    /// Browse a trail interactively
    Tui(TrailArgs),

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Output format for `render`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Html,
    Json,
}

/// Trail inputs shared by `render` and `tui`
#[derive(Args, Debug, Default, Clone)]
pub struct TrailArgs {
    /// Path to derive crumbs from (default: working directory)
    pub path: Option<String>,

    /// Explicit item as HREF=LABEL (repeatable); replaces path-derived crumbs
    #[arg(long = "item", value_name = "HREF=LABEL", value_parser = parse_item)]
    pub items: Vec<BreadcrumbItem>,

    /// Collapse once the trail has more items than this
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Items kept before the marker when collapsed
    #[arg(long)]
    pub before: Option<usize>,

    /// Items kept after the marker when collapsed
    #[arg(long)]
    pub after: Option<usize>,

    /// Start expanded
    #[arg(long)]
    pub expanded: bool,

    /// Never derive crumbs from the path
    #[arg(long)]
    pub no_sync: bool,

    /// Separator text between crumbs
    #[arg(long)]
    pub separator: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub trail: TrailArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

fn parse_item(s: &str) -> Result<BreadcrumbItem, String> {
    BreadcrumbItem::parse_pair(s).ok_or_else(|| format!("expected HREF=LABEL, got {s:?}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Trail construction
// ─────────────────────────────────────────────────────────────────────────────

impl TrailArgs {
    /// Build a breadcrumb from config defaults overridden by these flags
    pub fn build(&self, config: &Config, paths: impl PathProvider + 'static) -> Result<Breadcrumb> {
        self.build_with_link(config, paths, config.trail.link_renderer())
    }

    /// Same as [`TrailArgs::build`] with an explicit link renderer
    pub fn build_with_link(
        &self,
        config: &Config,
        paths: impl PathProvider + 'static,
        link: Box<dyn LinkRenderer>,
    ) -> Result<Breadcrumb> {
        let items = if self.items.is_empty() {
            config.items.clone()
        } else {
            self.items.clone()
        };

        let mut options = config.trail.to_options(items);
        if let Some(max_items) = self.max_items {
            options.limits.max_items = max_items;
        }
        if let Some(before) = self.before {
            options.limits.items_before = before;
        }
        if let Some(after) = self.after {
            options.limits.items_after = after;
        }
        if self.no_sync {
            options.sync_with_url = false;
        }
        if let Some(separator) = &self.separator {
            options.separator = Some(Node::text(separator));
        }
        options.current_path = self.path.clone();

        let mut crumbs = Breadcrumb::builder()
            .with_options(options)
            .with_boxed_link(link)
            .with_path_provider(paths)
            .build()
            .context("Failed to build breadcrumb")?;

        if self.expanded {
            crumbs.toggle();
        }
        Ok(crumbs)
    }
}

/// Render a trail in the requested format
///
/// An empty trail renders as an empty string (or `null` for json).
pub fn render_output(crumbs: &Breadcrumb, format: Format) -> Result<String> {
    let node = crumbs.render();
    tracing::debug!(
        format = ?format,
        items = crumbs.items().len(),
        collapsed = crumbs.is_collapsed(),
        "rendering trail"
    );

    Ok(match (format, node) {
        (Format::Json, node) => {
            serde_json::to_string_pretty(&node).context("Failed to serialize trail")?
        }
        (_, None) => String::new(),
        (Format::Text, Some(node)) => text::to_text(&node),
        (Format::Html, Some(node)) => html::to_html(&node),
    })
}

pub fn handle_render(args: &RenderArgs, config: &Config) -> Result<()> {
    let crumbs = args.trail.build(config, CwdPath)?;
    let output = render_output(&crumbs, args.format)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Config subcommand
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show();
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: crumbtrail config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
}

fn handle_config_reset() -> Result<()> {
    let path = Config::reset_config_file()?;
    println!("✓ Config reset to defaults: {}", path.display());
    Ok(())
}
