// crumbtrail - breadcrumb trails from the command line
//
// Renders the breadcrumb trail for a path (or an explicit item list) once,
// or opens an interactive view where the trail can be browsed, expanded
// and collapsed from the keyboard.
//
// Architecture:
// - crumbtrail (lib): derivation, collapsing and rendering of trails
// - CLI (clap): subcommand parsing and one-shot rendering
// - TUI (ratatui): interactive view of one trail
// - Logging (tracing): stderr, in-memory buffer for the TUI, optional file

mod cli;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, TrailArgs};
use config::Config;
use crumbtrail::trail::{AnchorLink, CwdPath};
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before logging so their output stays clean
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        return cli::handle_config(show, reset, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // In TUI mode logs are captured to the buffer (prevents garbling the
    // display); otherwise they go to stderr so stdout carries the trail.
    let sink = match cli.command {
        Some(Commands::Render(_)) => LogSink::Stderr,
        _ => LogSink::Buffer,
    };
    let log_buffer = LogBuffer::new();
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging, sink, &log_buffer);

    match cli.command {
        Some(Commands::Render(args)) => cli::handle_render(&args, &config),
        Some(Commands::Tui(args)) => run_interactive(&args, config, log_buffer).await,
        None => run_interactive(&TrailArgs::default(), config, log_buffer).await,
        Some(Commands::Config { .. }) => Ok(()),
    }
}

/// Browse a trail in the TUI
///
/// Links are plain anchors here: navigation happens in-process, so hrefs
/// must stay paths rather than router URLs.
async fn run_interactive(args: &TrailArgs, config: Config, log_buffer: LogBuffer) -> Result<()> {
    let crumbs = args.build_with_link(&config, CwdPath, Box::new(AnchorLink))?;
    let theme = tui::theme::ThemeKind::from_name(&config.theme);

    tracing::info!(
        path = %crumbs.current_path(),
        items = crumbs.items().len(),
        "Starting TUI"
    );
    tui::run_tui(tui::app::App::new(crumbs, log_buffer, theme)).await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
