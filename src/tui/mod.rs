// TUI module - Terminal User Interface
//
// This module manages the interactive breadcrumb view using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod theme;
pub mod toast;
pub mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal even when the loop fails.
pub async fn run_tui(mut app: App) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input and a periodic tick with tokio::select!,
/// redrawing after whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Ticker for periodic redraws (toast expiry, new log lines)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// Only presses count; terminals that report releases would otherwise
/// trigger every action twice.
pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.focus_next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Home => app.focus_first(),
        KeyCode::End => app.focus_last(),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('e') => app.toggle_collapse(),
        KeyCode::Char('y') => app.copy_focused(),
        KeyCode::Char('t') => app.next_theme(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogBuffer;
    use crossterm::event::KeyEventState;
    use crumbtrail::trail::{AnchorLink, Breadcrumb, StaticPath};
    use theme::ThemeKind;

    fn app() -> App {
        let crumbs = Breadcrumb::builder()
            .with_max_items(3)
            .with_link(AnchorLink)
            .with_path_provider(StaticPath::new("/a/b/c/d/e"))
            .build()
            .unwrap();
        App::new(crumbs, LogBuffer::new(), ThemeKind::Dark)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit);

        let mut a = app();
        handle_key_event(
            &mut a,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(a.should_quit);
    }

    #[test]
    fn test_arrow_then_enter_expands() {
        let mut a = app();
        press(&mut a, KeyCode::Right);
        assert_eq!(a.focus, 1);
        press(&mut a, KeyCode::Enter);
        assert!(a.crumbs.expanded());
    }

    #[test]
    fn test_e_round_trip() {
        let mut a = app();
        let before = a.crumbs.display_items();
        press(&mut a, KeyCode::Char('e'));
        press(&mut a, KeyCode::Char('e'));
        assert!(!a.crumbs.expanded());
        assert_eq!(a.crumbs.display_items(), before);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut a = app();
        handle_key_event(
            &mut a,
            KeyEvent {
                code: KeyCode::Char('e'),
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            },
        );
        assert!(!a.crumbs.expanded());
    }
}
