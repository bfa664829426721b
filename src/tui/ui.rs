// UI rendering
//
// Layout, top to bottom:
// - trail: the breadcrumb line, fitted to the width
// - details: path, item origin and collapse state
// - logs: latest captured log lines
// - status bar: toast or key hints

use super::app::App;
use crate::logging::LogLevel;
use crumbtrail::backend::terminal;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEY_HINTS: &str = "←/→ focus  Enter open  e expand/collapse  y copy  t theme  q quit";

/// Draw the whole screen
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Trail
            Constraint::Length(3), // Details
            Constraint::Min(3),    // Logs
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_trail(f, app, chunks[0]);
    draw_details(f, app, chunks[1]);
    draw_logs(f, app, chunks[2]);
    draw_status(f, app, chunks[3]);
}

fn block<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ))
}

fn draw_trail(f: &mut Frame, app: &App, area: Rect) {
    let block = block(app, " crumbtrail ");
    let inner_width = block.inner(area).width as usize;
    let styles = &app.theme.crumbs;

    let line = match app.tree() {
        Some(node) => {
            let line = terminal::to_line(&node, styles, Some(app.focus));
            terminal::fit_to_width(line, inner_width, styles)
        }
        None => Line::from(Span::styled(
            "(empty trail)",
            Style::default().fg(app.theme.muted),
        )),
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let (items, origin) = app.crumbs.derive();
    let state = if app.crumbs.is_collapsed() {
        "collapsed"
    } else if app.crumbs.expanded() {
        "expanded"
    } else {
        "full"
    };

    let label = Style::default().fg(app.theme.muted);
    let line = Line::from(vec![
        Span::styled("path ", label),
        Span::raw(app.crumbs.current_path()),
        Span::styled("  source ", label),
        Span::raw(origin.as_str()),
        Span::styled("  items ", label),
        Span::raw(items.len().to_string()),
        Span::styled("  state ", label),
        Span::raw(state),
    ]);

    f.render_widget(Paragraph::new(line).block(block(app, " details ")), area);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" logs ({}) ", app.log_buffer.len());
    let block = block(app, &title);
    let height = block.inner(area).height as usize;
    let muted = Style::default().fg(app.theme.muted);

    if app.log_buffer.is_empty() {
        let placeholder = Line::from(Span::styled("(no log lines yet)", muted));
        f.render_widget(Paragraph::new(placeholder).block(block), area);
        return;
    }

    let lines: Vec<Line> = app
        .log_buffer
        .latest(height)
        .into_iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => app.theme.log_error,
                LogLevel::Warn => app.theme.log_warn,
                LogLevel::Info => app.theme.log_info,
                LogLevel::Debug => app.theme.log_debug,
                LogLevel::Trace => app.theme.log_trace,
            };
            Line::from(vec![
                Span::styled(entry.timestamp.format("%H:%M:%S ").to_string(), muted),
                Span::styled(format!("{:<5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(format!("{}: ", entry.target), muted),
                Span::raw(entry.message),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.toast {
        Some(toast) => {
            let color = if toast.is_error {
                app.theme.log_error
            } else {
                app.theme.toast
            };
            Line::from(Span::styled(
                toast.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(app.theme.status_bar),
        )),
    };

    f.render_widget(Paragraph::new(line), area);
}
