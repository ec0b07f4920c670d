//! Layout and status bar

use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::state::SaveStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into form and preview panes, reserving the bottom
/// line for the status bar
pub fn create_layout(area: Rect, preview_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - preview_percent), // Form
            Constraint::Percentage(preview_percent),       // Preview
        ])
        .split(chunks[0]);

    (panes[0], panes[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Save status indicator
    let (dot, color) = match app.state.save_status {
        SaveStatus::Ready => ("○", Color::Gray),
        SaveStatus::Saving => ("●", Color::Yellow),
        SaveStatus::Saved => ("●", Color::Green),
    };
    spans.push(Span::styled(format!(" {dot} "), Style::default().fg(color)));
    spans.push(Span::styled(
        app.state.save_status.label(),
        Style::default().fg(color),
    ));

    // Key hints
    if app.config.show_hints.unwrap_or(true) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Tab:next  \u{2190}/\u{2192}:adjust  Space:toggle  {COPY_SHORTCUT}:copy"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
