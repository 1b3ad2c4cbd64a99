//! Layout components (content split, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Keyboard hints shown on the status bar
const HINTS: &str = "Tab/↑↓:move  ←/→:role  Space:toggle  Enter/^S:submit  PgUp/PgDn:results";

/// Split the screen into form, results and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),        // Form
            Constraint::Percentage(45), // Results
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the status bar: feedback on the left, quit hint on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, status_message: Option<&str>) {
    let quit_hint = " Esc/^C:quit ";
    let text = status_message.unwrap_or(HINTS);
    let fg = if status_message.is_some() {
        Color::Green
    } else {
        Color::Gray
    };

    let status =
        Paragraph::new(format!(" {text}")).style(Style::default().bg(Color::DarkGray).fg(fg));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: area.height.min(1),
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
