//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus an inline error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its inline validation message
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, error: &str, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error
        ])
        .split(area);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if !error.is_empty() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    // Only free-text fields show a cursor
    let cursor = if is_active && field.is_editable_text() {
        "▌"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    if !error.is_empty() {
        let message = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw a dimmed help line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, area);
}
