//! Submitted users panel

use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw every record returned by the endpoint, newest first, as pretty JSON
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" Submitted Users ({}) ", state.users.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if state.users.is_empty() {
        let empty = Paragraph::new("No users submitted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = state
        .result_lines()
        .into_iter()
        .map(|l| Line::from(Span::raw(l)))
        .collect();

    let scroll = u16::try_from(state.scroll_offset).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
