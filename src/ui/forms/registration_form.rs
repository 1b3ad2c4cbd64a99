//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::state::{AppState, FieldId};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let border_color = if state.errors.is_empty() {
        Color::Cyan
    } else {
        Color::Yellow
    };
    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let active = state.form.active_field_id();
    for field in FieldId::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            state.form.field(field),
            state.errors.get(field),
            active == Some(field),
        );
    }

    let submit_idx = FieldId::ALL.len();
    let label = if state.submit_disabled {
        "Submit (complete the form)"
    } else {
        "Submit"
    };
    render_button(
        frame,
        chunks[submit_idx],
        label,
        state.form.is_submit_row_active(),
        !state.submit_disabled,
    );

    let help = match active {
        Some(FieldId::Role) => "←/→ to choose a role",
        Some(FieldId::Checkbox) => "Space to accept the terms of service",
        Some(FieldId::Password) => "Input is hidden",
        _ => "",
    };
    draw_help_text(frame, chunks[submit_idx + 1], help);
}
