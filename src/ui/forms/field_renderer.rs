//! Field rendering utilities for forms

use crate::state::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text input with its label in the border
pub fn draw_input(frame: &mut Frame, area: Rect, field: Field, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    // Placeholder only shows while empty
    let text = if value.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    let content = Paragraph::new(Line::from(vec![
        text,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the inline validation message under a field, if any
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    let Some(message) = message else {
        return;
    };
    let paragraph = Paragraph::new(Span::styled(
        message,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(paragraph, area);
}
