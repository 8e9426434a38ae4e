//! Form panel rendering

use super::field_renderer::{draw_field_error, draw_input};
use crate::state::{Field, FormPanel, Slot};
use crate::ui::components::{render_render_badge, render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a panel needs to show everything without clipping
pub const PANEL_HEIGHT: u16 = 16;

/// Draw one form panel. `focus` is the focused slot when this panel holds focus.
pub fn draw_panel(frame: &mut Frame, area: Rect, panel: &FormPanel, focus: Option<Slot>) {
    let kind = panel.kind();
    let border_color = if focus.is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", kind.title()),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Doc link
            Constraint::Length(1),             // Tagline
            Constraint::Length(1),             // Render badge
            Constraint::Length(3),             // Username
            Constraint::Length(1),             // Username error
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Password error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    let link = Paragraph::new(Line::from(Span::styled(
        kind.doc_url(),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    )));
    frame.render_widget(link, chunks[0]);

    let tagline = Paragraph::new(Span::styled(
        kind.tagline(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(tagline, chunks[1]);

    render_render_badge(frame, chunks[2], panel.counter().displayed());

    for (field, input_area, error_area) in [
        (Field::Username, chunks[3], chunks[4]),
        (Field::Password, chunks[5], chunks[6]),
    ] {
        draw_input(
            frame,
            input_area,
            field,
            panel.value(field),
            focus == Some(Slot::Input(field)),
        );
        draw_field_error(frame, error_area, panel.visible_error(field));
    }

    let button_area = Rect {
        width: chunks[7].width.min(16),
        ..chunks[7]
    };
    render_submit_button(
        frame,
        button_area,
        focus == Some(Slot::Submit),
        panel.is_submitting(),
    );
}
