//! Render-count badge shaded by how often a form has re-rendered

use crate::state::{uses_light_text, Shade};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Style for a badge showing `count`
pub fn badge_style(count: u32) -> Style {
    match Shade::for_count(count).rgb() {
        None => Style::default().fg(Color::Gray),
        Some((r, g, b)) => {
            let fg = if uses_light_text(count) {
                Color::Rgb(229, 229, 229)
            } else {
                Color::Rgb(38, 38, 38)
            };
            Style::default().bg(Color::Rgb(r, g, b)).fg(fg)
        }
    }
}

pub fn render_render_badge(frame: &mut Frame, area: Rect, count: u32) {
    // Unshaded badges get brackets in place of a border
    let text = if count == 0 {
        format!("[ Renders: {count} ]")
    } else {
        format!("  Renders: {count}  ")
    };
    let width = (text.chars().count() as u16).min(area.width);
    let badge_area = Rect { width, ..area };

    frame.render_widget(
        Paragraph::new(Span::styled(text, badge_style(count))),
        badge_area,
    );
}
