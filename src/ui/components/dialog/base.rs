//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content, may contain `\n`
    pub message: &'a str,
    /// Hint shown on the last line (e.g. "Press Enter to dismiss")
    pub hint: Vec<Span<'a>>,
    pub max_width: u16,
}

/// Center a `width` x `height` rectangle inside `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    // 2 borders + 2 columns of padding on each side
    let chrome = 6u16;
    let text_width = config.max_width.saturating_sub(chrome).max(1) as usize;
    let wrapped = wrap_text(config.message, text_width);

    let hint_width: usize = config.hint.iter().map(|span| span.width()).sum();
    let widest = wrapped
        .iter()
        .map(|l| l.trim_end().chars().count())
        .chain([config.title.chars().count(), hint_width])
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + chrome).min(config.max_width);
    // title, blank, message, blank, hint, borders
    let height = wrapped.len() as u16 + 6;

    let dialog_area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(config.hint));

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.accent))
            .padding(ratatui::widgets::Padding::horizontal(2))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(dialog, dialog_area);
}

/// Wrap by character count without touching the text. Lines break after
/// the last space that fits, or mid-word when there is none, so joining the
/// lines gives back the input exactly. A break space may hang past
/// `max_width`; it renders as nothing.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut rest: Vec<char> = paragraph.chars().collect();
        while rest.len() > max_width {
            let window = &rest[..=max_width];
            let split = match window.iter().rposition(|c| *c == ' ') {
                Some(space) if space > 0 => space + 1,
                _ => max_width,
            };
            lines.push(rest[..split].iter().collect());
            rest.drain(..split);
        }
        lines.push(rest.into_iter().collect());
    }

    lines
}
