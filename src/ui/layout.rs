//! Layout components (panel grid, instructions, status bar)

use super::forms::PANEL_HEIGHT;
use crate::app::App;
use crate::state::Slot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Grid columns; the instructions take the first cell
const GRID_COLUMNS: usize = 3;

/// Split the screen into grid cells (row-major) and the status bar line
pub fn create_layout(area: Rect, cell_count: usize) -> (Vec<Rect>, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let rows = cell_count.div_ceil(GRID_COLUMNS).max(1);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(PANEL_HEIGHT.min(chunks[0].height)); rows])
        .split(chunks[0]);

    let cells = row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row)
                .to_vec()
        })
        .take(cell_count)
        .collect();

    (cells, chunks[1])
}

/// Draw the title and the manual test steps
pub fn draw_instructions(frame: &mut Frame, area: Rect) {
    let muted = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            "Form Rerender Comparison Tool",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A simple comparison of different ways to handle forms.",
            muted,
        )),
        Line::from(""),
        Line::from("To test:"),
        Line::from("  • Type at least 5 characters into each input and press submit"),
        Line::from("  • See rerender score"),
        Line::from("  • Press Ctrl+R to remount (refresh)"),
        Line::from("  • Type less than 5 characters into each input and press submit"),
        Line::from("  • See rerender score"),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if let Some(panel) = app.state.focused_panel() {
        spans.push(Span::styled(
            panel.kind().title(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(" | "));
    }

    let hints = get_focus_hints(app.state.focus.slot, app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^R:remount  ^C:quit ";
    let quit_width = quit_hint.len() as u16;
    if area.width > quit_width {
        let quit_area = Rect {
            x: area.x + area.width - quit_width,
            width: quit_width,
            ..area
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Get keyboard hints for the focused element
fn get_focus_hints(slot: Slot, app: &App) -> String {
    if app.state.has_alerts() {
        return "Enter/Esc:dismiss".to_string();
    }
    let panel = app.state.focused_panel();
    let submits_on_enter = panel.is_some_and(|p| p.kind().submits_on_enter());
    let is_submitting = panel.is_some_and(|p| p.is_submitting());
    match slot {
        Slot::Input(_) if submits_on_enter && !is_submitting => {
            "Tab:next  type:edit  Enter:submit".to_string()
        }
        Slot::Input(_) => "Tab:next  type:edit".to_string(),
        Slot::Submit if is_submitting => "Tab:next  submitting…".to_string(),
        Slot::Submit => "Tab:next  Enter:submit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::state::{Field, Focus, VariantKind};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn focus_library(app: &mut App, slot: Slot) {
        app.state.focus = Focus {
            panel: VariantKind::ALL
                .iter()
                .position(|k| *k == VariantKind::Library)
                .unwrap(),
            slot,
        };
    }

    #[test]
    fn test_layout_yields_requested_cells() {
        let (cells, status) = create_layout(Rect::new(0, 0, 150, 40), 6);
        assert_eq!(cells.len(), 6);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 39);
        // Row-major: second cell sits to the right of the first
        assert_eq!(cells[0].y, cells[1].y);
        assert!(cells[1].x > cells[0].x);
        assert!(cells[3].y > cells[0].y);
    }

    #[test]
    fn test_layout_on_tiny_terminal_does_not_panic() {
        let (cells, _) = create_layout(Rect::new(0, 0, 10, 3), 6);
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn test_hints_follow_focused_slot() {
        let mut app = App::new(&DemoConfig::default());
        assert_eq!(
            get_focus_hints(app.state.focus.slot, &app),
            "Tab:next  type:edit"
        );
        focus_library(&mut app, Slot::Input(Field::Username));
        assert_eq!(
            get_focus_hints(app.state.focus.slot, &app),
            "Tab:next  type:edit  Enter:submit"
        );
        focus_library(&mut app, Slot::Submit);
        assert_eq!(
            get_focus_hints(app.state.focus.slot, &app),
            "Tab:next  Enter:submit"
        );
    }

    #[tokio::test]
    async fn test_hints_while_submitting_do_not_offer_submit() {
        let mut app = App::new(&DemoConfig::default());
        focus_library(&mut app, Slot::Input(Field::Username));
        for c in "admin".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "admin".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.state.focused_panel().is_some_and(|p| p.is_submitting()));

        assert_eq!(
            get_focus_hints(app.state.focus.slot, &app),
            "Tab:next  submitting…"
        );
        focus_library(&mut app, Slot::Input(Field::Password));
        assert_eq!(
            get_focus_hints(app.state.focus.slot, &app),
            "Tab:next  type:edit"
        );
    }
}
