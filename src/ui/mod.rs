//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let panels = &app.state.panels;
    let (cells, status_area) = layout::create_layout(frame.area(), panels.len() + 1);

    if let Some(first) = cells.first() {
        layout::draw_instructions(frame, *first);
    }
    for (index, (panel, area)) in panels.iter().zip(cells.iter().skip(1)).enumerate() {
        forms::draw_panel(frame, *area, panel, app.state.focus_in(index));
    }

    layout::draw_status_bar(frame, status_area, app);

    // Acknowledgement overlay (modal)
    if let Some(alert) = app.state.current_alert() {
        let queued = app.state.alerts.len().saturating_sub(1);
        components::render_alert_dialog(frame, &alert.to_string(), queued);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App) -> String {
        app.render_pass();
        let backend = TestBackend::new(180, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_draws_every_panel_title() {
        let mut app = App::new(&DemoConfig::default());
        let screen = render(&mut app);
        assert!(screen.contains("Form Rerender Comparison Tool"));
        assert!(screen.contains("Controlled Inputs Form"));
        assert!(screen.contains("Uncontrolled Inputs Form"));
        assert!(screen.contains("Form-State Library"));
        assert!(screen.contains("FormData()"));
    }

    #[test]
    fn test_first_frame_shows_zero_renders() {
        let mut app = App::new(&DemoConfig::default());
        let screen = render(&mut app);
        assert_eq!(screen.matches("Renders: 0").count(), 5);
    }

    #[test]
    fn test_controlled_badge_counts_keystrokes() {
        let mut app = App::new(&DemoConfig::default());
        render(&mut app);
        for c in "abc".chars() {
            press(&mut app, KeyCode::Char(c));
            render(&mut app);
        }
        // Mount plus two keystrokes were committed before the last frame
        let screen = render(&mut app);
        assert!(screen.contains("Renders: 3"), "{screen}");
    }

    #[test]
    fn test_error_and_alert_are_drawn() {
        let mut app = App::new(&DemoConfig::default());
        for c in "abcd".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "abcde".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        let screen = render(&mut app);
        assert!(screen.contains("Username must be at least 5 characters long"));
        assert!(!screen.contains("Password must be at least 5 characters long"));

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        let screen = render(&mut app);
        assert!(screen.contains("Username: abcde, Password: abcde!"), "{screen}");
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn submit_controlled(app: &mut App, username: &str, password: &str) {
        type_text(app, username);
        press(app, KeyCode::Tab);
        type_text(app, password);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_alert_keeps_spaces_as_typed() {
        let mut app = App::new(&DemoConfig::default());
        submit_controlled(&mut app, "ad  min", " admin");

        let expected = app.state.current_alert().map(|a| a.to_string());
        assert_eq!(
            expected.as_deref(),
            Some("Username: ad  min, Password:  admin")
        );
        let screen = render(&mut app);
        assert!(screen.contains("Username: ad  min, Password:  admin"), "{screen}");
    }

    #[test]
    fn test_alert_shows_all_of_a_long_value() {
        let username = "abcdefghij".repeat(7);
        let mut app = App::new(&DemoConfig::default());
        submit_controlled(&mut app, &username, "admin");

        let screen = render(&mut app);
        // The label line breaks after its space, the unbroken value splits
        // at the dialog's text width
        let (head, tail) = username.split_at(54);
        assert!(screen.contains("Username:"), "{screen}");
        assert!(screen.contains(head), "{screen}");
        assert!(screen.contains(&format!("{tail}, Password: admin")), "{screen}");
    }
}
