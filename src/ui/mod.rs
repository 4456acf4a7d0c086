//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_admission_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Blocking notification dialog on top
    if let Some(notification) = app.state.current_notification() {
        components::render_notification_dialog(frame, notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdmissionConfig;
    use crate::state::{Field, Focus};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 44);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn new_app() -> App {
        App::new(&AdmissionConfig::default())
    }

    #[test]
    fn test_draws_title_and_labels() {
        let screen = render(&new_app());
        assert!(screen.contains("Higher Secondary Admission Form"));
        for field in Field::ALL {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("Register"));
        assert!(screen.contains("Reset"));
    }

    #[test]
    fn test_helper_text_only_when_flagged() {
        let mut app = new_app();
        assert!(!render(&app).contains("Invalid mobile number"));
        app.state.form.update_field(Field::Mobile, "123");
        assert!(render(&app).contains("Invalid mobile number"));
    }

    #[test]
    fn test_name_helper_text() {
        let mut app = new_app();
        app.state.form.update_field(Field::Name, "R2D2");
        let screen = render(&app);
        assert!(screen.contains("Name must contain no numbers"));
        assert!(!screen.contains("Invalid email address"));
    }

    #[test]
    fn test_radio_marks_selection() {
        let mut app = new_app();
        app.state.form.update_field(Field::Gender, "Male");
        assert!(render(&app).contains("(•) Male"));
    }

    #[test]
    fn test_dialog_shows_warning() {
        let mut app = new_app();
        app.state.submit();
        let screen = render(&app);
        assert!(screen.contains("Please fill in all the fields."));
        assert!(screen.contains("Enter/Esc:dismiss"));
    }

    #[test]
    fn test_status_bar_counts_errors() {
        let mut app = new_app();
        app.state.form.update_field(Field::Email, "nope");
        app.state.form.update_field(Field::Address, "short");
        assert!(render(&app).contains("2 field(s) need attention"));
    }

    #[test]
    fn test_date_hint_when_focused() {
        let mut app = new_app();
        app.state.focus = Focus::Field(Field::DateOfBirth);
        assert!(render(&app).contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let app = new_app();
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
