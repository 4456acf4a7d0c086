//! Application state and key handling

use crate::config::AdmissionConfig;
use crate::platform;
use crate::state::{AppState, FieldKind, Focus, FormButton};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Heading shown above the form
    pub title: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &AdmissionConfig) -> Self {
        Self {
            state: AppState::new(config.dob_start()),
            title: config.title().to_string(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notification dialog is modal
        if self.state.has_notification() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notification();
            }
            return Ok(());
        }

        let kind = self.state.focused_field().map(|field| field.kind());

        let shortcut = platform::is_shortcut(key.modifiers);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if shortcut => self.activate(FormButton::Register),
            KeyCode::Char('r') if shortcut => self.activate(FormButton::Reset),
            KeyCode::Char(_) if shortcut => {}
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Up => match kind {
                Some(FieldKind::Dropdown) => self.state.cycle_option(-1),
                Some(FieldKind::Date) => self.state.step_date(1),
                _ => self.state.prev_focus(),
            },
            KeyCode::Down => match kind {
                Some(FieldKind::Dropdown) => self.state.cycle_option(1),
                Some(FieldKind::Date) => self.state.step_date(-1),
                _ => self.state.next_focus(),
            },
            KeyCode::Left => match self.state.focus {
                Focus::Field(_) if kind == Some(FieldKind::Radio) => {
                    self.state.cycle_option(-1)
                }
                Focus::Button(FormButton::Reset) => self.state.prev_focus(),
                _ => {}
            },
            KeyCode::Right => match self.state.focus {
                Focus::Field(_) if kind == Some(FieldKind::Radio) => self.state.cycle_option(1),
                Focus::Button(FormButton::Register) => self.state.next_focus(),
                _ => {}
            },
            KeyCode::Enter => match self.state.focus {
                Focus::Button(button) => self.activate(button),
                Focus::Field(_) if kind == Some(FieldKind::Multiline) => {
                    self.state.input_newline()
                }
                Focus::Field(_) => self.state.next_focus(),
            },
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Delete => self.state.clear_field(),
            KeyCode::Char(c) => self.state.input_char(c),
            _ => {}
        }
        Ok(())
    }

    fn activate(&mut self, button: FormButton) {
        match button {
            FormButton::Register => self.state.submit(),
            FormButton::Reset => self.state.reset_form(),
        }
    }
}
