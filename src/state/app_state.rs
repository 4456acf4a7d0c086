//! Application state definitions

use super::forms::{Field, FieldKind, FormState};
use chrono::{Days, NaiveDate};
use std::collections::VecDeque;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;

/// Action buttons below the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Register,
    Reset,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Reset => "Reset",
        }
    }
}

/// Element holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Button(FormButton),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Name)
    }
}

impl Focus {
    /// Tab order: every field, then the buttons
    const ORDER: [Focus; Field::COUNT + 2] = [
        Focus::Field(Field::Name),
        Focus::Field(Field::Address),
        Focus::Field(Field::Mobile),
        Focus::Field(Field::Email),
        Focus::Field(Field::Gender),
        Focus::Field(Field::DateOfBirth),
        Focus::Field(Field::Course),
        Focus::Button(FormButton::Register),
        Focus::Button(FormButton::Reset),
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Severity of a blocking notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
}

/// Message shown as a dialog until acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: FormState,
    pub focus: Focus,
    /// Raw text typed into the date-of-birth field
    pub dob_draft: String,
    /// Date the stepper starts from when the field is empty
    pub dob_start: NaiveDate,
    pub notifications: VecDeque<Notification>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2008, 1, 1).unwrap_or(NaiveDate::MIN))
    }
}

impl AppState {
    pub fn new(dob_start: NaiveDate) -> Self {
        Self {
            form: FormState::new(),
            focus: Focus::default(),
            dob_draft: String::new(),
            dob_start,
            notifications: VecDeque::new(),
        }
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Button(_) => None,
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Handle a typed character in the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.form.value(field).to_string();
                value.push(c);
                self.form.update_field(field, value);
            }
            FieldKind::Date => {
                if (c.is_ascii_digit() || c == '-') && self.dob_draft.len() < DATE_LEN {
                    self.dob_draft.push(c);
                    self.commit_dob();
                }
            }
            FieldKind::Radio | FieldKind::Dropdown => {
                if c == ' ' {
                    self.cycle_option(1);
                }
            }
        }
    }

    /// Insert a line break; only the multiline address accepts one
    pub fn input_newline(&mut self) {
        if let Some(field) = self.focused_field() {
            if field.kind() == FieldKind::Multiline {
                let mut value = self.form.value(field).to_string();
                value.push('\n');
                self.form.update_field(field, value);
            }
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.form.value(field).to_string();
                value.pop();
                self.form.update_field(field, value);
            }
            FieldKind::Date => {
                self.dob_draft.pop();
                self.commit_dob();
            }
            FieldKind::Radio | FieldKind::Dropdown => self.form.update_field(field, ""),
        }
    }

    /// Empty the focused field. An already empty field is left untouched.
    pub fn clear_field(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.kind() == FieldKind::Date {
            self.dob_draft.clear();
            self.commit_dob();
        } else if !self.form.value(field).is_empty() {
            self.form.update_field(field, "");
        }
    }

    /// Move the selection of the focused radio group or dropdown
    pub fn cycle_option(&mut self, step: isize) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let options = field.options();
        if options.is_empty() {
            return;
        }
        let len = options.len() as isize;
        let current = options.iter().position(|o| *o == self.form.value(field));
        let next = match current {
            Some(i) => (i as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        self.form.update_field(field, options[next as usize]);
    }

    /// Move the date of birth by whole days, starting from the default date
    /// when nothing valid has been entered yet
    pub fn step_date(&mut self, days: i64) {
        let date = match parse_date(&self.dob_draft) {
            Some(current) if days >= 0 => current.checked_add_days(Days::new(days as u64)),
            Some(current) => current.checked_sub_days(Days::new(days.unsigned_abs())),
            None => Some(self.dob_start),
        };
        if let Some(date) = date {
            self.dob_draft = date.format(DATE_FORMAT).to_string();
            self.commit_dob();
        }
    }

    // A partially typed date commits as empty; only changes are forwarded.
    fn commit_dob(&mut self) {
        let committed = parse_date(&self.dob_draft)
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        if committed != self.form.value(Field::DateOfBirth) {
            self.form.update_field(Field::DateOfBirth, committed);
        }
    }

    /// Submit the form and queue the outcome as a notification
    pub fn submit(&mut self) {
        match self.form.submit() {
            Ok(snapshot) => {
                // Applicant details stay out of the log
                tracing::info!("admission submitted");
                self.push_notification(NotificationKind::Success, snapshot.summary());
            }
            Err(err) => self.push_notification(NotificationKind::Warning, err.to_string()),
        }
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
        self.dob_draft.clear();
    }

    pub fn push_notification(&mut self, kind: NotificationKind, message: String) {
        self.notifications.push_back(Notification { kind, message });
    }

    pub fn has_notification(&self) -> bool {
        !self.notifications.is_empty()
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    /// Acknowledge the front notification. A successful submission is
    /// discarded once acknowledged.
    pub fn dismiss_notification(&mut self) {
        if let Some(notification) = self.notifications.pop_front() {
            if notification.kind == NotificationKind::Success {
                self.reset_form();
                self.focus = Focus::default();
            }
        }
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.len() != DATE_LEN {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}
