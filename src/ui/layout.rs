//! Layout components (form area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldKind, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar with hints for the focused control
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    let errors = app
        .state
        .form
        .errors()
        .iter()
        .filter(|(_, flag)| *flag)
        .count();
    if errors > 0 {
        spans.push(Span::styled(
            format!(" {errors} field(s) need attention "),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::raw("|"));
    }

    spans.push(Span::styled(
        format!(" {} ", get_focus_hints(app)),
        Style::default().fg(Color::White),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused control
fn get_focus_hints(app: &App) -> String {
    if app.state.has_notification() {
        return "Enter/Esc:dismiss".to_string();
    }
    let control = match app.state.focus {
        Focus::Button(_) => "←→:button  Enter:activate",
        Focus::Field(field) => match field.kind() {
            FieldKind::Text => "type to edit  Del:clear",
            FieldKind::Multiline => "type to edit  Enter:newline",
            FieldKind::Radio => "←→/Space:choose  Del:clear",
            FieldKind::Date => "YYYY-MM-DD  ↑↓:day",
            FieldKind::Dropdown => "↑↓/Space:choose  Del:clear",
        },
    };
    format!("Tab:next  {control}  {SUBMIT_SHORTCUT}:register  {RESET_SHORTCUT}:reset  Esc:quit")
}
