//! Admission form rendering

use super::field_renderer::{draw_field, radio_line, text_lines, CURSOR};
use crate::app::App;
use crate::state::{Field, FieldKind, Focus, FormButton};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

/// Rows taken by a field: borders, content and the helper line
fn field_height(field: Field) -> u16 {
    match field.kind() {
        FieldKind::Multiline => 6,
        _ => 4,
    }
}

/// Draw the whole form: every field followed by the button row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = Field::ALL
        .iter()
        .map(|&field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        draw_form_field(frame, chunks[i], app, field);
    }

    draw_buttons(frame, chunks[Field::COUNT], app);
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: Field) {
    let state = &app.state;
    let is_active = state.focus == Focus::Field(field);
    let value = state.form.value(field);

    let content = match field.kind() {
        FieldKind::Text => text_lines(value, is_active, false),
        FieldKind::Multiline => text_lines(value, is_active, true),
        FieldKind::Date => text_lines(&state.dob_draft, is_active, false),
        FieldKind::Radio => vec![radio_line(&field.options(), value, is_active)],
        FieldKind::Dropdown => vec![dropdown_line(value, is_active)],
    };

    let error = state
        .form
        .has_error(field)
        .then(|| field.helper_text());

    draw_field(frame, area, field.label(), content, is_active, error);
}

fn dropdown_line(value: &str, is_active: bool) -> Line<'static> {
    let (text, style) = if value.is_empty() {
        ("(select)".to_string(), Style::default().fg(Color::DarkGray))
    } else if is_active {
        (value.to_string(), Style::default().fg(Color::Cyan))
    } else {
        (value.to_string(), Style::default().fg(Color::Gray))
    };
    let mut spans = vec![Span::raw("▾ "), Span::styled(text, style)];
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, button) in [FormButton::Register, FormButton::Reset]
        .into_iter()
        .enumerate()
    {
        let accent = match button {
            FormButton::Register => Color::Green,
            FormButton::Reset => Color::Gray,
        };
        render_button(
            frame,
            chunks[i],
            button.label(),
            app.state.focus == Focus::Button(button),
            accent,
        );
    }
}
