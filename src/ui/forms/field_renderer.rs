//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Cursor glyph appended to the focused field
pub const CURSOR: &str = "▌";

/// Draw a bordered field and, beneath it, the helper text when the field is
/// in error. `area` includes the helper row.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    content: Vec<Line>,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        chunks[0],
    );

    if let Some(text) = error {
        let helper = Paragraph::new(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(helper, chunks[1]);
    }
}

/// Lines for a free-text value, with a cursor on the last line when active
pub fn text_lines(value: &str, is_active: bool, multiline: bool) -> Vec<Line<'static>> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    if value.is_empty() && !is_active {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines: Vec<Line> = if multiline {
        // `lines()` drops a trailing empty line; keep it so the cursor lands there
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(value.replace('\n', " "), style))]
    };

    if is_active {
        let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }
    lines
}

/// A single line listing options with the selected one marked
pub fn radio_line(options: &[&str], selected: &str, is_active: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let is_selected = *option == selected;
        let marker = if is_selected { "(•)" } else { "( )" };
        let style = match (is_selected, is_active) {
            (true, true) => Style::default().fg(Color::Cyan),
            (true, false) => Style::default().fg(Color::White),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
    }
    Line::from(spans)
}
