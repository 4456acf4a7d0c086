//! Notification dialog for submit outcomes

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notification, NotificationKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the front notification as a blocking dialog
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to continue"),
    ];

    let (title, color) = match notification.kind {
        NotificationKind::Success => ("Registered", Color::Green),
        NotificationKind::Warning => ("Cannot register", Color::Yellow),
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: color,
            border_color: color,
            message: &notification.message,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
