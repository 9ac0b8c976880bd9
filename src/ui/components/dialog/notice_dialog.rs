//! Submission outcome dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::Notice;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the success or error dialog for a submission attempt
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let (title, accent) = match notice {
        Notice::Success(_) => ("Submitted", Color::Green),
        Notice::Error(_) => ("Error", Color::Red),
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent,
            message: notice.message(),
            hint: Some(hint),
            max_width: 60,
        },
    );
}
