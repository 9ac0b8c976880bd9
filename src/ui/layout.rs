//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
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

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(" ● ", Style::default().fg(Color::Green))];

    let hints = get_row_hints(&app.state.form.active_row());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("→ {}", app.state.endpoint),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused row
fn get_row_hints(row: &FormRow) -> String {
    match row {
        FormRow::Field(field) if field.is_multiline() => format!(
            "Tab:next  Enter:newline  {}:submit  {}:reset",
            SUBMIT_SHORTCUT, RESET_SHORTCUT
        ),
        FormRow::Field(_) => format!(
            "Tab:next  {}:submit  {}:reset",
            SUBMIT_SHORTCUT, RESET_SHORTCUT
        ),
        FormRow::List(_) => "Enter:add  ↑↓:select  Del:remove  Tab:next".to_string(),
        FormRow::Buttons => "←→:choose  Enter:press  Tab:next".to_string(),
    }
}
