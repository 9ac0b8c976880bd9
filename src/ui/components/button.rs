//! Button component for TUI

use crate::state::FormButton;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool, accent: Color) {
    let border_style = if is_selected {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the Reset / Confirm and Save row, right-aligned
pub fn render_form_buttons(frame: &mut Frame, area: Rect, selected: FormButton, row_active: bool) {
    let widths: Vec<u16> = FormButton::ALL
        .iter()
        .map(|b| b.label().len() as u16 + 4)
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(widths[0]),
            Constraint::Length(1),
            Constraint::Length(widths[1]),
        ])
        .split(area);

    for (button, chunk) in FormButton::ALL.iter().zip([chunks[1], chunks[3]]) {
        let accent = match button {
            FormButton::Reset => Color::Gray,
            FormButton::Submit => Color::Magenta,
        };
        render_button(
            frame,
            chunk,
            button.label(),
            row_active && *button == selected,
            accent,
        );
    }
}
