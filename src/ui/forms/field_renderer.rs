//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field with its current value
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let placeholder = Style::default().fg(Color::DarkGray);

    let content = if value.is_empty() {
        let hint = if field.placeholder.is_empty() && !is_active {
            "(empty)"
        } else {
            field.placeholder
        };
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, placeholder),
        ]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Rows needed to draw a field holding `value`
pub fn field_height(field: &FormField, value: &str) -> u16 {
    if field.is_multiline() {
        let lines = value.split('\n').count().clamp(2, 6) as u16;
        lines + 2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DraftField, FieldKind};

    const DESCRIPTION: FormField = FormField::new(
        DraftField::Description,
        "Description",
        "",
        FieldKind::Multiline,
        true,
    );

    #[test]
    fn test_single_line_height() {
        let title = FormField::new(DraftField::Title, "Title", "", FieldKind::Text, true);
        assert_eq!(field_height(&title, "a\nb\nc"), 3);
    }

    #[test]
    fn test_multiline_height_grows_and_caps() {
        assert_eq!(field_height(&DESCRIPTION, ""), 4);
        assert_eq!(field_height(&DESCRIPTION, "a\nb\nc"), 5);
        assert_eq!(field_height(&DESCRIPTION, &"x\n".repeat(20)), 8);
    }
}
