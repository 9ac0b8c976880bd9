//! Submission form rendering

use super::field_renderer::{draw_field, field_height};
use super::list_editor::{draw_list_editor, list_editor_height};
use crate::app::App;
use crate::state::{FormRow, SubmissionForm, FORM_ROWS};
use crate::ui::components::{render_form_buttons, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one form row as it will be drawn
fn row_height(form: &SubmissionForm, row: &FormRow) -> u16 {
    match row {
        FormRow::Field(field) => field_height(field, &form.draft.field_text(field.field)),
        FormRow::List(kind) => list_editor_height(form.entries(*kind).len()),
        FormRow::Buttons => {
            // Error line sits directly above the buttons
            BUTTON_HEIGHT + u16::from(form.error_message.is_some())
        }
    }
}

/// First and one-past-last row that fit in `available` lines while
/// keeping `active` on screen
pub fn visible_rows(heights: &[u16], active: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }
    let active = active.min(heights.len() - 1);

    let mut start = 0;
    while start < active && heights[start..=active].iter().sum::<u16>() > available {
        start += 1;
    }

    let mut end = start;
    let mut used = 0u16;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }

    (start, end.max(start + 1).min(heights.len()))
}

/// Draw the metaverse submission form
pub fn draw_submission_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Submit a Metaverse ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let heights: Vec<u16> = FORM_ROWS.iter().map(|row| row_height(form, row)).collect();
    let (start, end) = visible_rows(&heights, form.active_field_index, inner.height);

    let mut y = inner.y;
    for (index, row) in FORM_ROWS.iter().enumerate().take(end).skip(start) {
        let bottom = inner.y + inner.height;
        let height = heights[index].min(bottom.saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        let is_active = index == form.active_field_index;

        match row {
            FormRow::Field(field) => {
                let value = form.draft.field_text(field.field);
                draw_field(frame, row_area, field, &value, is_active);
            }
            FormRow::List(kind) => draw_list_editor(
                frame,
                row_area,
                *kind,
                form.editor(*kind),
                form.entries(*kind),
                is_active,
            ),
            FormRow::Buttons => draw_buttons_row(frame, row_area, form, is_active),
        }

        y += height;
    }
}

fn draw_buttons_row(frame: &mut Frame, area: Rect, form: &SubmissionForm, is_active: bool) {
    let mut buttons_area = area;

    if let Some(message) = &form.error_message {
        let error_area = Rect { height: 1, ..area };
        let error = Paragraph::new(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(error, error_area);
        buttons_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };
    }

    render_form_buttons(frame, buttons_area, form.selected_button, is_active);
}
