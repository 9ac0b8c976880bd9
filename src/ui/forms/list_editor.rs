//! Rendering for the social/news list editors

use crate::state::{ListEditor, ListKind};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Most entries shown at once; the rest scroll
const MAX_VISIBLE_ENTRIES: usize = 5;

/// Rows needed to draw an editor with `entry_count` committed entries
pub fn list_editor_height(entry_count: usize) -> u16 {
    // borders + input line + entries
    3 + entry_count.min(MAX_VISIBLE_ENTRIES) as u16
}

/// Draw the pending-entry input and the committed entries below it
pub fn draw_list_editor(
    frame: &mut Frame,
    area: Rect,
    kind: ListKind,
    editor: &ListEditor,
    entries: &[String],
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ({}) ", kind.label(), entries.len()))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let input_active = is_active && editor.selected.is_none();
    let input = if editor.pending.is_empty() {
        Line::from(vec![
            Span::styled("+ ", Style::default().fg(Color::Green)),
            Span::styled(
                if input_active { "▌" } else { "" },
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(kind.placeholder(), Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled("+ ", Style::default().fg(Color::Green)),
            Span::styled(editor.pending.as_str(), Style::default().fg(Color::White)),
            Span::styled(
                if input_active { "▌" } else { "" },
                Style::default().fg(Color::Cyan),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(input), chunks[0]);

    if entries.is_empty() || chunks[1].height == 0 {
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(
                    entry.as_str(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]))
        })
        .collect();

    let highlight = if is_active {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("✕ ");

    let selected = if is_active { editor.selected } else { None };
    render_scrollable_list(frame, chunks[1], list, selected);
}
