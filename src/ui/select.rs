//! Field selection screen

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::CATALOG;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the field selection checklist
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CATALOG.len() as u16 + 2), // Checklist
            Constraint::Length(BUTTON_HEIGHT),         // Continue button
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Select Fields ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::with_capacity(CATALOG.len());
    for (idx, archetype) in CATALOG.iter().enumerate() {
        let is_active = app.select_cursor == idx;
        let checked = app.session.is_selected(archetype.id);

        let marker = if is_active { "▸ " } else { "  " };
        let checkbox = if checked { "[x] " } else { "[ ] " };
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else if checked {
            Style::default()
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{checkbox}{}", archetype.display_name), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let selected_count = app.session.selection().len();
    let label = format!("Continue ({selected_count} selected)");
    let on_button = app.select_cursor == CATALOG.len();
    render_button(frame, button_area(chunks[1]), &label, on_button);
}

/// Cap the button width so it does not span the whole terminal
fn button_area(area: Rect) -> Rect {
    Rect {
        width: area.width.min(40),
        ..area
    }
}
