//! Theme configuration screen

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::{App, ThemeRow};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the theme editor
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(ThemeRow::ALL.len() as u16 + 1), // Rows
            Constraint::Length(BUTTON_HEIGHT),               // Continue button
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Style ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    for (idx, row) in ThemeRow::ALL.iter().enumerate() {
        if matches!(row, ThemeRow::Continue) {
            continue;
        }
        let is_active = app.theme_cursor == idx;
        lines.push(row_line(app, *row, is_active));
    }

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let on_button = app.theme_cursor == ThemeRow::ALL.len() - 1;
    render_button(frame, button_area(chunks[1]), "Preview Form", on_button);
}

fn row_line(app: &App, row: ThemeRow, is_active: bool) -> Line<'static> {
    let marker = if is_active { "▸ " } else { "  " };

    // An in-progress hex entry shadows the committed value
    let value = if is_active && row.is_color() && !app.color_edit.is_empty() {
        format!("#{}", app.color_edit)
    } else {
        app.theme_value(row)
    };
    let cursor = if is_active && row.is_color() { "▌" } else { "" };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{:<20}", row.label()),
            Style::default().fg(Color::Gray),
        ),
    ];
    if !row.is_color() {
        spans.push(Span::styled(
            format!("◂ {value} ▸"),
            value_style,
        ));
    } else {
        spans.push(Span::styled(value, value_style));
        spans.push(Span::styled(
            cursor.to_string(),
            Style::default().fg(Color::Cyan),
        ));
    }

    Line::from(spans)
}

fn button_area(area: Rect) -> Rect {
    Rect {
        width: area.width.min(40),
        ..area
    }
}
