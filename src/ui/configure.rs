//! Field configuration screen

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::{App, ConfigureRow, FieldAttr};
use crate::state::archetype_by_id;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the per-field configuration list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                // Rows
            Constraint::Length(BUTTON_HEIGHT), // Continue button
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Configure Fields ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows = app.configure_rows();
    let mut lines = Vec::new();
    let mut active_line = 0u16;

    for (row_idx, row) in rows.iter().enumerate() {
        let is_active = app.configure_cursor == row_idx;

        // Group header above each field's first row
        if let ConfigureRow::Field {
            index,
            attr: FieldAttr::Label,
        } = row
        {
            if let Some(field) = app.session.design.fields.get(*index) {
                let name = archetype_by_id(&field.archetype_id)
                    .map(|a| a.display_name)
                    .unwrap_or(field.archetype_id.as_str());
                lines.push(Line::from(Span::styled(
                    format!("■ {name}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        if is_active {
            active_line = lines.len() as u16;
        }
        if !matches!(row, ConfigureRow::Continue) {
            lines.push(row_line(app, *row, is_active));
        }
    }

    let inner_height = chunks[0].height.saturating_sub(2);
    let scroll = active_line.saturating_sub(inner_height.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll, 0)).block(block),
        chunks[0],
    );

    let on_button = app.configure_cursor == rows.len() - 1;
    render_button(frame, button_area(chunks[1]), "Continue", on_button);
}

fn row_line(app: &App, row: ConfigureRow, is_active: bool) -> Line<'static> {
    let (label, value) = row_content(app, row);

    let marker = if is_active { "▸ " } else { "  " };
    let cursor = if is_active && row_is_text(row) {
        "▌"
    } else {
        ""
    };
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
        Span::styled(cursor.to_string(), Style::default().fg(Color::Cyan)),
    ])
}

fn row_content(app: &App, row: ConfigureRow) -> (&'static str, String) {
    let design = &app.session.design;
    match row {
        ConfigureRow::Field { index, attr } => {
            let Some(field) = design.fields.get(index) else {
                return ("?", String::new());
            };
            match attr {
                FieldAttr::Label => ("Label", field.label.clone()),
                FieldAttr::Placeholder => ("Placeholder", field.placeholder.clone()),
                FieldAttr::Required => (
                    "Required",
                    if field.required { "[x]" } else { "[ ]" }.to_string(),
                ),
                FieldAttr::FontSize => ("Font size", format!("◂ {}px ▸", field.font_size_px)),
            }
        }
        ConfigureRow::SubmitLabel => ("Submit label", design.submit.label.clone()),
        ConfigureRow::SubmitFontSize => (
            "Submit font size",
            format!("◂ {}px ▸", design.submit.font_size_px),
        ),
        ConfigureRow::Continue => ("", String::new()),
    }
}

fn row_is_text(row: ConfigureRow) -> bool {
    matches!(
        row,
        ConfigureRow::Field {
            attr: FieldAttr::Label | FieldAttr::Placeholder,
            ..
        } | ConfigureRow::SubmitLabel
    )
}

fn button_area(area: Rect) -> Rect {
    Rect {
        width: area.width.min(40),
        ..area
    }
}
