//! Markup preview screen

use crate::app::App;
use crate::render;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the compiled markup, read-only
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let markup = render::compile(&app.session.design);
    let field_count = app.session.design.fields.len();

    let block = Block::default()
        .title(format!(" Preview ({field_count} fields) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(markup)
        .wrap(Wrap { trim: false })
        .scroll((app.preview_scroll, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}
