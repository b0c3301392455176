//! Layout components (breadcrumb header, content area, status bar)

use crate::app::App;
use crate::state::Stage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const STAGES: [Stage; 4] = [
    Stage::SelectingFields,
    Stage::ConfiguringFields,
    Stage::ConfiguringTheme,
    Stage::Previewing,
];

/// Split the frame into breadcrumb header and main content.
/// The bottom line is reserved for the status bar.
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Breadcrumb
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the stage breadcrumb across the top
pub fn draw_breadcrumb(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (idx, stage) in STAGES.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let text = format!("{} {}", stage.step(), stage.title());
        let style = if *stage == app.session.stage {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(text, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        stage_hints(&app.session.stage),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(message) = &app.status_message {
        let color = if message.is_error {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&message.text, Style::default().fg(color)));
    }

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(form_id) = &app.session.design.form_id {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("id {form_id}"),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current stage
fn stage_hints(stage: &Stage) -> &'static str {
    match stage {
        Stage::SelectingFields => " j/k:nav  Space:toggle  Enter:continue  q:quit",
        Stage::ConfiguringFields => " Tab:next  Space:toggle  ←/→:size  Enter:continue",
        Stage::ConfiguringTheme => " Tab:next  0-f:hex  ←/→:adjust  Enter:continue",
        Stage::Previewing => " j/k:scroll  y:copy  Enter:finish  q:quit",
    }
}
