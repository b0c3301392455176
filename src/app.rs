//! Application state and core logic

use crate::collector::{CollectorTransport, DeliveryOutcome, FormPayload};
use crate::render;
use crate::state::{
    is_valid_hex_color, FieldPatch, Stage, WizardSession, BORDER_RADIUS_MAX, CATALOG,
    FONT_SIZE_MAX, FONT_SIZE_MIN,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Transient line shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Which attribute of a field instance a configure row edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAttr {
    Label,
    Placeholder,
    Required,
    FontSize,
}

/// One row of the field-configuration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureRow {
    Field { index: usize, attr: FieldAttr },
    SubmitLabel,
    SubmitFontSize,
    Continue,
}

/// One row of the theme screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRow {
    FormBackground,
    InputBackground,
    TextColor,
    PlaceholderColor,
    IconColor,
    BorderColor,
    SubmitColor,
    BorderRadius,
    BaseFontSize,
    Continue,
}

impl ThemeRow {
    pub const ALL: [ThemeRow; 10] = [
        ThemeRow::FormBackground,
        ThemeRow::InputBackground,
        ThemeRow::TextColor,
        ThemeRow::PlaceholderColor,
        ThemeRow::IconColor,
        ThemeRow::BorderColor,
        ThemeRow::SubmitColor,
        ThemeRow::BorderRadius,
        ThemeRow::BaseFontSize,
        ThemeRow::Continue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeRow::FormBackground => "Form background",
            ThemeRow::InputBackground => "Input background",
            ThemeRow::TextColor => "Text color",
            ThemeRow::PlaceholderColor => "Placeholder color",
            ThemeRow::IconColor => "Icon color",
            ThemeRow::BorderColor => "Border color",
            ThemeRow::SubmitColor => "Submit button color",
            ThemeRow::BorderRadius => "Border radius",
            ThemeRow::BaseFontSize => "Base font size",
            ThemeRow::Continue => "Continue",
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(
            self,
            ThemeRow::FormBackground
                | ThemeRow::InputBackground
                | ThemeRow::TextColor
                | ThemeRow::PlaceholderColor
                | ThemeRow::IconColor
                | ThemeRow::BorderColor
                | ThemeRow::SubmitColor
        )
    }
}

/// Main application struct
pub struct App {
    /// The live wizard session
    pub session: WizardSession,
    /// Transport used to deliver the compiled markup
    collector: Arc<dyn CollectorTransport>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status line (precondition errors, delivery reports)
    pub status_message: Option<StatusMessage>,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Cursor over catalog entries plus the continue button
    pub select_cursor: usize,
    /// Cursor over field-configuration rows
    pub configure_cursor: usize,
    /// Cursor over theme rows
    pub theme_cursor: usize,
    /// Hex digits typed into the active color row
    pub color_edit: String,
    /// Scroll offset in the preview stage
    pub preview_scroll: u16,
    delivery_tx: mpsc::UnboundedSender<DeliveryOutcome>,
    delivery_rx: mpsc::UnboundedReceiver<DeliveryOutcome>,
}

impl App {
    /// Create a new App instance around a fresh wizard session.
    ///
    /// The form id is captured here, once, and never re-derived.
    pub fn new(form_id: Option<String>, collector: Arc<dyn CollectorTransport>) -> Self {
        let (delivery_tx, delivery_rx) = mpsc::unbounded_channel();
        Self {
            session: WizardSession::new(form_id),
            collector,
            quit: false,
            status_message: None,
            copy_message: None,
            select_cursor: 0,
            configure_cursor: 0,
            theme_cursor: 0,
            color_edit: String::new(),
            preview_scroll: 0,
            delivery_tx,
            delivery_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear copy feedback on any key press
        self.copy_message = None;

        match self.session.stage {
            Stage::SelectingFields => self.handle_select_key(key),
            Stage::ConfiguringFields => self.handle_configure_key(key),
            Stage::ConfiguringTheme => self.handle_theme_key(key),
            Stage::Previewing => self.handle_preview_key(key),
        }
        Ok(())
    }

    /// Drain outcomes produced by in-flight delivery tasks
    pub fn poll_delivery(&mut self) {
        while let Ok(outcome) = self.delivery_rx.try_recv() {
            self.report_delivery(outcome);
        }
    }

    // --- Field selection ---

    fn handle_select_key(&mut self, key: KeyEvent) {
        // Last cursor position is the continue button
        let last = CATALOG.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.select_cursor = (self.select_cursor + 1).min(last);
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.select_cursor = self.select_cursor.saturating_sub(1);
            }
            KeyCode::Char(' ') => {
                if let Some(archetype) = CATALOG.get(self.select_cursor) {
                    self.session.toggle_field(archetype.id);
                    self.status_message = None;
                }
            }
            KeyCode::Enter => self.confirm_selection(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn confirm_selection(&mut self) {
        match self.session.confirm_selection() {
            Ok(()) => self.status_message = None,
            Err(err) => {
                tracing::error!(error = %err, "cannot leave field selection");
                self.status_message = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    // --- Field configuration ---

    /// Rows of the configuration screen, in display order
    pub fn configure_rows(&self) -> Vec<ConfigureRow> {
        let mut rows = Vec::new();
        for index in 0..self.session.design.fields.len() {
            for attr in [
                FieldAttr::Label,
                FieldAttr::Placeholder,
                FieldAttr::Required,
                FieldAttr::FontSize,
            ] {
                rows.push(ConfigureRow::Field { index, attr });
            }
        }
        rows.push(ConfigureRow::SubmitLabel);
        rows.push(ConfigureRow::SubmitFontSize);
        rows.push(ConfigureRow::Continue);
        rows
    }

    fn handle_configure_key(&mut self, key: KeyEvent) {
        let rows = self.configure_rows();
        let row = rows[self.configure_cursor.min(rows.len() - 1)];

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.configure_cursor = (self.configure_cursor + 1) % rows.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.configure_cursor = if self.configure_cursor == 0 {
                    rows.len() - 1
                } else {
                    self.configure_cursor - 1
                };
            }
            KeyCode::Enter => match row {
                ConfigureRow::Continue => self.session.advance_to_theme(),
                _ => self.configure_cursor = (self.configure_cursor + 1) % rows.len(),
            },
            KeyCode::Left => self.adjust_configure_row(row, -1),
            KeyCode::Right => self.adjust_configure_row(row, 1),
            // Space toggles on the required row and types everywhere else
            KeyCode::Char(c) => match row {
                ConfigureRow::Field {
                    index,
                    attr: FieldAttr::Required,
                } if c == ' ' => self.toggle_required(index),
                _ => self.push_configure_char(row, c),
            },
            KeyCode::Backspace => self.pop_configure_char(row),
            _ => {}
        }
    }

    fn adjust_configure_row(&mut self, row: ConfigureRow, delta: i16) {
        match row {
            ConfigureRow::Field {
                index,
                attr: FieldAttr::FontSize,
            } => {
                let Some(field) = self.session.design.fields.get(index) else {
                    return;
                };
                let next = clamp_i16(field.font_size_px as i16 + delta);
                self.patch_field(
                    index,
                    FieldPatch {
                        font_size_px: Some(next),
                        ..FieldPatch::default()
                    },
                );
            }
            ConfigureRow::SubmitFontSize => {
                let next = clamp_i16(self.session.design.submit.font_size_px as i16 + delta);
                self.session.design.submit.font_size_px = next;
            }
            _ => {}
        }
    }

    fn toggle_required(&mut self, index: usize) {
        let Some(field) = self.session.design.fields.get(index) else {
            return;
        };
        let required = !field.required;
        self.patch_field(
            index,
            FieldPatch {
                required: Some(required),
                ..FieldPatch::default()
            },
        );
    }

    fn push_configure_char(&mut self, row: ConfigureRow, c: char) {
        match row {
            ConfigureRow::Field { index, attr } => {
                self.edit_field_text(index, attr, |value| value.push(c));
            }
            ConfigureRow::SubmitLabel => self.session.design.submit.label.push(c),
            _ => {}
        }
    }

    fn pop_configure_char(&mut self, row: ConfigureRow) {
        match row {
            ConfigureRow::Field { index, attr } => {
                self.edit_field_text(index, attr, |value| {
                    value.pop();
                });
            }
            ConfigureRow::SubmitLabel => {
                self.session.design.submit.label.pop();
            }
            _ => {}
        }
    }

    fn edit_field_text(&mut self, index: usize, attr: FieldAttr, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.session.design.fields.get(index) else {
            return;
        };
        let mut value = match attr {
            FieldAttr::Label => field.label.clone(),
            FieldAttr::Placeholder => field.placeholder.clone(),
            _ => return,
        };
        edit(&mut value);
        let patch = match attr {
            FieldAttr::Label => FieldPatch {
                label: Some(value),
                ..FieldPatch::default()
            },
            FieldAttr::Placeholder => FieldPatch {
                placeholder: Some(value),
                ..FieldPatch::default()
            },
            _ => return,
        };
        self.patch_field(index, patch);
    }

    fn patch_field(&mut self, index: usize, patch: FieldPatch) {
        if let Err(err) = self.session.design.update_field(index, patch) {
            tracing::error!(error = %err, "field update rejected");
            self.status_message = Some(StatusMessage::error(err.to_string()));
        }
    }

    // --- Theme configuration ---

    fn active_theme_row(&self) -> ThemeRow {
        ThemeRow::ALL[self.theme_cursor.min(ThemeRow::ALL.len() - 1)]
    }

    /// Committed value of a theme row, for display
    pub fn theme_value(&self, row: ThemeRow) -> String {
        let theme = &self.session.design.theme;
        match row {
            ThemeRow::FormBackground => theme.form_background_color.clone(),
            ThemeRow::InputBackground => theme.background_color.clone(),
            ThemeRow::TextColor => theme.text_color.clone(),
            ThemeRow::PlaceholderColor => theme.placeholder_color.clone(),
            ThemeRow::IconColor => theme.icon_color.clone(),
            ThemeRow::BorderColor => theme.border_color.clone(),
            ThemeRow::SubmitColor => self.session.design.submit.color.clone(),
            ThemeRow::BorderRadius => theme.border_radius_px.to_string(),
            ThemeRow::BaseFontSize => format!("{}px", theme.base_font_size_px),
            ThemeRow::Continue => String::new(),
        }
    }

    fn handle_theme_key(&mut self, key: KeyEvent) {
        let row = self.active_theme_row();
        let count = ThemeRow::ALL.len();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.set_theme_cursor((self.theme_cursor + 1) % count),
            KeyCode::BackTab | KeyCode::Up => {
                let prev = if self.theme_cursor == 0 {
                    count - 1
                } else {
                    self.theme_cursor - 1
                };
                self.set_theme_cursor(prev);
            }
            KeyCode::Enter => match row {
                ThemeRow::Continue => self.session.advance_to_preview(),
                _ => self.set_theme_cursor((self.theme_cursor + 1) % count),
            },
            KeyCode::Left => self.adjust_theme_row(row, -1),
            KeyCode::Right => self.adjust_theme_row(row, 1),
            KeyCode::Char(c) if row.is_color() && c.is_ascii_hexdigit() => {
                if self.color_edit.len() < 6 {
                    self.color_edit.push(c.to_ascii_lowercase());
                    if self.color_edit.len() == 6 {
                        self.commit_color(row);
                    }
                }
            }
            KeyCode::Backspace if row.is_color() => {
                self.color_edit.pop();
            }
            _ => {}
        }
    }

    fn set_theme_cursor(&mut self, cursor: usize) {
        self.theme_cursor = cursor;
        // A fresh 6-digit value replaces the committed one; partial input
        // is discarded when the cursor leaves the row
        self.color_edit.clear();
    }

    fn commit_color(&mut self, row: ThemeRow) {
        let value = format!("#{}", self.color_edit);
        if !is_valid_hex_color(&value) {
            return;
        }
        let theme = &mut self.session.design.theme;
        match row {
            ThemeRow::FormBackground => theme.form_background_color = value,
            ThemeRow::InputBackground => theme.background_color = value,
            ThemeRow::TextColor => theme.text_color = value,
            ThemeRow::PlaceholderColor => theme.placeholder_color = value,
            ThemeRow::IconColor => theme.icon_color = value,
            ThemeRow::BorderColor => theme.border_color = value,
            ThemeRow::SubmitColor => self.session.design.submit.color = value,
            _ => {}
        }
    }

    fn adjust_theme_row(&mut self, row: ThemeRow, delta: i16) {
        let theme = &mut self.session.design.theme;
        match row {
            ThemeRow::BorderRadius => {
                let next = (theme.border_radius_px as i16 + delta)
                    .clamp(0, BORDER_RADIUS_MAX as i16) as u8;
                theme.set_border_radius(next);
            }
            ThemeRow::BaseFontSize => {
                theme.set_base_font_size(clamp_i16(theme.base_font_size_px as i16 + delta));
            }
            _ => {}
        }
    }

    // --- Preview and delivery ---

    fn handle_preview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
            KeyCode::Char('y') => self.copy_markup(),
            KeyCode::Char('f') | KeyCode::Enter => self.finish(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Compile the design and hand it to the collector.
    ///
    /// Fire-and-forget: the session stays in `Previewing` whatever the
    /// outcome, and repeated Finish actions deliver again.
    fn finish(&mut self) {
        let payload = FormPayload {
            id: self.session.design.form_id.clone(),
            form_html: render::compile(&self.session.design),
        };
        let collector = Arc::clone(&self.collector);
        let tx = self.delivery_tx.clone();
        self.status_message = Some(StatusMessage::info("Delivering form..."));
        tokio::spawn(async move {
            let outcome = collector.deliver(&payload).await;
            let _ = tx.send(outcome);
        });
    }

    fn report_delivery(&mut self, outcome: DeliveryOutcome) {
        self.status_message = Some(match outcome {
            DeliveryOutcome::Delivered => {
                StatusMessage::info("Form delivered. You can close this window")
            }
            DeliveryOutcome::Rejected { status, reason } => {
                StatusMessage::error(format!("Collector rejected the form: {status} {reason}"))
            }
            DeliveryOutcome::TransportFailure(description) => {
                StatusMessage::error(format!("Delivery failed: {description}"))
            }
        });
    }

    fn copy_markup(&mut self) {
        let markup = render::compile(&self.session.design);
        match self.copy_to_clipboard(&markup) {
            Ok(()) => self.copy_message = Some("Markup copied to clipboard".to_string()),
            Err(err) => {
                self.status_message = Some(StatusMessage::error(format!("Copy failed: {err}")));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

fn clamp_i16(value: i16) -> u8 {
    value.clamp(FONT_SIZE_MIN as i16, FONT_SIZE_MAX as i16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockCollectorTransport;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_mock(mock: MockCollectorTransport) -> App {
        App::new(Some("abc".to_string()), Arc::new(mock))
    }

    fn app() -> App {
        app_with_mock(MockCollectorTransport::new())
    }

    fn app_in_preview() -> App {
        let mut app = app_with_delivery_expectation();
        drive_to_preview(&mut app);
        app
    }

    fn app_with_delivery_expectation() -> App {
        let mut mock = MockCollectorTransport::new();
        mock.expect_deliver()
            .withf(|payload| {
                payload.id.as_deref() == Some("abc") && payload.form_html.starts_with("<form ")
            })
            .times(1)
            .returning(|_| DeliveryOutcome::Delivered);
        app_with_mock(mock)
    }

    fn drive_to_preview(app: &mut App) {
        app.session.toggle_field("name");
        app.session.confirm_selection().unwrap();
        app.session.advance_to_theme();
        app.session.advance_to_preview();
    }

    #[test]
    fn test_select_keys_toggle_and_confirm() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(' '))).unwrap(); // toggle "name"
        app.handle_key(key(KeyCode::Down)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap(); // toggle "whatsapp"
        assert_eq!(
            app.session.selection(),
            ["name".to_string(), "whatsapp".to_string()]
        );

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.session.stage, Stage::ConfiguringFields);
        assert_eq!(app.session.design.fields.len(), 2);
    }

    #[test]
    fn test_empty_selection_confirm_reports_error_and_stays() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.session.stage, Stage::SelectingFields);
        let message = app.status_message.expect("error reported");
        assert!(message.is_error);
        assert!(message.text.contains("at least one field"));
    }

    #[test]
    fn test_configure_rows_cover_fields_submit_and_continue() {
        let mut app = app();
        app.session.toggle_field("name");
        app.session.toggle_field("email");
        app.session.confirm_selection().unwrap();

        let rows = app.configure_rows();
        // 4 rows per field + submit label + submit font size + continue
        assert_eq!(rows.len(), 2 * 4 + 3);
        assert_eq!(
            rows[0],
            ConfigureRow::Field {
                index: 0,
                attr: FieldAttr::Label
            }
        );
        assert_eq!(rows[rows.len() - 1], ConfigureRow::Continue);
    }

    #[test]
    fn test_configure_edits_flow_through_update_field() {
        let mut app = app();
        app.session.toggle_field("name");
        app.session.confirm_selection().unwrap();

        // type into the label row
        app.handle_key(key(KeyCode::Char('!'))).unwrap();
        assert_eq!(app.session.design.fields[0].label, "Nome Completo!");
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.session.design.fields[0].label, "Nome Completo");

        // move to the required row and toggle
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.session.design.fields[0].required);

        // font size clamps at the upper bound
        app.handle_key(key(KeyCode::Tab)).unwrap();
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Right)).unwrap();
        }
        assert_eq!(app.session.design.fields[0].font_size_px, FONT_SIZE_MAX);
    }

    #[test]
    fn test_theme_hex_entry_commits_on_six_digits() {
        let mut app = app();
        app.session.toggle_field("name");
        app.session.confirm_selection().unwrap();
        app.session.advance_to_theme();

        for c in "1a2b3c".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.session.design.theme.form_background_color, "#1a2b3c");
    }

    #[test]
    fn test_theme_rejects_non_hex_input() {
        let mut app = app();
        app.session.toggle_field("name");
        app.session.confirm_selection().unwrap();
        app.session.advance_to_theme();

        for c in "zz12zz".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.color_edit, "12");
        assert_eq!(app.session.design.theme.form_background_color, "#f3f4f6");
    }

    #[tokio::test]
    async fn test_finish_delivers_compiled_payload() {
        let mut app = app_in_preview();
        app.handle_key(key(KeyCode::Enter)).unwrap();

        let outcome = app.delivery_rx.recv().await.unwrap();
        assert_eq!(outcome, DeliveryOutcome::Delivered);
        // delivery is a side effect, not a transition
        assert_eq!(app.session.stage, Stage::Previewing);
    }

    #[tokio::test]
    async fn test_rejected_delivery_surfaces_status_code() {
        let mut mock = MockCollectorTransport::new();
        mock.expect_deliver()
            .times(1)
            .returning(|_| DeliveryOutcome::Rejected {
                status: 503,
                reason: "Service Unavailable".to_string(),
            });
        let mut app = app_with_mock(mock);
        drive_to_preview(&mut app);

        app.handle_key(key(KeyCode::Char('f'))).unwrap();
        let outcome = app.delivery_rx.recv().await.unwrap();
        app.report_delivery(outcome);

        let message = app.status_message.expect("rejection reported");
        assert!(message.is_error);
        assert!(message.text.contains("503"));
        assert!(message.text.contains("Service Unavailable"));
        assert_eq!(app.session.stage, Stage::Previewing);
    }

    #[test]
    fn test_transport_failure_is_reported_distinctly() {
        let mut app = app();
        app.report_delivery(DeliveryOutcome::TransportFailure(
            "connection refused".to_string(),
        ));
        let message = app.status_message.expect("failure reported");
        assert!(message.is_error);
        assert!(message.text.contains("connection refused"));
        assert!(!message.text.contains("rejected"));
    }
}
