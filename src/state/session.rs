//! Wizard session: stage machine and field selection

use super::design::{FieldInstance, FormDesign};
use super::error::WizardError;

/// Wizard stages, in strict forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    SelectingFields,
    ConfiguringFields,
    ConfiguringTheme,
    Previewing,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::SelectingFields => "Fields",
            Stage::ConfiguringFields => "Configure",
            Stage::ConfiguringTheme => "Style",
            Stage::Previewing => "Preview",
        }
    }

    /// 1-based position in the wizard, for the breadcrumb
    pub fn step(&self) -> usize {
        match self {
            Stage::SelectingFields => 1,
            Stage::ConfiguringFields => 2,
            Stage::ConfiguringTheme => 3,
            Stage::Previewing => 4,
        }
    }
}

/// One live wizard interaction: the current stage, the ordered field
/// selection and the form design being built.
///
/// There is exactly one session per process run; it is discarded on exit.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    pub stage: Stage,
    pub design: FormDesign,
    selection: Vec<String>,
}

impl WizardSession {
    pub fn new(form_id: Option<String>) -> Self {
        Self {
            stage: Stage::SelectingFields,
            design: FormDesign::new(form_id),
            selection: Vec::new(),
        }
    }

    /// Toggle membership of a catalog id in the selection set.
    ///
    /// Order-preserving: newly selected ids append; deselecting removes.
    /// Toggling the same id twice restores the prior selection.
    pub fn toggle_field(&mut self, id: &str) {
        if let Some(pos) = self.selection.iter().position(|s| s == id) {
            self.selection.remove(pos);
        } else {
            self.selection.push(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Leave `SelectingFields`: materialize one field instance per
    /// selected id and move to `ConfiguringFields`.
    ///
    /// Fails without touching the session on an empty selection or on a
    /// selected id missing from the catalog.
    pub fn confirm_selection(&mut self) -> Result<(), WizardError> {
        if self.stage != Stage::SelectingFields {
            return Ok(());
        }
        if self.selection.is_empty() {
            return Err(WizardError::EmptySelection);
        }
        self.design.fields = FieldInstance::from_selection(&self.selection)?;
        self.stage = Stage::ConfiguringFields;
        Ok(())
    }

    /// Leave `ConfiguringFields`; unconditional
    pub fn advance_to_theme(&mut self) {
        if self.stage == Stage::ConfiguringFields {
            self.stage = Stage::ConfiguringTheme;
        }
    }

    /// Leave `ConfiguringTheme`; unconditional
    pub fn advance_to_preview(&mut self) {
        if self.stage == Stage::ConfiguringTheme {
            self.stage = Stage::Previewing;
        }
    }
}
