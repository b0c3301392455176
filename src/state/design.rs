//! Form design model: field instances, theme and submit control

use super::catalog::{archetype_by_id, InputKind};
use super::error::WizardError;

/// Lower bound for every font size knob in the wizard
pub const FONT_SIZE_MIN: u8 = 10;
/// Upper bound for every font size knob in the wizard
pub const FONT_SIZE_MAX: u8 = 24;
/// Upper bound for the theme border radius
pub const BORDER_RADIUS_MAX: u8 = 20;
/// Font size applied when a field is materialized
pub const DEFAULT_FONT_SIZE: u8 = 16;

/// Clamp a font size into the allowed range
pub fn clamp_font_size(value: u8) -> u8 {
    value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}

/// Check a `#rrggbb` hex color string
pub fn is_valid_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// A user-configured occurrence of a catalog archetype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInstance {
    /// Back-reference to the archetype this instance was created from
    pub archetype_id: String,
    pub input_kind: InputKind,
    pub label: String,
    pub placeholder: String,
    pub icon_name: String,
    pub required: bool,
    pub font_size_px: u8,
}

impl FieldInstance {
    /// Materialize one instance per selected id, in selection order.
    ///
    /// A selected id with no catalog entry indicates the selection has
    /// desynchronized from the catalog; it surfaces as an error instead
    /// of silently dropping the field.
    pub fn from_selection(selected_ids: &[String]) -> Result<Vec<FieldInstance>, WizardError> {
        selected_ids
            .iter()
            .map(|id| {
                let archetype = archetype_by_id(id).ok_or_else(|| {
                    WizardError::UnknownArchetype { id: id.clone() }
                })?;
                Ok(FieldInstance {
                    archetype_id: archetype.id.to_string(),
                    input_kind: archetype.input_kind,
                    label: archetype.default_label.to_string(),
                    placeholder: archetype.default_placeholder.to_string(),
                    icon_name: archetype.default_icon.to_string(),
                    required: false,
                    font_size_px: DEFAULT_FONT_SIZE,
                })
            })
            .collect()
    }
}

/// Partial update for a single field instance; only the attributes
/// present are replaced
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub icon_name: Option<String>,
    pub required: Option<bool>,
    pub font_size_px: Option<u8>,
}

/// Global visual theme applied uniformly to the compiled form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSpec {
    /// Input background
    pub background_color: String,
    pub text_color: String,
    pub border_color: String,
    pub border_radius_px: u8,
    pub form_background_color: String,
    pub placeholder_color: String,
    pub icon_color: String,
    pub base_font_size_px: u8,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#333333".to_string(),
            border_color: "#cccccc".to_string(),
            border_radius_px: 4,
            form_background_color: "#f3f4f6".to_string(),
            placeholder_color: "#9ca3af".to_string(),
            icon_color: "#6b7280".to_string(),
            base_font_size_px: DEFAULT_FONT_SIZE,
        }
    }
}

impl ThemeSpec {
    pub fn set_border_radius(&mut self, value: u8) {
        self.border_radius_px = value.min(BORDER_RADIUS_MAX);
    }

    pub fn set_base_font_size(&mut self, value: u8) {
        self.base_font_size_px = clamp_font_size(value);
    }
}

/// The single submit control at the bottom of every compiled form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControlSpec {
    pub label: String,
    /// Hex or named color
    pub color: String,
    pub font_size_px: u8,
}

impl Default for SubmitControlSpec {
    fn default() -> Self {
        Self {
            label: "Enviar".to_string(),
            color: "green".to_string(),
            font_size_px: DEFAULT_FONT_SIZE,
        }
    }
}

/// Aggregate root for one in-progress form design
#[derive(Debug, Clone, Default)]
pub struct FormDesign {
    /// Ordered as selected; no duplicate archetype ids
    pub fields: Vec<FieldInstance>,
    pub theme: ThemeSpec,
    pub submit: SubmitControlSpec,
    /// Externally supplied identifier, captured once at session start
    pub form_id: Option<String>,
}

impl FormDesign {
    pub fn new(form_id: Option<String>) -> Self {
        Self {
            form_id,
            ..Self::default()
        }
    }

    /// Replace only the attributes named by the patch on the field at
    /// `index`. Numeric values are clamped into their bounds.
    pub fn update_field(&mut self, index: usize, patch: FieldPatch) -> Result<(), WizardError> {
        let len = self.fields.len();
        let field = self
            .fields
            .get_mut(index)
            .ok_or(WizardError::FieldIndexOutOfRange { index, len })?;

        if let Some(label) = patch.label {
            field.label = label;
        }
        if let Some(placeholder) = patch.placeholder {
            field.placeholder = placeholder;
        }
        if let Some(icon_name) = patch.icon_name {
            field.icon_name = icon_name;
        }
        if let Some(required) = patch.required {
            field.required = required;
        }
        if let Some(size) = patch.font_size_px {
            field.font_size_px = clamp_font_size(size);
        }
        Ok(())
    }
}
