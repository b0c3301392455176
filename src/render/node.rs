//! Typed markup tree produced by the compiler

use crate::state::InputKind;

/// Fixed maximum width of the compiled form container
pub const MAX_FORM_WIDTH_PX: u16 = 550;

/// One node of the markup tree.
///
/// Building the tree is a separate step from stringifying it, so the
/// compiler can be exercised without any rendering environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Top-level form container
    Form {
        background_color: String,
        font_size_px: u8,
        children: Vec<Node>,
    },
    /// Wrapper around one label + input pair
    FieldBlock { children: Vec<Node> },
    /// Label row above an input
    Label {
        font_size_px: u8,
        color: String,
        children: Vec<Node>,
    },
    /// Resolved icon glyph
    Glyph { glyph: &'static str, color: String },
    /// Literal text content
    Text(String),
    /// Marker appended to the label of a required field
    RequiredMarker,
    /// The input control itself
    Input {
        kind: InputKind,
        placeholder: String,
        font_size_px: u8,
        border_color: String,
        border_radius_px: u8,
        background_color: String,
        text_color: String,
        placeholder_color: String,
    },
    /// The single submit control
    SubmitButton {
        label: String,
        color: String,
        font_size_px: u8,
    },
}
