//! FormDesign to markup tree construction

use super::node::Node;
use crate::state::{FormDesign, Icon};

/// Build the markup tree for a design.
///
/// One field block per field instance, in order, followed by exactly one
/// submit button. Unknown icon names produce a label without a glyph.
pub fn build_tree(design: &FormDesign) -> Node {
    let mut children = Vec::with_capacity(design.fields.len() + 1);

    for field in &design.fields {
        let mut label_children = Vec::new();
        if let Some(glyph) = Icon::resolve(&field.icon_name).glyph() {
            label_children.push(Node::Glyph {
                glyph,
                color: design.theme.icon_color.clone(),
            });
        }
        label_children.push(Node::Text(field.label.clone()));
        if field.required {
            label_children.push(Node::RequiredMarker);
        }

        children.push(Node::FieldBlock {
            children: vec![
                Node::Label {
                    font_size_px: field.font_size_px,
                    color: design.theme.text_color.clone(),
                    children: label_children,
                },
                Node::Input {
                    kind: field.input_kind,
                    placeholder: field.placeholder.clone(),
                    font_size_px: field.font_size_px,
                    border_color: design.theme.border_color.clone(),
                    border_radius_px: design.theme.border_radius_px,
                    background_color: design.theme.background_color.clone(),
                    text_color: design.theme.text_color.clone(),
                    placeholder_color: design.theme.placeholder_color.clone(),
                },
            ],
        });
    }

    children.push(Node::SubmitButton {
        label: design.submit.label.clone(),
        color: design.submit.color.clone(),
        font_size_px: design.submit.font_size_px,
    });

    Node::Form {
        background_color: design.theme.form_background_color.clone(),
        font_size_px: design.theme.base_font_size_px,
        children,
    }
}
