//! Markup tree serialization to self-contained HTML

use super::node::{Node, MAX_FORM_WIDTH_PX};
use std::fmt::Write;

/// Serialize a markup tree to an HTML string.
///
/// The output carries inline style attributes only: no stylesheet
/// references and no executable behavior.
pub fn render_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Form {
            background_color,
            font_size_px,
            children,
        } => {
            let _ = write!(
                out,
                "<form style=\"max-width:{MAX_FORM_WIDTH_PX}px;background-color:{};font-size:{}px\">",
                escape_attr(background_color),
                font_size_px,
            );
            for child in children {
                write_node(out, child);
            }
            out.push_str("</form>");
        }
        Node::FieldBlock { children } => {
            out.push_str("<div style=\"margin-bottom:1rem\">");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</div>");
        }
        Node::Label {
            font_size_px,
            color,
            children,
        } => {
            let _ = write!(
                out,
                "<label style=\"display:flex;align-items:center;gap:0.5rem;font-size:{}px;color:{}\">",
                font_size_px,
                escape_attr(color),
            );
            for child in children {
                write_node(out, child);
            }
            out.push_str("</label>");
        }
        Node::Glyph { glyph, color } => {
            let _ = write!(
                out,
                "<span style=\"color:{}\">{}</span>",
                escape_attr(color),
                escape_text(glyph),
            );
        }
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::RequiredMarker => out.push_str("<span style=\"color:red\">*</span>"),
        Node::Input {
            kind,
            placeholder,
            font_size_px,
            border_color,
            border_radius_px,
            background_color,
            text_color,
            placeholder_color,
        } => {
            let _ = write!(
                out,
                "<input type=\"{}\" placeholder=\"{}\" style=\"width:100%;padding:0.5rem;font-size:{}px;border:1px solid {};border-radius:{}px;background-color:{};color:{};--placeholder-color:{}\"/>",
                kind.html_type(),
                escape_attr(placeholder),
                font_size_px,
                escape_attr(border_color),
                border_radius_px,
                escape_attr(background_color),
                escape_attr(text_color),
                escape_attr(placeholder_color),
            );
        }
        Node::SubmitButton {
            label,
            color,
            font_size_px,
        } => {
            let _ = write!(
                out,
                "<button type=\"submit\" style=\"width:100%;background-color:{};color:white;padding:0.5rem;border:none;border-radius:4px;cursor:pointer;font-size:{}px\">{}</button>",
                escape_attr(color),
                font_size_px,
                escape_text(label),
            );
        }
    }
}

/// Escape text content
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape attribute values (double-quoted)
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
