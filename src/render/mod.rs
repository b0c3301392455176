//! Markup compiler: FormDesign to self-contained static HTML

mod html;
mod node;
mod tree;

pub use html::render_html;
pub use node::{Node, MAX_FORM_WIDTH_PX};
pub use tree::build_tree;

use crate::state::FormDesign;

/// Compile a form design to its markup artifact.
///
/// Pure and deterministic: the same design always yields byte-identical
/// output, and compiling has no side effects.
pub fn compile(design: &FormDesign) -> String {
    render_html(&build_tree(design))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldInstance, FieldPatch, WizardSession};
    use pretty_assertions::assert_eq;

    fn design_with(ids: &[&str]) -> FormDesign {
        let selected: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        let mut design = FormDesign::default();
        design.fields = FieldInstance::from_selection(&selected).unwrap();
        design
    }

    #[test]
    fn test_compile_is_deterministic() {
        let mut session = WizardSession::new(Some("7".to_string()));
        session.toggle_field("name");
        session.toggle_field("whatsapp");
        session.confirm_selection().unwrap();

        let first = compile(&session.design);
        let second = compile(&session.design);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_fields_compile_to_submit_only_form() {
        let html = compile(&FormDesign::default());
        assert_eq!(html.matches("<button type=\"submit\"").count(), 1);
        assert_eq!(html.matches("<input").count(), 0);
        assert!(html.starts_with("<form "));
        assert!(html.ends_with("</form>"));
    }

    #[test]
    fn test_name_and_email_defaults_scenario() {
        let design = design_with(&["name", "email"]);
        let html = compile(&design);

        let name_pos = html.find("Nome Completo").expect("name label present");
        let email_pos = html.find("Email").expect("email label present");
        assert!(name_pos < email_pos, "field order follows selection order");

        // both are text inputs with their default icons
        assert_eq!(html.matches("type=\"text\"").count(), 2);
        assert!(html.contains("👤"));
        assert!(html.contains("✉"));

        // one submit control, default label at 16px
        assert_eq!(html.matches("<button type=\"submit\"").count(), 1);
        assert!(html.contains(">Enviar</button>"));
        assert!(html.contains("cursor:pointer;font-size:16px"));
    }

    #[test]
    fn test_numeric_field_compiles_to_number_input() {
        let html = compile(&design_with(&["cpf"]));
        assert!(html.contains("type=\"number\""));
        assert!(html.contains("placeholder=\"Digite seu CPF\""));
    }

    #[test]
    fn test_required_marker_present_iff_required() {
        let mut design = design_with(&["name"]);
        let marker = "<span style=\"color:red\">*</span>";

        assert!(!compile(&design).contains(marker));

        design
            .update_field(
                0,
                FieldPatch {
                    required: Some(true),
                    ..FieldPatch::default()
                },
            )
            .unwrap();
        assert!(compile(&design).contains(marker));
    }

    #[test]
    fn test_theme_values_round_trip_into_markup() {
        let mut design = design_with(&["name"]);
        design.theme.background_color = "#102030".to_string();
        design.theme.text_color = "#a1b2c3".to_string();
        design.theme.border_color = "#d4e5f6".to_string();
        design.theme.border_radius_px = 12;
        design.theme.form_background_color = "#0f0f0f".to_string();
        design.theme.placeholder_color = "#777777".to_string();
        design.theme.icon_color = "#00ff00".to_string();
        design.theme.base_font_size_px = 18;
        design.submit.color = "#c0ffee".to_string();
        design.submit.font_size_px = 20;

        let html = compile(&design);
        assert!(html.contains("background-color:#102030"));
        assert!(html.contains("color:#a1b2c3"));
        assert!(html.contains("border:1px solid #d4e5f6"));
        assert!(html.contains("border-radius:12px"));
        assert!(html.contains("background-color:#0f0f0f"));
        assert!(html.contains("--placeholder-color:#777777"));
        assert!(html.contains("color:#00ff00"));
        assert!(html.contains("font-size:18px"));
        assert!(html.contains("background-color:#c0ffee"));
        assert!(html.contains("font-size:20px"));
    }

    #[test]
    fn test_form_container_is_width_capped() {
        let html = compile(&FormDesign::default());
        assert!(html.contains(&format!("max-width:{MAX_FORM_WIDTH_PX}px")));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut design = design_with(&["name"]);
        design
            .update_field(
                0,
                FieldPatch {
                    label: Some("Nome <b>& sobrenome</b>".to_string()),
                    placeholder: Some("digite \"tudo\"".to_string()),
                    ..FieldPatch::default()
                },
            )
            .unwrap();
        design.submit.label = "<enviar>".to_string();

        let html = compile(&design);
        assert!(html.contains("Nome &lt;b&gt;&amp; sobrenome&lt;/b&gt;"));
        assert!(html.contains("placeholder=\"digite &quot;tudo&quot;\""));
        assert!(html.contains(">&lt;enviar&gt;</button>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_output_is_self_contained() {
        let html = compile(&design_with(&["name", "email", "number"]));
        assert!(!html.contains("<script"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("class="));
        assert!(!html.contains("href="));
    }
}
