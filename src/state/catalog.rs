//! Static catalog of selectable field archetypes

/// Input control kind for a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Numeric,
}

impl InputKind {
    /// HTML `type` attribute value for this kind
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Numeric => "number",
        }
    }
}

/// A predefined field template the user can select
#[derive(Debug, Clone, Copy)]
pub struct FieldArchetype {
    pub id: &'static str,
    pub display_name: &'static str,
    pub input_kind: InputKind,
    pub default_label: &'static str,
    pub default_placeholder: &'static str,
    pub default_icon: &'static str,
}

/// The fixed, ordered archetype catalog.
///
/// Ids, default labels, placeholders and icon names are part of the
/// markup contract consumed downstream. Do not reorder or rename entries.
pub const CATALOG: &[FieldArchetype] = &[
    FieldArchetype {
        id: "name",
        display_name: "Nome",
        input_kind: InputKind::Text,
        default_label: "Nome Completo",
        default_placeholder: "Digite seu nome completo",
        default_icon: "user",
    },
    FieldArchetype {
        id: "whatsapp",
        display_name: "WhatsApp",
        input_kind: InputKind::Numeric,
        default_label: "WhatsApp",
        default_placeholder: "Digite seu WhatsApp",
        default_icon: "phone",
    },
    FieldArchetype {
        id: "cpf",
        display_name: "CPF",
        input_kind: InputKind::Numeric,
        default_label: "CPF",
        default_placeholder: "Digite seu CPF",
        default_icon: "hash",
    },
    FieldArchetype {
        id: "cep",
        display_name: "CEP",
        input_kind: InputKind::Numeric,
        default_label: "CEP",
        default_placeholder: "Digite seu CEP",
        default_icon: "map-pin",
    },
    FieldArchetype {
        id: "email",
        display_name: "Email",
        input_kind: InputKind::Text,
        default_label: "Email",
        default_placeholder: "Digite seu email",
        default_icon: "mail",
    },
    FieldArchetype {
        id: "state",
        display_name: "Estado",
        input_kind: InputKind::Text,
        default_label: "Estado",
        default_placeholder: "Digite seu estado",
        default_icon: "map",
    },
    FieldArchetype {
        id: "city",
        display_name: "Cidade",
        input_kind: InputKind::Text,
        default_label: "Cidade",
        default_placeholder: "Digite sua cidade",
        default_icon: "building",
    },
    FieldArchetype {
        id: "neighborhood",
        display_name: "Bairro",
        input_kind: InputKind::Text,
        default_label: "Bairro",
        default_placeholder: "Digite seu bairro",
        default_icon: "home",
    },
    FieldArchetype {
        id: "street",
        display_name: "Rua",
        input_kind: InputKind::Text,
        default_label: "Rua",
        default_placeholder: "Digite sua rua",
        default_icon: "map-pin",
    },
    FieldArchetype {
        id: "number",
        display_name: "Número",
        input_kind: InputKind::Numeric,
        default_label: "Número",
        default_placeholder: "Digite o número",
        default_icon: "hash",
    },
    FieldArchetype {
        id: "complement",
        display_name: "Complemento",
        input_kind: InputKind::Text,
        default_label: "Complemento",
        default_placeholder: "Digite o complemento",
        default_icon: "file-text",
    },
];

/// Look up an archetype by its id
pub fn archetype_by_id(id: &str) -> Option<&'static FieldArchetype> {
    CATALOG.iter().find(|a| a.id == id)
}
