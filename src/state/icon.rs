//! Icon name to glyph resolution

/// Closed mapping from symbolic icon names to renderable glyphs.
///
/// Resolution never fails: names outside the mapping yield [`Icon::None`],
/// which renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    User,
    Phone,
    Mail,
    MapPin,
    Home,
    Building,
    Map,
    Hash,
    FileText,
    MessageSquare,
    /// Unknown or empty name; no glyph
    None,
}

impl Icon {
    /// Resolve a symbolic icon name
    pub fn resolve(name: &str) -> Self {
        match name {
            "user" => Icon::User,
            "phone" => Icon::Phone,
            "mail" => Icon::Mail,
            "map-pin" => Icon::MapPin,
            "home" => Icon::Home,
            "building" => Icon::Building,
            "map" => Icon::Map,
            "hash" => Icon::Hash,
            "file-text" => Icon::FileText,
            "message-square" => Icon::MessageSquare,
            _ => Icon::None,
        }
    }

    /// Glyph used in compiled markup, if any
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            Icon::User => Some("👤"),
            Icon::Phone => Some("📞"),
            Icon::Mail => Some("✉"),
            Icon::MapPin => Some("📍"),
            Icon::Home => Some("🏠"),
            Icon::Building => Some("🏢"),
            Icon::Map => Some("🗺"),
            Icon::Hash => Some("#"),
            Icon::FileText => Some("📄"),
            Icon::MessageSquare => Some("💬"),
            Icon::None => None,
        }
    }
}
