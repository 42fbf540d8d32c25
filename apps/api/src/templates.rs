//! Template registry: maps a `TemplateId` to the style both renderers share.
//!
//! Resolution is total: an unrecognized template name resolves to `CleanGreen`.

use serde::{Deserialize, Serialize};

use crate::layout::FontFamily;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// CSS hex form, e.g. `#4682b4`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Channels scaled to 0.0..=1.0, as PDF color operators expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

/// The selectable résumé designs.
///
/// Serialized by display name ("Modern Blue"); any other string deserializes to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateId {
    ModernBlue,
    ElegantPurple,
    #[default]
    CleanGreen,
}

impl TemplateId {
    /// Display order for template pickers.
    pub const ALL: [TemplateId; 3] = [
        TemplateId::ModernBlue,
        TemplateId::ElegantPurple,
        TemplateId::CleanGreen,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            TemplateId::ModernBlue => "Modern Blue",
            TemplateId::ElegantPurple => "Elegant Purple",
            TemplateId::CleanGreen => "Clean Green",
        }
    }

    /// Parses a display name. Never fails: unknown names map to the default template.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|id| id.display_name() == name.trim())
            .unwrap_or_default()
    }
}

impl From<String> for TemplateId {
    fn from(name: String) -> Self {
        TemplateId::from_name(&name)
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        id.display_name().to_string()
    }
}

/// Resolved style attributes for a template, consumed by both renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDescriptor {
    pub name: &'static str,
    /// Name-heading fill and section-heading accent.
    pub primary_color: Rgb,
    /// Text color drawn on top of `primary_color`.
    pub heading_text_color: Rgb,
    pub font: FontFamily,
}

/// Looks up the style for a template. Pure and total.
pub fn resolve_style(template: TemplateId) -> StyleDescriptor {
    let primary_color = match template {
        TemplateId::ModernBlue => Rgb(70, 130, 180),    // SteelBlue
        TemplateId::ElegantPurple => Rgb(147, 112, 219), // MediumPurple
        TemplateId::CleanGreen => Rgb(46, 139, 87),     // SeaGreen
    };
    StyleDescriptor {
        name: template.display_name(),
        primary_color,
        heading_text_color: Rgb::WHITE,
        font: FontFamily::Helvetica,
    }
}
