use color::{AlphaColor, Srgb};
use serde::{Deserialize, Serialize};

/// The family of outline a renderer draws for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeFamily {
    /// Tabbed folder.
    Package,
    /// Sharp-cornered box.
    Definition,
    /// Rounded box.
    Usage,
    /// Bar or diamond for fork/join/decision/merge, circles for start/done.
    Control,
    /// Rounded box with state compartments.
    State,
    Requirement,
    /// Ellipse.
    UseCase,
    /// Stick figure.
    Actor,
    Lifeline,
    /// Folded-corner note.
    Note,
    /// Diagram frame for interactions.
    Frame,
}

/// `definition` or `usage`, derived structurally from a kind identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKindTag {
    Definition,
    Usage,
}

impl ElementKindTag {
    /// Tag a kind identifier, `None` for kinds that are neither.
    pub fn of(kind: &str) -> Option<Self> {
        if super::is_definition_kind(kind) {
            Some(Self::Definition)
        } else if super::is_usage_kind(kind) {
            Some(Self::Usage)
        } else {
            None
        }
    }
}

/// An opaque sRGB accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Accent {
    r: u8,
    g: u8,
    b: u8,
}

impl Accent {
    /// Slate gray used for anything without a dedicated accent.
    pub const NEUTRAL: Accent = Accent::rgb(0x9c, 0xa3, 0xaf);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The accent as a `color` crate value, for renderers that blend or
    /// convert color spaces.
    pub fn color(self) -> AlphaColor<Srgb> {
        AlphaColor::from_rgb8(self.r, self.g, self.b)
    }

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Accent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Accent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
