//! Kind registry: the closed node and edge kind enumerations and their
//! display metadata.
//!
//! Every lookup here is a total function over the enumerations. String
//! entry points ([`shape_for`], `NodeKind`'s `FromStr`) reject unknown kinds
//! with [`KindError::NotFound`]; only [`accent_for`] degrades to a neutral
//! color, because a wrong color is harmless while a wrong shape changes how
//! downstream fields are read.
//!
//! ```text
//! "part-usage" ──FromStr──▶ NodeKind::PartUsage ──shape()──▶ ShapeFamily::Usage
//!                                               └─accent()─▶ Accent(#3b82f6)
//! ```

use crate::error::KindError;

/// Declares a closed, string-keyed kind enumeration.
///
/// Generates the enum, its `ALL` table, `as_str`, `FromStr`, `Display`, and
/// serde impls keyed by the wire name.
macro_rules! kind_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )*
        }

        impl $name {
            /// Every kind, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// The kebab-case wire name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)*
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::KindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)*
                    _ => Err($crate::error::KindError::not_found(s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use kind_enum;

mod edge_kind;
mod node_kind;
mod shape;

pub use edge_kind::{EdgeKind, EdgeStyle, LineStyle, Marker};
pub use node_kind::NodeKind;
pub use shape::{Accent, ElementKindTag, ShapeFamily};

/// Shape family for a node kind given by name.
pub fn shape_for(kind: &str) -> Result<ShapeFamily, KindError> {
    Ok(kind.parse::<NodeKind>()?.shape())
}

/// Accent color for a node or edge kind given by name.
///
/// Unknown names get [`Accent::NEUTRAL`].
pub fn accent_for(kind: &str) -> Accent {
    if let Ok(node) = kind.parse::<NodeKind>() {
        return node.accent();
    }
    if let Ok(edge) = kind.parse::<EdgeKind>() {
        return edge.accent();
    }
    Accent::NEUTRAL
}

/// A kind is a definition kind iff its identifier ends in `-definition`.
///
/// This is the single rule behind sharp-versus-rounded rendering and
/// definition/usage pairing.
pub fn is_definition_kind(kind: &str) -> bool {
    kind.ends_with("-definition")
}

/// A kind is a usage kind iff its identifier ends in `-usage`.
pub fn is_usage_kind(kind: &str) -> bool {
    kind.ends_with("-usage")
}
