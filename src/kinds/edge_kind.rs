use serde::Serialize;

use super::Accent;

kind_enum! {
    /// The closed set of relationship kinds a model may contain.
    pub enum EdgeKind {
        // Structural
        Dependency => "dependency",
        Specialization => "specialization",
        /// Usage to the definition it is typed by.
        Definition => "definition",
        Redefinition => "redefinition",
        Subsetting => "subsetting",
        ReferenceSubsetting => "reference-subsetting",
        Conjugation => "conjugation",
        Composition => "composition",
        Aggregation => "aggregation",
        Association => "association",
        Containment => "containment",
        Import => "import",

        // Connections
        Binding => "binding",
        Connection => "connection",
        Interface => "interface",
        FlowConnection => "flow-connection",
        Allocate => "allocate",

        // Behavior
        Succession => "succession",
        Transition => "transition",
        ControlFlow => "control-flow",
        ObjectFlow => "object-flow",
        Perform => "perform",
        Exhibit => "exhibit",
        Include => "include",
        Extend => "extend",

        // Requirements
        Satisfy => "satisfy",
        Verify => "verify",
        Refine => "refine",
        Derive => "derive",
        Trace => "trace",
        Frame => "frame",
        Subject => "subject",

        // Interaction and metadata
        Message => "message",
        Annotate => "annotate",
        Expose => "expose",
    }
}

/// Stroke pattern of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// End decoration of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    None,
    OpenArrow,
    FilledArrow,
    /// Hollow triangle (generalization).
    HollowTriangle,
    FilledDiamond,
    HollowDiamond,
    /// Crossed circle (containment).
    Containment,
}

/// Resolved visual style of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub line: LineStyle,
    pub source_marker: Marker,
    pub target_marker: Marker,
}

impl EdgeStyle {
    const fn new(line: LineStyle, source_marker: Marker, target_marker: Marker) -> Self {
        Self {
            line,
            source_marker,
            target_marker,
        }
    }
}

impl EdgeKind {
    /// Visual style used to draw edges of this kind.
    pub fn style(self) -> EdgeStyle {
        use EdgeKind::*;
        use LineStyle::{Dashed, Dotted, Solid};
        use Marker::{
            Containment as Contains, FilledArrow, FilledDiamond, HollowDiamond, HollowTriangle,
            OpenArrow,
        };

        match self {
            Specialization | Conjugation => EdgeStyle::new(Solid, Marker::None, HollowTriangle),
            Definition | Redefinition | Subsetting | ReferenceSubsetting => {
                EdgeStyle::new(Solid, Marker::None, OpenArrow)
            }
            Composition => EdgeStyle::new(Solid, FilledDiamond, Marker::None),
            Aggregation => EdgeStyle::new(Solid, HollowDiamond, Marker::None),
            Containment => EdgeStyle::new(Solid, Contains, Marker::None),
            Association | Binding | Connection | Interface => {
                EdgeStyle::new(Solid, Marker::None, Marker::None)
            }
            FlowConnection | Succession | Transition | ControlFlow | ObjectFlow | Message => {
                EdgeStyle::new(Solid, Marker::None, FilledArrow)
            }
            Dependency | Import | Allocate | Perform | Exhibit | Include | Extend | Satisfy
            | Verify | Refine | Derive | Trace | Frame | Subject | Expose => {
                EdgeStyle::new(Dashed, Marker::None, OpenArrow)
            }
            Annotate => EdgeStyle::new(Dotted, Marker::None, Marker::None),
        }
    }

    /// Accent color for edges of this kind.
    pub fn accent(self) -> Accent {
        use EdgeKind::*;
        match self {
            Satisfy | Verify | Refine | Derive | Trace | Frame | Subject => {
                Accent::rgb(0xef, 0x44, 0x44)
            }
            Succession | Transition | ControlFlow | ObjectFlow | Perform | Exhibit => {
                Accent::rgb(0x22, 0xc5, 0x5e)
            }
            Binding | Connection | Interface | FlowConnection | Allocate => {
                Accent::rgb(0x06, 0xb6, 0xd4)
            }
            Message => Accent::rgb(0x14, 0xb8, 0xa6),
            Include | Extend => Accent::rgb(0xec, 0x48, 0x99),
            Dependency | Specialization | Definition | Redefinition | Subsetting
            | ReferenceSubsetting | Conjugation | Composition | Aggregation | Association
            | Containment | Import | Annotate | Expose => Accent::rgb(0x47, 0x55, 0x69),
        }
    }

    /// Human label derived from the wire name: `flow-connection` becomes
    /// `Flow Connection`.
    pub fn default_label(self) -> String {
        title_case(self.as_str())
    }
}

/// Split on `-` and upper-case the first character of each segment.
pub(crate) fn title_case(identifier: &str) -> String {
    identifier
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
