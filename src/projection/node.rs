//! Element → [`ViewNode`] projection.

use serde::Serialize;

use crate::compartments::{BuildInput, Compartment, Parameter, merge_parameters, synthesize};
use crate::error::{CompartmentError, MaterializeError, Result};
use crate::kinds::{Accent, ElementKindTag, NodeKind, ShapeFamily};
use crate::model::{Element, ElementId, Model, ModelIndex};
use crate::options::MaterializeOptions;

use super::{GridLayout, KindConfig, Position};

/// A node ready for rendering.
///
/// Built fresh on every projection and never updated in place. Callers diff
/// successive views by `id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    pub id: ElementId,
    pub kind: NodeKind,
    pub shape: ShapeFamily,
    pub accent: Accent,
    pub name: String,
    /// Only set when explicit (or promoted from a control type). Renderers
    /// fall back to the kind name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_kind: Option<ElementKindTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_definition: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redefines: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subsets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,
    /// Effective parameters, inherited ones first for inheriting kinds.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compartments: Vec<Compartment>,
    pub show_compartments: bool,
    pub position: Position,
}

impl ViewNode {
    /// The label a renderer puts in guillemets.
    pub fn display_stereotype(&self) -> &str {
        self.stereotype.as_deref().unwrap_or(self.kind.as_str())
    }

    /// Definitions get sharp corners, everything else is rounded.
    pub fn is_sharp(&self) -> bool {
        self.element_kind == Some(ElementKindTag::Definition)
    }
}

/// Projects elements of one model into view nodes.
///
/// Holds only shared borrows of the model; one projector can serve any
/// number of calls.
#[derive(Debug)]
pub struct NodeProjector<'m> {
    index: Option<ModelIndex<'m>>,
    grid: GridLayout,
    inherit_parameters: bool,
}

impl<'m> NodeProjector<'m> {
    /// A projector that resolves definitions within `model`.
    pub fn new(model: &'m Model, options: &MaterializeOptions) -> Self {
        Self {
            index: Some(model.index()),
            grid: options.grid,
            inherit_parameters: options.inherit_parameters,
        }
    }

    /// A projector without model context. Usages show only their own
    /// parameters.
    pub fn standalone(options: &MaterializeOptions) -> Self {
        Self {
            index: None,
            grid: options.grid,
            inherit_parameters: options.inherit_parameters,
        }
    }

    /// Project `element`, placed at `position` or else at grid `slot`.
    pub fn project(
        &self,
        element: &Element,
        slot: usize,
        position: Option<Position>,
    ) -> Result<ViewNode> {
        let kind: NodeKind = element.kind.parse().map_err(|_| MaterializeError::UnknownNodeKind {
            id: element.id.clone(),
            kind: element.kind.clone(),
        })?;
        let config = KindConfig::of(kind);

        let mut node = ViewNode {
            id: element.id.clone(),
            kind,
            shape: kind.shape(),
            accent: kind.accent(),
            name: element.name.clone().unwrap_or_default(),
            stereotype: element.stereotype.clone(),
            documentation: element.description.clone(),
            element_kind: kind.element_kind(),
            base_definition: None,
            redefines: Vec::new(),
            subsets: Vec::new(),
            status: None,
            control_type: None,
            parameters: Vec::new(),
            compartments: Vec::new(),
            show_compartments: false,
            position: position.unwrap_or_else(|| self.grid.slot(slot)),
        };

        for map in config.mappers {
            map(element, &mut node);
        }

        let input = if kind.inherits_parameters() && self.inherit_parameters {
            BuildInput::with_parameters(&element.properties, self.merged_parameters(element))
        } else {
            BuildInput::new(&element.properties)
        };
        if let Ok(parameters) = input.parameters() {
            node.parameters = parameters.to_vec();
        }

        node.compartments = match &element.compartments {
            Some(precomputed) => precomputed.clone(),
            None => synthesize(config.compartments, &input),
        };
        node.show_compartments = !node.compartments.is_empty();

        Ok(node)
    }

    /// Local parameters merged with those of the element's definition.
    ///
    /// A missing or dangling definition, or a definition with unreadable
    /// parameters, contributes nothing.
    fn merged_parameters(&self, element: &Element) -> Result<Vec<Parameter>, CompartmentError> {
        let local = Parameter::list_from(element.properties.get("parameters"))?;

        let definition = self
            .index
            .as_ref()
            .and_then(|index| index.definition_of(&element.id));
        let inherited = match definition {
            Some(definition) => {
                match Parameter::list_from(definition.properties.get("parameters")) {
                    Ok(parameters) => parameters,
                    Err(err) => {
                        tracing::warn!(
                            usage = %element.id,
                            definition = %definition.id,
                            error = %err,
                            "not inheriting malformed definition parameters"
                        );
                        Vec::new()
                    }
                }
            }
            None => Vec::new(),
        };

        Ok(merge_parameters(&local, &inherited))
    }
}

/// Project a single element without model context, at grid slot 0 when no
/// position is given.
pub fn project_node(element: &Element, position: Option<Position>) -> Result<ViewNode> {
    NodeProjector::standalone(&MaterializeOptions::default()).project(element, 0, position)
}
