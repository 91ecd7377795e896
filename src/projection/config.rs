//! Per-kind projection configuration.
//!
//! One entry per [`NodeKind`], chosen by an exhaustive `match`, so adding a
//! kind without configuring it fails to compile. Entries are `static` and
//! never change after startup.

use crate::compartments::{Builder, builders as b};
use crate::kinds::NodeKind;
use crate::model::{Element, PropertyValue};

use super::ViewNode;

/// Copies kind-specific data from an element onto its view node.
pub type Mapper = fn(&Element, &mut ViewNode);

/// Field mappers and compartment builders for one node kind.
#[derive(Debug)]
pub struct KindConfig {
    /// Applied in order after the base fields are populated.
    pub mappers: &'static [Mapper],
    /// Run in order; their outputs are concatenated.
    pub compartments: &'static [Builder],
}

impl KindConfig {
    /// The configuration for `kind`.
    pub fn of(kind: NodeKind) -> &'static KindConfig {
        use NodeKind::*;
        match kind {
            Package | LibraryPackage | Comment | Actor | Lifeline => &PLAIN,

            PartDefinition | OccurrenceDefinition => &PART_DEFINITION,
            PartUsage => &PART_USAGE,
            AttributeDefinition | MetadataDefinition => &ATTRIBUTED_DEFINITION,
            AttributeUsage | MetadataUsage => &ATTRIBUTED_USAGE,
            PortDefinition => &PORT_DEFINITION,
            PortUsage => &PORT_USAGE,
            ItemDefinition => &ITEM_DEFINITION,
            ItemUsage => &ITEM_USAGE,
            ConnectionDefinition | AllocationDefinition => &CONNECTION_DEFINITION,
            ConnectionUsage | AllocationUsage => &CONNECTION_USAGE,
            InterfaceDefinition => &INTERFACE_DEFINITION,
            InterfaceUsage => &INTERFACE_USAGE,
            EnumerationDefinition => &ENUMERATION_DEFINITION,

            ActionDefinition => &ACTION_DEFINITION,
            ActionUsage => &ACTION_USAGE,
            ActivityControl => &ACTIVITY_CONTROL,
            CalculationDefinition => &CALCULATION_DEFINITION,
            CalculationUsage => &CALCULATION_USAGE,
            StateDefinition => &STATE_DEFINITION,
            StateUsage => &STATE_USAGE,
            ConstraintDefinition => &CONSTRAINT_DEFINITION,
            ConstraintUsage => &CONSTRAINT_USAGE,

            RequirementDefinition => &REQUIREMENT_DEFINITION,
            RequirementUsage => &REQUIREMENT_USAGE,
            ConcernDefinition => &CONCERN_DEFINITION,
            UseCaseDefinition | UseCaseUsage => &USE_CASE,
            AnalysisCaseDefinition | AnalysisCaseUsage => &ANALYSIS_CASE,
            VerificationCaseDefinition | VerificationCaseUsage => &VERIFICATION_CASE,

            Interaction => &INTERACTION,
            ViewDefinition => &VIEW_DEFINITION,
            ViewUsage => &VIEW_USAGE,
            ViewpointDefinition => &VIEWPOINT_DEFINITION,
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================
//
// Compartment order: text first, then inputs/outputs, then structural
// children, then nested behavior.

static PLAIN: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[],
};

static PART_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::attributes, b::ports, b::parts, b::items, b::actions, b::states],
};

static PART_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::attributes, b::ports, b::parts, b::items, b::actions, b::states],
};

static ATTRIBUTED_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::attributes],
};

static ATTRIBUTED_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::attributes],
};

static PORT_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::attributes, b::items, b::ports],
};

static PORT_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::attributes, b::items],
};

static ITEM_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::attributes, b::parts],
};

static ITEM_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::attributes, b::parts],
};

static CONNECTION_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::ends, b::attributes],
};

static CONNECTION_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::ends, b::attributes],
};

static INTERFACE_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::ends, b::ports, b::attributes],
};

static INTERFACE_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::ends, b::ports, b::attributes],
};

static ENUMERATION_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::literals],
};

static ACTION_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::inputs, b::outputs, b::actions],
};

static ACTION_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::inputs, b::outputs, b::actions],
};

static ACTIVITY_CONTROL: KindConfig = KindConfig {
    mappers: &[control_type],
    compartments: &[],
};

static CALCULATION_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::inputs, b::outputs, b::result],
};

static CALCULATION_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::inputs, b::outputs, b::result],
};

static STATE_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::state_actions, b::states],
};

static STATE_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::state_actions, b::states],
};

static CONSTRAINT_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::constraint, b::inputs],
};

static CONSTRAINT_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::constraint],
};

static REQUIREMENT_DEFINITION: KindConfig = KindConfig {
    mappers: &[requirement_status],
    compartments: &[b::text, b::subject, b::stakeholders, b::constraints, b::attributes],
};

static REQUIREMENT_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references, requirement_status],
    compartments: &[b::text, b::subject, b::constraints, b::attributes],
};

static CONCERN_DEFINITION: KindConfig = KindConfig {
    mappers: &[requirement_status],
    compartments: &[b::text, b::stakeholders],
};

static USE_CASE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::objective, b::subject, b::actors, b::actions],
};

static ANALYSIS_CASE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::objective, b::subject, b::inputs, b::outputs, b::result],
};

static VERIFICATION_CASE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::objective, b::subject, b::verifies],
};

static INTERACTION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::participants],
};

static VIEW_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::exposes, b::filters],
};

static VIEW_USAGE: KindConfig = KindConfig {
    mappers: &[usage_references],
    compartments: &[b::exposes, b::filters],
};

static VIEWPOINT_DEFINITION: KindConfig = KindConfig {
    mappers: &[],
    compartments: &[b::stakeholders, b::concerns],
};

// ============================================================================
// MAPPERS
// ============================================================================

/// `definition` → `base_definition`, plus `redefines` and `subsets`.
///
/// Harmless on definition kinds that share a table entry with their usage:
/// they simply carry none of these attributes.
fn usage_references(element: &Element, node: &mut ViewNode) {
    if let Some(definition) = element.property("definition") {
        match definition.as_str() {
            Some(name) => node.base_definition = Some(name.to_string()),
            None => tracing::warn!(id = %element.id, "ignoring non-text 'definition'"),
        }
    }
    node.redefines = name_list(element, "redefines");
    node.subsets = name_list(element, "subsets");
}

/// `controlType` (fork, join, decision, ...) doubles as the stereotype.
fn control_type(element: &Element, node: &mut ViewNode) {
    if let Some(control) = element.property("controlType").and_then(PropertyValue::as_str) {
        node.stereotype = Some(control.to_string());
        node.control_type = Some(control.to_string());
    }
}

fn requirement_status(element: &Element, node: &mut ViewNode) {
    if let Some(status) = element.property("status").and_then(PropertyValue::as_str) {
        node.status = Some(status.to_string());
    }
}

/// A name or list of names. Non-text entries are skipped.
fn name_list(element: &Element, key: &str) -> Vec<String> {
    match element.property(key) {
        None => Vec::new(),
        Some(PropertyValue::String(name)) => vec![name.clone()],
        Some(PropertyValue::List(items)) => items
            .iter()
            .filter_map(|item| {
                let name = item.as_str();
                if name.is_none() {
                    tracing::warn!(id = %element.id, key, "skipping non-text reference");
                }
                name.map(str::to_string)
            })
            .collect(),
        Some(_) => {
            tracing::warn!(id = %element.id, key, "ignoring malformed reference list");
            Vec::new()
        }
    }
}
