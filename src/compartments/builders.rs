//! Per-facet compartment builders.
//!
//! Every builder has the same signature so that the per-kind configuration
//! table can hold them as plain function pointers. A builder returns
//! `Ok(None)` when its attribute is absent or empty and an error when the
//! attribute has the wrong shape.

use crate::error::CompartmentError;
use crate::model::{Properties, PropertyValue};

use super::{Compartment, CompartmentItem, Emphasis, Parameter};

/// Outcome of a single builder.
pub type BuildResult = Result<Option<Compartment>, CompartmentError>;

/// A compartment builder.
pub type Builder = fn(&BuildInput<'_>) -> BuildResult;

/// What a builder gets to look at.
#[derive(Debug)]
pub struct BuildInput<'a> {
    pub properties: &'a Properties,
    parameters: Result<Vec<Parameter>, CompartmentError>,
}

impl<'a> BuildInput<'a> {
    /// Builder input whose parameters are the element's own.
    pub fn new(properties: &'a Properties) -> Self {
        Self {
            properties,
            parameters: Parameter::list_from(properties.get("parameters")),
        }
    }

    /// Builder input with an already resolved parameter list.
    pub fn with_parameters(
        properties: &'a Properties,
        parameters: Result<Vec<Parameter>, CompartmentError>,
    ) -> Self {
        Self {
            properties,
            parameters,
        }
    }

    /// The effective parameters, or the error met while reading them.
    pub fn parameters(&self) -> Result<&[Parameter], CompartmentError> {
        self.parameters.as_deref().map_err(Clone::clone)
    }

    fn get(&self, key: &str) -> Option<&'a PropertyValue> {
        self.properties.get(key).filter(|v| !v.is_empty())
    }
}

// ============================================================================
// TEXT
// ============================================================================

pub fn text(input: &BuildInput<'_>) -> BuildResult {
    text_block(input, "text", "text", Some(Emphasis::Strong))
}

/// Constraint expression, e.g. `mass <= 2000`.
pub fn constraint(input: &BuildInput<'_>) -> BuildResult {
    text_block(input, "expression", "constraint", None)
}

pub fn objective(input: &BuildInput<'_>) -> BuildResult {
    text_block(input, "objective", "objective", None)
}

// ============================================================================
// PARAMETERS
// ============================================================================

pub fn inputs(input: &BuildInput<'_>) -> BuildResult {
    let rows = input
        .parameters()?
        .iter()
        .filter(|p| p.is_input())
        .map(parameter_row)
        .collect();
    Ok(Compartment::non_empty("inputs", rows))
}

pub fn outputs(input: &BuildInput<'_>) -> BuildResult {
    let rows = input
        .parameters()?
        .iter()
        .filter(|p| p.is_output())
        .map(parameter_row)
        .collect();
    Ok(Compartment::non_empty("outputs", rows))
}

/// Result of a calculation: a bare type name or a feature record.
pub fn result(input: &BuildInput<'_>) -> BuildResult {
    const FIELD: &str = "result";
    let Some(value) = input.get(FIELD) else {
        return Ok(None);
    };
    let row = match value {
        PropertyValue::String(type_name) => {
            CompartmentItem::new("result").with_value(Some(type_name.clone()))
        }
        PropertyValue::Map(_) => feature_row(FIELD, value)?,
        _ => return Err(CompartmentError::malformed(FIELD, "expected a type or a record")),
    };
    Ok(Some(Compartment::new("result", vec![row])))
}

fn parameter_row(parameter: &Parameter) -> CompartmentItem {
    let mut row = CompartmentItem::new(parameter.name.as_str())
        .with_value(parameter.type_name.clone());
    if parameter.inherited == Some(true) {
        row.emphasis = Some(Emphasis::Muted);
    }
    row.inherited = parameter.inherited;
    row
}

// ============================================================================
// STRUCTURE
// ============================================================================

pub fn attributes(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "attributes", "attributes", feature_row)
}

pub fn ports(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "ports", "ports", port_row)
}

pub fn parts(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "parts", "parts", feature_row)
}

pub fn items(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "items", "items", feature_row)
}

/// Connection, interface and allocation ends.
pub fn ends(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "ends", "ends", feature_row)
}

pub fn literals(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "literals", "literals", name_row)
}

// ============================================================================
// BEHAVIOR
// ============================================================================

pub fn actions(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "actions", "actions", feature_row)
}

pub fn states(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "states", "states", name_row)
}

/// `entry`, `do` and `exit` behaviors of a state, in that order.
pub fn state_actions(input: &BuildInput<'_>) -> BuildResult {
    let mut rows = Vec::new();
    for key in ["entry", "do", "exit"] {
        let Some(value) = input.get(key) else {
            continue;
        };
        let action = match value {
            PropertyValue::String(name) => name.clone(),
            PropertyValue::Map(map) => record_name("state actions", map)?.to_string(),
            _ => {
                return Err(CompartmentError::malformed(
                    "state actions",
                    format!("'{key}' is neither a name nor a record"),
                ));
            }
        };
        rows.push(CompartmentItem::new(key).with_value(Some(action)));
    }
    Ok(Compartment::non_empty("state actions", rows))
}

// ============================================================================
// REQUIREMENTS AND CASES
// ============================================================================

pub fn subject(input: &BuildInput<'_>) -> BuildResult {
    const FIELD: &str = "subject";
    let Some(value) = input.get(FIELD) else {
        return Ok(None);
    };
    Ok(Some(Compartment::new("subject", vec![feature_row(FIELD, value)?])))
}

pub fn actors(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "actors", "actors", feature_row)
}

pub fn stakeholders(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "stakeholders", "stakeholders", feature_row)
}

pub fn concerns(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "concerns", "concerns", name_row)
}

/// Assumed and required constraints of a requirement.
pub fn constraints(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "constraints", "constraints", constraint_row)
}

/// `assume` / `require` followed by the expression.
fn constraint_row(
    field: &'static str,
    value: &PropertyValue,
) -> Result<CompartmentItem, CompartmentError> {
    match value {
        PropertyValue::Map(map) => {
            let kind = map
                .get("kind")
                .and_then(PropertyValue::as_str)
                .unwrap_or("require");
            let expression = map
                .get("expression")
                .and_then(PropertyValue::display_scalar)
                .ok_or_else(|| {
                    CompartmentError::malformed(field, "constraint without an expression")
                })?;
            Ok(CompartmentItem::new(kind).with_value(Some(expression)))
        }
        PropertyValue::String(expression) => {
            Ok(CompartmentItem::new("require").with_value(Some(expression.clone())))
        }
        _ => Err(CompartmentError::malformed(
            field,
            "entry is neither an expression nor a record",
        )),
    }
}

/// Requirements verified by a verification case.
pub fn verifies(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "verifies", "verifies", name_row)
}

// ============================================================================
// INTERACTIONS AND VIEWS
// ============================================================================

pub fn participants(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "participants", "participants", feature_row)
}

pub fn exposes(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "exposes", "exposes", name_row)
}

pub fn filters(input: &BuildInput<'_>) -> BuildResult {
    rows_of(input, "filters", "filters", name_row)
}

// ============================================================================
// HELPERS
// ============================================================================

type RowFn = fn(&'static str, &PropertyValue) -> Result<CompartmentItem, CompartmentError>;

/// A compartment with one row per list entry of `field`.
fn rows_of(input: &BuildInput<'_>, field: &'static str, title: &str, row: RowFn) -> BuildResult {
    let Some(value) = input.get(field) else {
        return Ok(None);
    };
    let entries = value
        .as_list()
        .ok_or_else(|| CompartmentError::malformed(field, "expected a list"))?;
    let rows = entries
        .iter()
        .map(|entry| row(field, entry))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Compartment::non_empty(title, rows))
}

/// A single-row compartment holding a text attribute.
fn text_block(
    input: &BuildInput<'_>,
    field: &'static str,
    title: &str,
    emphasis: Option<Emphasis>,
) -> BuildResult {
    let Some(value) = input.get(field) else {
        return Ok(None);
    };
    let text = value
        .as_str()
        .ok_or_else(|| CompartmentError::malformed(field, "expected text"))?;
    let mut row = CompartmentItem::new(text);
    row.emphasis = emphasis;
    Ok(Some(Compartment::new(title, vec![row])))
}

fn record_name<'v>(
    field: &'static str,
    map: &'v indexmap::IndexMap<String, PropertyValue>,
) -> Result<&'v str, CompartmentError> {
    map.get("name")
        .and_then(PropertyValue::as_str)
        .ok_or_else(|| CompartmentError::malformed(field, "entry without a name"))
}

/// `name` alone, from a bare string or a record.
fn name_row(field: &'static str, value: &PropertyValue) -> Result<CompartmentItem, CompartmentError> {
    match value {
        PropertyValue::String(name) => Ok(CompartmentItem::new(name.as_str())),
        PropertyValue::Map(map) => Ok(CompartmentItem::new(record_name(field, map)?)),
        _ => Err(CompartmentError::malformed(field, "entry is neither a name nor a record")),
    }
}

/// `name` with a `Type[mult] = value` annotation.
fn feature_row(field: &'static str, value: &PropertyValue) -> Result<CompartmentItem, CompartmentError> {
    match value {
        PropertyValue::String(name) => Ok(CompartmentItem::new(name.as_str())),
        PropertyValue::Map(map) => {
            let name = record_name(field, map)?;
            Ok(CompartmentItem::new(name).with_value(feature_annotation(map)))
        }
        _ => Err(CompartmentError::malformed(field, "entry is neither a name nor a record")),
    }
}

/// Like [`feature_row`], with the direction in front of the name.
fn port_row(field: &'static str, value: &PropertyValue) -> Result<CompartmentItem, CompartmentError> {
    let mut row = feature_row(field, value)?;
    let direction = value
        .as_map()
        .and_then(|map| map.get("direction"))
        .and_then(PropertyValue::as_str);
    if let Some(direction) = direction {
        row.label = format!("{direction} {}", row.label);
    }
    Ok(row)
}

fn feature_annotation(map: &indexmap::IndexMap<String, PropertyValue>) -> Option<String> {
    let mut annotation = String::new();
    if let Some(type_name) = map.get("type").and_then(PropertyValue::as_str) {
        annotation.push_str(type_name);
    }
    if let Some(multiplicity) = map.get("multiplicity").and_then(PropertyValue::display_scalar) {
        annotation.push('[');
        annotation.push_str(&multiplicity);
        annotation.push(']');
    }
    if let Some(default) = map.get("value").and_then(PropertyValue::display_scalar) {
        if !annotation.is_empty() {
            annotation.push(' ');
        }
        annotation.push_str("= ");
        annotation.push_str(&default);
    }
    (!annotation.is_empty()).then_some(annotation)
}
