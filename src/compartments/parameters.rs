//! Parameters and the definition-to-usage inheritance merge.

use serde::{Deserialize, Serialize};

use crate::error::CompartmentError;
use crate::model::PropertyValue;

/// Flow direction of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Direction {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "inout" => Some(Self::InOut),
            _ => None,
        }
    }

    /// `in` and `inout` parameters are inputs.
    pub fn is_input(self) -> bool {
        matches!(self, Self::In | Self::InOut)
    }

    /// `out` and `inout` parameters are outputs.
    pub fn is_output(self) -> bool {
        matches!(self, Self::Out | Self::InOut)
    }
}

/// A declared parameter of an action or calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Display-only flag, set by [`merge_parameters`] and nowhere else.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, direction: Option<Direction>) -> Self {
        Self {
            name: name.into(),
            direction,
            type_name: None,
            inherited: None,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn is_input(&self) -> bool {
        self.direction.is_some_and(Direction::is_input)
    }

    pub fn is_output(&self) -> bool {
        self.direction.is_some_and(Direction::is_output)
    }

    fn tagged(&self, inherited: bool) -> Self {
        Self {
            inherited: Some(inherited),
            ..self.clone()
        }
    }

    /// Read the `parameters` attribute of an element.
    ///
    /// Absent, `null` and empty lists all yield an empty list. Entries are
    /// either bare names or records with `name`, `direction` and `type`.
    /// Any stored `inherited` flag is ignored.
    pub fn list_from(value: Option<&PropertyValue>) -> Result<Vec<Parameter>, CompartmentError> {
        const FIELD: &str = "parameters";

        let items = match value {
            None | Some(PropertyValue::Null) => return Ok(Vec::new()),
            Some(PropertyValue::List(items)) => items,
            Some(_) => return Err(CompartmentError::malformed(FIELD, "expected a list")),
        };

        items
            .iter()
            .map(|item| match item {
                PropertyValue::String(name) => Ok(Parameter::new(name.as_str(), None)),
                PropertyValue::Map(map) => {
                    let name = map
                        .get("name")
                        .and_then(PropertyValue::as_str)
                        .ok_or_else(|| CompartmentError::malformed(FIELD, "entry without a name"))?;
                    let direction = match map.get("direction") {
                        None | Some(PropertyValue::Null) => None,
                        Some(PropertyValue::String(d)) => {
                            Some(Direction::parse(d).ok_or_else(|| {
                                CompartmentError::malformed(FIELD, format!("unknown direction '{d}'"))
                            })?)
                        }
                        Some(_) => {
                            return Err(CompartmentError::malformed(FIELD, "direction is not a string"));
                        }
                    };
                    let type_name = map
                        .get("type")
                        .and_then(PropertyValue::as_str)
                        .map(str::to_string);
                    Ok(Parameter {
                        name: name.to_string(),
                        direction,
                        type_name,
                        inherited: None,
                    })
                }
                _ => Err(CompartmentError::malformed(FIELD, "entry is neither a name nor a record")),
            })
            .collect()
    }
}

/// Merge a usage's own parameters with those of its definition.
///
/// Inherited parameters are tagged `inherited: true` and come first; local
/// ones are tagged `inherited: false` and follow. An inherited parameter is
/// dropped when a local one has the same name. Only the name is compared,
/// so a local `out x` hides an inherited `in x`.
pub fn merge_parameters(local: &[Parameter], inherited: &[Parameter]) -> Vec<Parameter> {
    let survivors = inherited
        .iter()
        .filter(|p| !local.iter().any(|l| l.name == p.name))
        .map(|p| p.tagged(true));

    survivors.chain(local.iter().map(|p| p.tagged(false))).collect()
}
