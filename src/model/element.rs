//! Element and relationship records as handed over by the graph store.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// IDs
// ============================================================================

/// Unique identifier for a model element or relationship.
///
/// Stable for the element's lifetime and globally unique within a model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub Arc<str>);

impl ElementId {
    /// Create a new element ID.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// PROPERTY VALUES
// ============================================================================

/// Ordered attributes of an element (`attributes`, `parameters`, ...).
pub type Properties = IndexMap<String, PropertyValue>;

/// A dynamically shaped attribute value.
///
/// Deserializes from plain JSON so records from the graph store load without
/// an intermediate schema. Shape checks happen in the compartment builders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// JSON `null`.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// Integer value.
    Integer(i64),
    /// Floating-point value.
    Real(f64),
    /// String value.
    String(String),
    /// List of values.
    List(Vec<PropertyValue>),
    /// Nested record.
    Map(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The list payload, if this is a list.
    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The record payload, if this is a map.
    pub fn as_map(&self) -> Option<&IndexMap<String, PropertyValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// True for `null` and for empty strings, lists and maps.
    ///
    /// Absent and empty are equivalent for display purposes.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Boolean(_) | Self::Integer(_) | Self::Real(_) => false,
        }
    }

    /// Render a scalar for display. Lists and maps have no inline form.
    pub fn display_scalar(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Real(f) => Some(f.to_string()),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A model element (graph node).
///
/// `kind` is kept as the raw string from the store so that kinds outside the
/// closed enumeration stay representable and are rejected at projection time
/// rather than at load time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Kind identifier, e.g. `part-definition`.
    pub kind: String,
    /// Declared name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Explicit stereotype. Absent means the renderer shows the kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereotype: Option<String>,
    /// Documentation text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kind-specific attributes.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,
    /// Compartments already materialized elsewhere; these win over derivation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartments: Option<Vec<crate::compartments::Compartment>>,
}

impl Element {
    /// Create a new element with the given ID and kind.
    pub fn new(id: impl Into<ElementId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: None,
            stereotype: None,
            description: None,
            properties: Properties::new(),
            compartments: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_stereotype(mut self, stereotype: impl Into<String>) -> Self {
        self.stereotype = Some(stereotype.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set one attribute.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Attach precomputed compartments.
    pub fn with_compartments(mut self, compartments: Vec<crate::compartments::Compartment>) -> Self {
        self.compartments = Some(compartments);
        self
    }

    /// Look up an attribute, treating empty values as absent.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key).filter(|v| !v.is_empty())
    }
}

// ============================================================================
// RELATIONSHIP
// ============================================================================

/// A typed edge between two elements.
///
/// Decorations are kept exactly as stored: an empty `guard` is distinct from
/// an absent one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Unique identifier.
    pub id: ElementId,
    /// Edge kind identifier, e.g. `satisfy`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Source element.
    pub source: ElementId,
    /// Target element.
    pub target: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Any further stored properties.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,
}

impl Relationship {
    /// Create a relationship of `kind` from `source` to `target`.
    pub fn new(
        id: impl Into<ElementId>,
        kind: impl Into<String>,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            source: source.into(),
            target: target.into(),
            label: None,
            trigger: None,
            guard: None,
            effect: None,
            rationale: None,
            properties: Properties::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    pub fn with_guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}
