//! Compartment synthesis: titled groups of rows shown inside a node.
//!
//! Each kind has an ordered list of [`Builder`]s (see
//! [`crate::projection::KindConfig`]). A builder looks at one facet of the
//! element's properties and yields zero or one compartment. The synthesizer runs
//! them in order, drops empty results, and recovers from malformed input by
//! dropping only the affected compartment:
//!
//! ```text
//! props ──▶ [text] [inputs] [outputs] [attributes] [parts] [actions] ...
//!            │       │        ✗          │          ∅        │
//!            ▼       ▼                   ▼                   ▼
//!          Vec<Compartment> (fixed per-kind order, ∅ and ✗ skipped)
//! ```

pub mod builders;
mod parameters;

pub use builders::{BuildInput, BuildResult, Builder};
pub use parameters::{Direction, Parameter, merge_parameters};

use serde::{Deserialize, Serialize};

use crate::kinds::NodeKind;
use crate::model::Properties;
use crate::projection::KindConfig;

/// Display weight of a compartment row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Highlighted, e.g. requirement text.
    Strong,
    /// De-emphasized, e.g. inherited parameters.
    Muted,
}

/// One label/value row inside a compartment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompartmentItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    /// Set only on parameter rows of kinds that inherit parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
}

impl CompartmentItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            emphasis: None,
            inherited: None,
        }
    }

    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = Some(emphasis);
        self
    }
}

/// A titled group of rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compartment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<CompartmentItem>,
}

impl Compartment {
    pub fn new(title: impl Into<String>, items: Vec<CompartmentItem>) -> Self {
        Self {
            title: Some(title.into()),
            items,
        }
    }

    /// A compartment with `items`, or `None` when there are no items.
    pub fn non_empty(title: impl Into<String>, items: Vec<CompartmentItem>) -> Option<Self> {
        (!items.is_empty()).then(|| Self::new(title, items))
    }
}

/// Run `builders` in order and collect their compartments.
///
/// Malformed input drops that one compartment and logs a warning.
pub fn synthesize(builders: &[Builder], input: &BuildInput<'_>) -> Vec<Compartment> {
    builders
        .iter()
        .filter_map(|build| match build(input) {
            Ok(compartment) => compartment,
            Err(err) => {
                tracing::warn!(error = %err, "dropping malformed compartment");
                None
            }
        })
        .collect()
}

/// Build the compartments of a `kind` from its properties alone.
///
/// No inheritance is applied here; the node projector supplies merged
/// parameters through [`BuildInput::with_parameters`] when a model is at hand.
pub fn build_compartments(kind: NodeKind, properties: &Properties) -> Vec<Compartment> {
    let input = BuildInput::new(properties);
    synthesize(KindConfig::of(kind).compartments, &input)
}
