//! Materialization options.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::projection::GridLayout;

/// Tunables for a [`Materializer`](crate::Materializer).
///
/// Every field has a default, so `{}` is a valid options document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterializeOptions {
    /// Fallback placement for nodes without a stored position.
    pub grid: GridLayout,
    /// Merge definition parameters into action and calculation usages.
    pub inherit_parameters: bool,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            grid: GridLayout::default(),
            inherit_parameters: true,
        }
    }
}

impl MaterializeOptions {
    /// Parse options from JSON, filling missing fields with defaults.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_grid(mut self, grid: GridLayout) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_inherit_parameters(mut self, inherit: bool) -> Self {
        self.inherit_parameters = inherit;
        self
    }
}
