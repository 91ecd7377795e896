//! In-memory model snapshot consumed by the materializer.
//!
//! The graph store owns persistence; this module only describes the shape
//! of what it hands over:
//!
//! ```text
//! Model
//! ├── nodes: Vec<Element>            (input order drives grid placement)
//! └── relationships: Vec<Relationship>
//! ```
//!
//! A `Model` is an immutable snapshot from the core's point of view. Nothing
//! in this crate mutates one.

mod element;
mod index;
mod source;

pub use element::{Element, ElementId, Properties, PropertyValue, Relationship};
pub use index::ModelIndex;
pub use source::{JsonModelSource, ModelSource};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A snapshot of elements and relationships.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// All elements, in store order.
    #[serde(default)]
    pub nodes: Vec<Element>,
    /// All relationships, in store order.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a model from the store's JSON shape (`{nodes, relationships}`).
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_node(mut self, element: Element) -> Self {
        self.nodes.push(element);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Build a borrowed lookup index over this model.
    pub fn index(&self) -> ModelIndex<'_> {
        ModelIndex::new(self)
    }

    /// Check that element ids are unique.
    ///
    /// Relationships with endpoints outside the model are *not* an error;
    /// they are skipped wherever resolution is needed.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen = FxHashSet::default();
        for element in &self.nodes {
            if !seen.insert(&element.id) {
                return Err(ModelError::DuplicateId(element.id.clone()));
            }
        }
        Ok(())
    }
}
