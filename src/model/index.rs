//! Borrowed lookup index over a [`Model`].

use rustc_hash::FxHashMap;

use super::{Element, ElementId, Model, Relationship};
use crate::kinds::EdgeKind;

/// Id lookups over a model snapshot.
///
/// Built once per materialization call and dropped with it; holds only
/// shared borrows, so concurrent calls over the same model never interfere.
#[derive(Debug)]
pub struct ModelIndex<'m> {
    elements: FxHashMap<&'m str, &'m Element>,
    definitions: FxHashMap<&'m str, &'m Relationship>,
}

impl<'m> ModelIndex<'m> {
    pub fn new(model: &'m Model) -> Self {
        let mut elements = FxHashMap::default();
        for element in &model.nodes {
            // First occurrence wins if ids collide.
            elements.entry(element.id.as_str()).or_insert(element);
        }

        let mut definitions = FxHashMap::default();
        for rel in &model.relationships {
            if rel.kind == EdgeKind::Definition.as_str() {
                definitions.entry(rel.source.as_str()).or_insert(rel);
            }
        }

        Self {
            elements,
            definitions,
        }
    }

    /// Get an element by id.
    pub fn get(&self, id: &str) -> Option<&'m Element> {
        self.elements.get(id).copied()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id.as_str())
    }

    /// The definition a usage is typed by, via its first `definition`
    /// relationship.
    ///
    /// Returns `None` when the usage has no such relationship or when the
    /// relationship points at an element that is not in the model.
    pub fn definition_of(&self, usage: &ElementId) -> Option<&'m Element> {
        let rel = self.definitions.get(usage.as_str())?;
        let definition = self.get(rel.target.as_str());
        if definition.is_none() {
            tracing::trace!(
                usage = %usage,
                target = %rel.target,
                "definition relationship points outside the model"
            );
        }
        definition
    }
}
