//! Viewpoint filtering and view materialization.
//!
//! ```text
//! Model ──▶ Viewpoint::accepts_node ──▶ NodeProjector::project(slot i) ──▶ View.nodes
//!       └─▶ Viewpoint::accepts_relationship ──▶ project_edge ──────────▶ View.edges
//! ```
//!
//! Output order follows input order, so grid fallback positions are stable
//! for a given model and viewpoint.

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::{MaterializeError, Result};
use crate::model::{ElementId, Model, ModelSource};
use crate::options::MaterializeOptions;
use crate::projection::{NodeProjector, Position, ViewEdge, ViewNode, project_edge};
use crate::viewpoint::{Viewpoint, viewpoint_by_id};

// ============================================================================
// POSITIONS
// ============================================================================

/// Stored positions, keyed by element id.
pub trait PositionStore {
    fn position(&self, id: &ElementId) -> Option<Position>;
}

/// No stored positions; every node lands on the fallback grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPositions;

impl PositionStore for NoPositions {
    fn position(&self, _id: &ElementId) -> Option<Position> {
        None
    }
}

// Covers `FxHashMap` as well.
impl<S: BuildHasher> PositionStore for HashMap<ElementId, Position, S> {
    fn position(&self, id: &ElementId) -> Option<Position> {
        self.get(id).copied()
    }
}

impl<S: BuildHasher> PositionStore for IndexMap<ElementId, Position, S> {
    fn position(&self, id: &ElementId) -> Option<Position> {
        self.get(id).copied()
    }
}

// ============================================================================
// VIEW
// ============================================================================

/// A materialized view.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct View {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
}

impl View {
    pub fn node(&self, id: &str) -> Option<&ViewNode> {
        self.nodes.iter().find(|node| node.id.as_str() == id)
    }

    /// Edges whose source and target are both nodes of this view.
    ///
    /// [`Materializer::materialize`] never prunes edges itself; this is for
    /// renderers that do not want dangling edges.
    pub fn edges_with_visible_endpoints(&self) -> Vec<&ViewEdge> {
        let visible: FxHashSet<&ElementId> = self.nodes.iter().map(|node| &node.id).collect();
        self.edges
            .iter()
            .filter(|edge| visible.contains(&edge.source) && visible.contains(&edge.target))
            .collect()
    }
}

// ============================================================================
// MATERIALIZER
// ============================================================================

/// Turns a model and a viewpoint into a [`View`].
///
/// Stateless apart from its options; safe to share and call concurrently.
#[derive(Clone, Debug, Default)]
pub struct Materializer {
    options: MaterializeOptions,
}

impl Materializer {
    pub fn new(options: MaterializeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MaterializeOptions {
        &self.options
    }

    /// Materialize `model` through `viewpoint`.
    ///
    /// With no viewpoint every node and relationship is projected. An
    /// element or relationship of unknown kind fails the whole call.
    pub fn materialize<P>(
        &self,
        model: &Model,
        viewpoint: Option<&Viewpoint>,
        positions: &P,
    ) -> Result<View>
    where
        P: PositionStore + ?Sized,
    {
        let projector = NodeProjector::new(model, &self.options);

        let nodes = model
            .nodes
            .iter()
            .filter(|element| viewpoint.is_none_or(|vp| vp.accepts_node(element)))
            .enumerate()
            .map(|(slot, element)| projector.project(element, slot, positions.position(&element.id)))
            .collect::<Result<Vec<_>>>()?;

        let edges = model
            .relationships
            .iter()
            .filter(|rel| viewpoint.is_none_or(|vp| vp.accepts_relationship(rel)))
            .map(project_edge)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            viewpoint = viewpoint.map(|vp| vp.id.as_str()),
            nodes = nodes.len(),
            edges = edges.len(),
            "materialized view"
        );

        Ok(View { nodes, edges })
    }

    /// Load a model from `source` and materialize it through the built-in
    /// viewpoint `viewpoint_id`.
    pub fn materialize_from<S, P>(
        &self,
        source: &S,
        viewpoint_id: Option<&str>,
        positions: &P,
    ) -> Result<View>
    where
        S: ModelSource + ?Sized,
        P: PositionStore + ?Sized,
    {
        let viewpoint = match viewpoint_id {
            Some(id) => Some(
                viewpoint_by_id(id).ok_or_else(|| MaterializeError::UnknownViewpoint(id.to_string()))?,
            ),
            None => None,
        };

        let model = source.load(viewpoint_id)?;
        self.materialize(&model, viewpoint, positions)
    }
}

/// Materialize with default options.
pub fn materialize<P>(model: &Model, viewpoint: Option<&Viewpoint>, positions: &P) -> Result<View>
where
    P: PositionStore + ?Sized,
{
    Materializer::default().materialize(model, viewpoint, positions)
}
