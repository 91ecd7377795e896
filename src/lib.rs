//! # syster-views
//!
//! Viewpoint-driven materialization of SysML v2 models into diagram views.
//!
//! Takes a model snapshot (elements and relationships) and a viewpoint and
//! produces typed, positioned view nodes and styled view edges. Persistence,
//! transport and rendering live elsewhere.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! materialize  → Materializer, View, PositionStore
//!   ↓
//! viewpoint    → Viewpoint filters, built-in registry
//!   ↓
//! projection   → NodeProjector, project_edge, per-kind config, grid layout
//!   ↓
//! compartments → Compartment builders, parameter inheritance
//!   ↓
//! kinds        → NodeKind / EdgeKind, shapes, accents, edge styles
//!   ↓
//! model        → Element, Relationship, Model, ModelSource
//! ```
//!
//! ## Example
//!
//! ```rust
//! use syster_views::{Model, NoPositions, materialize, viewpoint_by_id};
//!
//! let model = Model::from_json(r#"{
//!     "nodes": [
//!         {"id": "v", "kind": "part-definition", "name": "Vehicle"},
//!         {"id": "e", "kind": "part-definition", "name": "Engine"},
//!         {"id": "drive", "kind": "action-definition"}
//!     ],
//!     "relationships": [
//!         {"id": "r", "type": "composition", "source": "v", "target": "e"}
//!     ]
//! }"#).unwrap();
//!
//! let viewpoint = viewpoint_by_id("structural-definition");
//! let view = materialize(&model, viewpoint, &NoPositions).unwrap();
//!
//! assert_eq!(view.nodes.len(), 2);
//! assert_eq!(view.edges[0].label, "Composition");
//! ```

// ============================================================================
// MODULES (dependency order: model → kinds → compartments → projection → viewpoint → materialize)
// ============================================================================

/// Error types
pub mod error;

/// Model snapshot: elements, relationships, sources
pub mod model;

/// Node and edge kind registry
pub mod kinds;

/// Compartment synthesis and parameter inheritance
pub mod compartments;

/// Element and relationship projection
pub mod projection;

/// Viewpoints and the built-in registry
pub mod viewpoint;

/// Materialization options
pub mod options;

mod materialize;

// Re-export the entry points
pub use error::{CompartmentError, KindError, MaterializeError, ModelError, Result};
pub use kinds::{EdgeKind, NodeKind, ShapeFamily};
pub use materialize::{Materializer, NoPositions, PositionStore, View, materialize};
pub use model::{Element, ElementId, JsonModelSource, Model, ModelSource, Relationship};
pub use options::MaterializeOptions;
pub use projection::{GridLayout, Position, ViewEdge, ViewNode, project_edge, project_node};
pub use viewpoint::{Viewpoint, builtin_viewpoints, viewpoint_by_id};
