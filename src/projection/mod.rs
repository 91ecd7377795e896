//! Projection of model elements and relationships into view records.
//!
//! ```text
//! Element ──parse kind──▶ base fields ──mappers──▶ parameters ──builders──▶ ViewNode
//! Relationship ──parse kind──▶ label + style + decorations ──▶ ViewEdge
//! ```
//!
//! Both projections are pure: the same input always yields an equal record.

mod config;
mod edge;
mod layout;
mod node;

pub use config::{KindConfig, Mapper};
pub use edge::{ViewEdge, project_edge};
pub use layout::{GridLayout, Position};
pub use node::{NodeProjector, ViewNode, project_node};
