//! Projection tests
//!
//! Single-element and single-relationship projection through the public
//! API, without a viewpoint.

pub mod tests_edges;
pub mod tests_kinds;
pub mod tests_nodes;
