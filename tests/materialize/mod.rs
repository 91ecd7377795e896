//! Materializer tests
//!
//! End-to-end behavior of `materialize`:
//! - Viewpoint node and edge selection
//! - Grid fallback and stored positions
//! - Parameter inheritance across a model
//! - Error propagation and recovery

pub mod tests_errors;
pub mod tests_filtering;
pub mod tests_layout;
