//! Error types for view materialization.
//!
//! Structural errors ([`MaterializeError`], [`KindError`]) propagate to the
//! caller. Data-quality errors ([`CompartmentError`]) are recovered per node
//! by the compartment synthesizer and only surface in logs.

use thiserror::Error;

use crate::model::ElementId;

/// A kind identifier that is not part of the closed kind enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    /// The string does not name any known node or edge kind.
    #[error("kind not found: {kind}")]
    NotFound { kind: String },
}

impl KindError {
    /// Create a not-found error for `kind`.
    pub fn not_found(kind: impl Into<String>) -> Self {
        Self::NotFound { kind: kind.into() }
    }
}

/// Errors that abort a projection or materialization call.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// A node's kind has no entry in the per-kind configuration table.
    #[error("unknown node kind '{kind}' on element {id}")]
    UnknownNodeKind { id: ElementId, kind: String },

    /// A relationship's type is not a known edge kind.
    #[error("unknown edge kind '{kind}' on relationship {id}")]
    UnknownEdgeKind { id: ElementId, kind: String },

    /// A viewpoint id that the built-in registry does not know.
    #[error("unknown viewpoint: {0}")]
    UnknownViewpoint(String),

    /// The model source failed to produce a model.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A compartment builder received an attribute of the wrong shape.
///
/// Never escapes the synthesizer: the affected compartment is omitted and
/// the rest of the node still projects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompartmentError {
    #[error("malformed '{field}': {message}")]
    Malformed {
        field: &'static str,
        message: String,
    },
}

impl CompartmentError {
    /// Create a malformed-input error for the attribute `field`.
    pub fn malformed(field: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            message: message.into(),
        }
    }
}

/// Errors raised while loading or validating an input model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two elements share the same id.
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),
}

/// Result alias for materialization calls.
pub type Result<T, E = MaterializeError> = std::result::Result<T, E>;
