//! Relationship → [`ViewEdge`] projection.

use serde::Serialize;

use crate::error::{MaterializeError, Result};
use crate::kinds::{Accent, EdgeKind, EdgeStyle};
use crate::model::{ElementId, Relationship};

/// An edge ready for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEdge {
    pub id: ElementId,
    pub kind: EdgeKind,
    pub source: ElementId,
    pub target: ElementId,
    /// The stored label, or the kind's default label when none is stored.
    pub label: String,
    pub style: EdgeStyle,
    pub accent: Accent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// Project one relationship.
///
/// Decorations are copied verbatim. Endpoints are not checked against any
/// model.
pub fn project_edge(relationship: &Relationship) -> Result<ViewEdge> {
    let kind: EdgeKind = relationship.kind.parse().map_err(|_| MaterializeError::UnknownEdgeKind {
        id: relationship.id.clone(),
        kind: relationship.kind.clone(),
    })?;

    let label = match relationship.label.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => kind.default_label(),
    };

    Ok(ViewEdge {
        id: relationship.id.clone(),
        kind,
        source: relationship.source.clone(),
        target: relationship.target.clone(),
        label,
        style: kind.style(),
        accent: kind.accent(),
        trigger: relationship.trigger.clone(),
        guard: relationship.guard.clone(),
        effect: relationship.effect.clone(),
        rationale: relationship.rationale.clone(),
    })
}
