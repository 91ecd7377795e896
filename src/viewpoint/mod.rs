//! Viewpoints: named allow-lists over node and edge kinds.
//!
//! A viewpoint selects which parts of a model a view shows. Node selection
//! always goes through `include_node_kinds`; edge selection only filters by
//! kind when `include_edge_kinds` is set. `None` there means "every edge
//! kind", not "no edges".

mod registry;

pub use registry::{builtin_viewpoints, viewpoint_by_id};

use std::fmt;
use std::sync::Arc;

use crate::kinds::{EdgeKind, NodeKind};
use crate::model::{Element, Relationship};

/// A predicate over model elements or relationships.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A named subset of node and edge kinds, plus optional predicates.
#[derive(Clone)]
pub struct Viewpoint {
    pub id: String,
    pub name: String,
    pub description: String,
    pub include_node_kinds: Vec<NodeKind>,
    /// `None` disables kind-based edge filtering.
    pub include_edge_kinds: Option<Vec<EdgeKind>>,
    pub node_filter: Option<Predicate<Element>>,
    pub relationship_filter: Option<Predicate<Relationship>>,
}

impl Viewpoint {
    /// Create a viewpoint showing `include_node_kinds` and every edge kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>, include_node_kinds: &[NodeKind]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            include_node_kinds: include_node_kinds.to_vec(),
            include_edge_kinds: None,
            node_filter: None,
            relationship_filter: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Restrict edges to `kinds`. An empty slice hides every edge.
    pub fn with_edge_kinds(mut self, kinds: &[EdgeKind]) -> Self {
        self.include_edge_kinds = Some(kinds.to_vec());
        self
    }

    pub fn with_node_filter(mut self, filter: impl Fn(&Element) -> bool + Send + Sync + 'static) -> Self {
        self.node_filter = Some(Arc::new(filter));
        self
    }

    pub fn with_relationship_filter(
        mut self,
        filter: impl Fn(&Relationship) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.relationship_filter = Some(Arc::new(filter));
        self
    }

    /// Whether `element` belongs in a view of this viewpoint.
    ///
    /// # Example
    /// ```rust
    /// use syster_views::kinds::NodeKind;
    /// use syster_views::model::Element;
    /// use syster_views::viewpoint::Viewpoint;
    ///
    /// let viewpoint = Viewpoint::new("parts", "Parts", &[NodeKind::PartDefinition])
    ///     .with_node_filter(|e| e.name.as_deref() != Some("Hidden"));
    ///
    /// assert!(viewpoint.accepts_node(&Element::new("a", "part-definition")));
    /// assert!(!viewpoint.accepts_node(&Element::new("b", "action-definition")));
    /// assert!(!viewpoint.accepts_node(
    ///     &Element::new("c", "part-definition").with_name("Hidden")
    /// ));
    /// ```
    pub fn accepts_node(&self, element: &Element) -> bool {
        let kind_included = self
            .include_node_kinds
            .iter()
            .any(|kind| kind.as_str() == element.kind);
        kind_included && self.node_filter.as_ref().is_none_or(|filter| filter(element))
    }

    /// Whether `relationship` belongs in a view of this viewpoint.
    ///
    /// Endpoints are not consulted.
    pub fn accepts_relationship(&self, relationship: &Relationship) -> bool {
        let kind_included = self.include_edge_kinds.as_ref().is_none_or(|kinds| {
            kinds.iter().any(|kind| kind.as_str() == relationship.kind)
        });
        kind_included
            && self
                .relationship_filter
                .as_ref()
                .is_none_or(|filter| filter(relationship))
    }
}

impl fmt::Debug for Viewpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewpoint")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("include_node_kinds", &self.include_node_kinds)
            .field("include_edge_kinds", &self.include_edge_kinds)
            .field("node_filter", &self.node_filter.is_some())
            .field("relationship_filter", &self.relationship_filter.is_some())
            .finish()
    }
}
