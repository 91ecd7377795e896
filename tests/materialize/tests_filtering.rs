//! Viewpoint selection of nodes and edges.

use crate::helpers::model_fixtures::*;
use crate::helpers::view_assertions::*;
use rstest::rstest;
use syster_views::{
    EdgeKind, JsonModelSource, Materializer, NoPositions, NodeKind, Viewpoint, materialize,
    viewpoint_by_id,
};

fn parts_only() -> Viewpoint {
    Viewpoint::new("parts", "Parts", &[NodeKind::PartDefinition])
}

// =============================================================================
// NODE SELECTION
// =============================================================================

#[test]
fn test_part_definitions_only() {
    let view = materialize(&mixed_structure(), Some(&parts_only()), &NoPositions).unwrap();
    assert_eq!(node_ids(&view), vec!["vehicle", "engine", "wheel"]);
}

#[test]
fn test_node_filter_composes_with_kinds() {
    let viewpoint = parts_only().with_node_filter(|e| e.name.as_deref() != Some("Engine"));
    let view = materialize(&mixed_structure(), Some(&viewpoint), &NoPositions).unwrap();
    assert_eq!(node_ids(&view), vec!["vehicle", "wheel"]);
}

#[test]
fn test_no_viewpoint_is_unfiltered() {
    let model = mixed_structure();
    let view = materialize(&model, None, &NoPositions).unwrap();
    assert_eq!(view.nodes.len(), model.nodes.len());
    assert_eq!(view.edges.len(), model.relationships.len());
}

#[test]
fn test_empty_model() {
    let view = materialize(&model(serde_json::json!({})), Some(&parts_only()), &NoPositions)
        .unwrap();
    assert!(view.nodes.is_empty());
    assert!(view.edges.is_empty());
}

// =============================================================================
// EDGE SELECTION
// =============================================================================

#[test]
fn test_absent_edge_kinds_keeps_every_relationship() {
    let view = materialize(&mixed_structure(), Some(&parts_only()), &NoPositions).unwrap();
    // Edges touching hidden actions are candidates too.
    assert_eq!(edge_ids(&view), vec!["c1", "d1", "s1", "c2"]);
}

#[test]
fn test_empty_edge_kinds_drops_every_relationship() {
    let viewpoint = parts_only().with_edge_kinds(&[]);
    let view = materialize(&mixed_structure(), Some(&viewpoint), &NoPositions).unwrap();
    assert!(view.edges.is_empty());
    assert_eq!(view.nodes.len(), 3);
}

#[rstest]
#[case(&[EdgeKind::Composition], vec!["c1", "c2"])]
#[case(&[EdgeKind::Dependency, EdgeKind::Succession], vec!["d1", "s1"])]
#[case(&[EdgeKind::Satisfy], vec![])]
fn test_edge_kind_allow_list(#[case] kinds: &[EdgeKind], #[case] expected: Vec<&str>) {
    let viewpoint = parts_only().with_edge_kinds(kinds);
    let view = materialize(&mixed_structure(), Some(&viewpoint), &NoPositions).unwrap();
    assert_eq!(edge_ids(&view), expected);
}

#[test]
fn test_relationship_filter() {
    let viewpoint = parts_only().with_relationship_filter(|r| r.target.as_str() != "wheel");
    let view = materialize(&mixed_structure(), Some(&viewpoint), &NoPositions).unwrap();
    assert_eq!(edge_ids(&view), vec!["c1", "d1", "s1"]);
}

#[test]
fn test_visible_endpoint_pruning_is_opt_in() {
    let view = materialize(&mixed_structure(), Some(&parts_only()), &NoPositions).unwrap();
    let pruned: Vec<_> = view
        .edges_with_visible_endpoints()
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(pruned, vec!["c1", "c2"]);
    assert_eq!(view.edges.len(), 4);
}

// =============================================================================
// BUILT-IN VIEWPOINTS
// =============================================================================

#[test]
fn test_builtin_structural_definition() {
    let viewpoint = viewpoint_by_id("structural-definition").unwrap();
    let view = materialize(&mixed_structure(), Some(viewpoint), &NoPositions).unwrap();
    assert_eq!(node_ids(&view), vec!["vehicle", "engine", "wheel"]);
    assert_eq!(edge_ids(&view), vec!["c1", "d1", "c2"]);
}

#[test]
fn test_builtin_behavior_control() {
    let viewpoint = viewpoint_by_id("behavior-control").unwrap();
    let view = materialize(&mixed_structure(), Some(viewpoint), &NoPositions).unwrap();
    assert_eq!(node_ids(&view), vec!["drive", "brake"]);
    assert_eq!(edge_ids(&view), vec!["s1"]);
}

#[test]
fn test_materialize_from_json_source() {
    let source = JsonModelSource::new(
        serde_json::to_string(&serde_json::json!({
            "nodes": [
                {"id": "r1", "kind": "requirement-definition", "name": "MaxMass"},
                {"id": "p1", "kind": "part-definition", "name": "Vehicle"}
            ],
            "relationships": [
                {"id": "sat", "type": "satisfy", "source": "p1", "target": "r1"}
            ]
        }))
        .unwrap(),
    );

    let view = Materializer::default()
        .materialize_from(&source, Some("requirement"), &NoPositions)
        .unwrap();
    assert_eq!(node_ids(&view), vec!["r1"]);
    assert_eq!(edge_ids(&view), vec!["sat"]);
    assert_eq!(view.edges[0].label, "Satisfy");
}

#[test]
fn test_materialize_from_without_viewpoint() {
    let view = Materializer::default()
        .materialize_from(&mixed_structure(), None, &NoPositions)
        .unwrap();
    assert_eq!(view.nodes.len(), 5);
}
