//! Node projection across kind families.

use crate::helpers::model_fixtures::*;
use crate::helpers::view_assertions::*;
use rstest::rstest;
use serde_json::json;
use syster_views::compartments::Emphasis;
use syster_views::kinds::ElementKindTag;
use syster_views::{NoPositions, Position, ShapeFamily, materialize, project_node};

// =============================================================================
// COMPARTMENT ORDER
// =============================================================================

#[rstest]
#[case(
    json!({"id": "n", "kind": "part-usage", "properties": {
        "actions": ["start"], "ports": ["p"], "attributes": ["mass"]
    }}),
    vec!["attributes", "ports", "actions"]
)]
#[case(
    json!({"id": "n", "kind": "requirement-usage", "properties": {
        "attributes": ["limit"],
        "constraints": [{"kind": "assume", "expression": "speed > 0"}],
        "subject": {"name": "vehicle", "type": "Vehicle"},
        "text": "Shall stop."
    }}),
    vec!["text", "subject", "constraints", "attributes"]
)]
#[case(
    json!({"id": "n", "kind": "use-case-definition", "properties": {
        "actions": ["drive"], "actors": ["driver"], "objective": "Get there."
    }}),
    vec!["objective", "actors", "actions"]
)]
#[case(
    json!({"id": "n", "kind": "calculation-definition", "properties": {
        "result": "Real", "parameters": [{"name": "m", "direction": "in"}]
    }}),
    vec!["inputs", "result"]
)]
#[case(
    json!({"id": "n", "kind": "enumeration-definition", "properties": {
        "literals": ["red", "green"]
    }}),
    vec!["literals"]
)]
#[case(
    json!({"id": "n", "kind": "interaction", "properties": {
        "participants": [{"name": "driver", "type": "Driver"}]
    }}),
    vec!["participants"]
)]
#[case(
    json!({"id": "n", "kind": "viewpoint-definition", "properties": {
        "concerns": ["safety"], "stakeholders": ["owner"]
    }}),
    vec!["stakeholders", "concerns"]
)]
fn test_compartment_order(#[case] fixture: serde_json::Value, #[case] expected: Vec<&str>) {
    let node = project_node(&element(fixture), None).unwrap();
    let titles: Vec<_> = node
        .compartments
        .iter()
        .filter_map(|c| c.title.as_deref())
        .collect();
    assert_eq!(titles, expected);
    assert!(node.show_compartments);
}

#[test]
fn test_requirement_text_is_strong() {
    let node = project_node(
        &element(json!({
            "id": "r", "kind": "requirement-definition",
            "properties": {"text": "The vehicle shall stop within 40 m.", "status": "draft"}
        })),
        None,
    )
    .unwrap();

    assert_eq!(node.status.as_deref(), Some("draft"));
    assert_eq!(node.shape, ShapeFamily::Requirement);
    assert_eq!(node.compartments[0].items[0].emphasis, Some(Emphasis::Strong));
}

#[test]
fn test_state_actions_in_fixed_order() {
    let view = materialize(&state_machine(), None, &NoPositions).unwrap();
    assert_eq!(compartment_titles(&view, "on"), vec!["state actions"]);

    let labels: Vec<_> = view.node("on").unwrap().compartments[0]
        .items
        .iter()
        .map(|i| (i.label.as_str(), i.value.as_deref()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("entry", Some("powerUp")),
            ("do", Some("run")),
            ("exit", Some("powerDown"))
        ]
    );
    assert!(!view.node("off").unwrap().show_compartments);
}

// =============================================================================
// BASE FIELDS AND MAPPERS
// =============================================================================

#[test]
fn test_explicit_stereotype_is_kept() {
    let node = project_node(
        &element(json!({"id": "p", "kind": "part-definition", "stereotype": "block"})),
        None,
    )
    .unwrap();
    assert_eq!(node.display_stereotype(), "block");
}

#[rstest]
#[case("fork")]
#[case("join")]
#[case("decision")]
fn test_control_type_promotion(#[case] control: &str) {
    let node = project_node(
        &element(json!({
            "id": "c", "kind": "activity-control",
            "properties": {"controlType": control}
        })),
        Some(Position::new(1.0, 2.0)),
    )
    .unwrap();

    assert_eq!(node.shape, ShapeFamily::Control);
    assert_eq!(node.stereotype.as_deref(), Some(control));
    assert_eq!(node.control_type.as_deref(), Some(control));
    assert_eq!(node.position, Position::new(1.0, 2.0));
}

#[test]
fn test_usage_reference_mapping() {
    let node = project_node(
        &element(json!({
            "id": "u", "kind": "port-usage",
            "properties": {"definition": "FuelPort", "subsets": "ports"}
        })),
        None,
    )
    .unwrap();

    assert_eq!(node.base_definition.as_deref(), Some("FuelPort"));
    assert_eq!(node.subsets, vec!["ports"]);
    assert!(node.redefines.is_empty());
    assert_eq!(node.element_kind, Some(ElementKindTag::Usage));
    assert!(!node.is_sharp());
}

#[test]
fn test_serialized_node_shape() {
    let node = project_node(
        &element(json!({
            "id": "p", "kind": "part-definition", "name": "Vehicle",
            "properties": {"attributes": [{"name": "mass", "type": "Real"}]}
        })),
        None,
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "id": "p",
            "kind": "part-definition",
            "shape": "definition",
            "accent": "#3b82f6",
            "name": "Vehicle",
            "elementKind": "definition",
            "compartments": [
                {"title": "attributes", "items": [{"label": "mass", "value": "Real"}]}
            ],
            "showCompartments": true,
            "position": {"x": 0.0, "y": 0.0}
        })
    );
}
