//! Fallback grid placement, stored positions and determinism.

use crate::helpers::model_fixtures::*;
use rstest::rstest;
use rustc_hash::FxHashMap;
use serde_json::json;
use syster_views::{
    ElementId, GridLayout, MaterializeOptions, Materializer, NoPositions, NodeKind, Position,
    Viewpoint, materialize,
};

fn four_packages() -> syster_views::Model {
    model(json!({
        "nodes": [
            {"id": "A", "kind": "package"},
            {"id": "B", "kind": "package"},
            {"id": "C", "kind": "package"},
            {"id": "D", "kind": "package"}
        ]
    }))
}

#[rstest]
#[case("A", 0.0, 0.0)]
#[case("B", 320.0, 0.0)]
#[case("C", 640.0, 0.0)]
#[case("D", 0.0, 260.0)]
fn test_grid_fallback(#[case] id: &str, #[case] x: f64, #[case] y: f64) {
    let view = materialize(&four_packages(), None, &NoPositions).unwrap();
    assert_eq!(view.node(id).unwrap().position, Position::new(x, y));
}

#[test]
fn test_stored_position_still_consumes_slot() {
    let mut positions: FxHashMap<ElementId, Position> = FxHashMap::default();
    positions.insert(ElementId::from("B"), Position::new(-40.0, 15.0));

    let view = materialize(&four_packages(), None, &positions).unwrap();
    assert_eq!(view.node("B").unwrap().position, Position::new(-40.0, 15.0));
    assert_eq!(view.node("C").unwrap().position, Position::new(640.0, 0.0));
}

#[test]
fn test_slots_follow_filtered_order() {
    let viewpoint = Viewpoint::new("parts", "Parts", &[NodeKind::PartDefinition]);
    let view = materialize(&mixed_structure(), Some(&viewpoint), &NoPositions).unwrap();

    let positions: Vec<_> = view.nodes.iter().map(|n| n.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0.0, 0.0),
            Position::new(320.0, 0.0),
            Position::new(640.0, 0.0)
        ]
    );
}

#[test]
fn test_custom_grid() {
    let options = MaterializeOptions::default().with_grid(GridLayout {
        columns: 2,
        column_spacing: 100.0,
        row_spacing: 50.0,
    });
    let view = Materializer::new(options)
        .materialize(&four_packages(), None, &NoPositions)
        .unwrap();
    assert_eq!(view.node("D").unwrap().position, Position::new(100.0, 50.0));
}

#[test]
fn test_deterministic() {
    let model = state_machine();
    let first = materialize(&model, None, &NoPositions).unwrap();
    let second = materialize(&model, None, &NoPositions).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_moving_one_node_changes_only_that_node() {
    let model = mixed_structure();
    let mut positions: FxHashMap<ElementId, Position> = FxHashMap::default();
    let before = materialize(&model, None, &positions).unwrap();

    positions.insert(ElementId::from("engine"), Position::new(12.0, 34.0));
    let after = materialize(&model, None, &positions).unwrap();

    assert_eq!(before.edges, after.edges);
    for (old, new) in before.nodes.iter().zip(&after.nodes) {
        if old.id.as_str() == "engine" {
            assert_eq!(new.position, Position::new(12.0, 34.0));
            let mut moved_back = new.clone();
            moved_back.position = old.position;
            assert_eq!(&moved_back, old);
        } else {
            assert_eq!(old, new);
        }
    }
}
