//! Error propagation and per-node recovery.

use crate::helpers::model_fixtures::*;
use crate::helpers::view_assertions::*;
use serde_json::json;
use syster_views::{
    JsonModelSource, MaterializeError, Materializer, ModelError, NoPositions, NodeKind, Viewpoint,
    materialize,
};

#[test]
fn test_unknown_node_kind_fails_the_call() {
    let model = model(json!({
        "nodes": [
            {"id": "ok", "kind": "package"},
            {"id": "bad", "kind": "bogus-kind"}
        ]
    }));

    let err = materialize(&model, None, &NoPositions).unwrap_err();
    assert!(matches!(
        err,
        MaterializeError::UnknownNodeKind { ref id, ref kind }
            if id.as_str() == "bad" && kind == "bogus-kind"
    ));
    assert_eq!(
        err.to_string(),
        "unknown node kind 'bogus-kind' on element bad"
    );
}

#[test]
fn test_unknown_kind_outside_viewpoint_is_not_projected() {
    let model = model(json!({
        "nodes": [
            {"id": "ok", "kind": "package"},
            {"id": "bad", "kind": "bogus-kind"}
        ]
    }));
    let viewpoint = Viewpoint::new("packages", "Packages", &[NodeKind::Package]);

    let view = materialize(&model, Some(&viewpoint), &NoPositions).unwrap();
    assert_eq!(node_ids(&view), vec!["ok"]);
}

#[test]
fn test_malformed_compartment_keeps_the_node() {
    let model = model(json!({
        "nodes": [
            {"id": "p", "kind": "part-definition", "name": "Vehicle",
             "properties": {
                 "attributes": 42,
                 "parts": [{"name": "engine", "type": "Engine"}]
             }},
            {"id": "q", "kind": "part-definition", "name": "Trailer"}
        ]
    }));

    let view = materialize(&model, None, &NoPositions).unwrap();
    assert_eq!(view.nodes.len(), 2);
    assert_eq!(compartment_titles(&view, "p"), vec!["parts"]);
    assert_eq!(
        view.node("p").unwrap().compartments[0].items[0].value.as_deref(),
        Some("Engine")
    );
}

#[test]
fn test_unknown_viewpoint_id() {
    let err = Materializer::default()
        .materialize_from(&mixed_structure(), Some("everything"), &NoPositions)
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown viewpoint: everything");
}

#[test]
fn test_source_errors_propagate() {
    let duplicate = JsonModelSource::new(
        r#"{"nodes": [{"id": "a", "kind": "package"}, {"id": "a", "kind": "package"}]}"#,
    );
    let err = Materializer::default()
        .materialize_from(&duplicate, None, &NoPositions)
        .unwrap_err();
    assert!(matches!(err, MaterializeError::Model(ModelError::DuplicateId(_))));

    let broken = JsonModelSource::new("{not json");
    let err = Materializer::default()
        .materialize_from(&broken, None, &NoPositions)
        .unwrap_err();
    assert!(matches!(err, MaterializeError::Model(ModelError::Json(_))));
}
