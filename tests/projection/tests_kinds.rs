//! Kind registry lookups through the public API.

use rstest::rstest;
use syster_views::kinds::{is_definition_kind, shape_for};
use syster_views::{Element, NodeKind, ShapeFamily, project_node};

#[rstest]
#[case("library-package", ShapeFamily::Package)]
#[case("action-usage", ShapeFamily::Usage)]
#[case("state-usage", ShapeFamily::State)]
#[case("concern-definition", ShapeFamily::Requirement)]
#[case("actor", ShapeFamily::Actor)]
#[case("interaction", ShapeFamily::Frame)]
#[case("lifeline", ShapeFamily::Lifeline)]
fn test_shape_for(#[case] kind: &str, #[case] expected: ShapeFamily) {
    assert_eq!(shape_for(kind).unwrap(), expected);
    assert_eq!(project_node(&Element::new("n", kind), None).unwrap().shape, expected);
}

#[test]
fn test_every_node_kind_projects_from_empty_properties() {
    for kind in NodeKind::ALL {
        let node = project_node(&Element::new("n", kind.as_str()), None).unwrap();
        assert_eq!(node.kind, *kind);
        assert_eq!(node.is_sharp(), is_definition_kind(kind.as_str()), "{kind}");
        assert!(!node.show_compartments, "{kind}");
    }
}
