//! Edge projection: labels, styles and decorations.

use crate::helpers::model_fixtures::*;
use rstest::rstest;
use syster_views::kinds::{LineStyle, Marker};
use syster_views::{EdgeKind, NoPositions, Relationship, materialize, project_edge};

#[test]
fn test_transition_decorations() {
    let view = materialize(&state_machine(), None, &NoPositions).unwrap();

    let t1 = &view.edges[0];
    assert_eq!(t1.label, "Transition");
    assert_eq!(t1.trigger.as_deref(), Some("switchOn"));
    assert_eq!(t1.guard.as_deref(), Some(""));
    assert_eq!(t1.effect.as_deref(), Some("beep"));

    let t2 = &view.edges[1];
    assert_eq!(t2.label, "timeout");
    assert_eq!(t2.guard, None);
    assert_eq!(t2.trigger, None);
}

#[test]
fn test_rationale_passes_through() {
    let edge = project_edge(
        &Relationship::new("s", "satisfy", "part", "req").with_rationale("Sized for the load case."),
    )
    .unwrap();
    assert_eq!(edge.rationale.as_deref(), Some("Sized for the load case."));
    assert_eq!(edge.kind, EdgeKind::Satisfy);
}

#[rstest]
#[case("specialization", LineStyle::Solid, Marker::None, Marker::HollowTriangle)]
#[case("composition", LineStyle::Solid, Marker::FilledDiamond, Marker::None)]
#[case("satisfy", LineStyle::Dashed, Marker::None, Marker::OpenArrow)]
#[case("succession", LineStyle::Solid, Marker::None, Marker::FilledArrow)]
#[case("annotate", LineStyle::Dotted, Marker::None, Marker::None)]
fn test_edge_style(
    #[case] kind: &str,
    #[case] line: LineStyle,
    #[case] source: Marker,
    #[case] target: Marker,
) {
    let style = project_edge(&Relationship::new("e", kind, "a", "b")).unwrap().style;
    assert_eq!(style.line, line);
    assert_eq!(style.source_marker, source);
    assert_eq!(style.target_marker, target);
}

#[test]
fn test_every_edge_kind_projects() {
    for kind in EdgeKind::ALL {
        let edge = project_edge(&Relationship::new("e", kind.as_str(), "a", "b")).unwrap();
        assert!(!edge.label.is_empty(), "{kind}");
        assert!(!edge.label.contains('-'), "{kind}");
    }
}
