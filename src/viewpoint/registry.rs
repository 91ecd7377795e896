//! Built-in viewpoints.

use std::sync::LazyLock;

use super::Viewpoint;
use crate::kinds::{EdgeKind, NodeKind};

static BUILTIN: LazyLock<Vec<Viewpoint>> = LazyLock::new(|| {
    use EdgeKind as E;
    use NodeKind as N;

    vec![
        Viewpoint::new(
            "structural-definition",
            "Structural Definition",
            &[
                N::Package,
                N::PartDefinition,
                N::AttributeDefinition,
                N::PortDefinition,
                N::ItemDefinition,
                N::ConnectionDefinition,
                N::InterfaceDefinition,
                N::AllocationDefinition,
                N::EnumerationDefinition,
                N::OccurrenceDefinition,
            ],
        )
        .with_description("Definitions and how they specialize and compose each other.")
        .with_edge_kinds(&[
            E::Specialization,
            E::Composition,
            E::Aggregation,
            E::Association,
            E::Containment,
            E::Conjugation,
            E::Dependency,
        ]),
        // Edge kinds left open: any relationship between usages is shown.
        Viewpoint::new(
            "usage-structure",
            "Usage Structure",
            &[
                N::PartUsage,
                N::AttributeUsage,
                N::PortUsage,
                N::ItemUsage,
                N::ConnectionUsage,
                N::InterfaceUsage,
                N::AllocationUsage,
            ],
        )
        .with_description("Usages and their connections inside a system context."),
        Viewpoint::new(
            "behavior-control",
            "Behavior / Control Flow",
            &[
                N::ActionDefinition,
                N::ActionUsage,
                N::ActivityControl,
                N::CalculationDefinition,
                N::CalculationUsage,
            ],
        )
        .with_description("Actions, control nodes and the flows between them.")
        .with_edge_kinds(&[
            E::Succession,
            E::ControlFlow,
            E::ObjectFlow,
            E::FlowConnection,
            E::Perform,
            E::Definition,
        ]),
        Viewpoint::new(
            "interaction",
            "Interaction",
            &[N::Interaction, N::Lifeline, N::Actor],
        )
        .with_description("Lifelines and the messages exchanged between them.")
        .with_edge_kinds(&[E::Message]),
        Viewpoint::new(
            "state",
            "State",
            &[N::StateDefinition, N::StateUsage],
        )
        .with_description("States and transitions.")
        .with_edge_kinds(&[E::Transition, E::Exhibit, E::Containment]),
        Viewpoint::new(
            "requirement",
            "Requirements",
            &[
                N::RequirementDefinition,
                N::RequirementUsage,
                N::ConcernDefinition,
                N::ConstraintDefinition,
                N::ConstraintUsage,
                N::UseCaseDefinition,
                N::UseCaseUsage,
                N::VerificationCaseDefinition,
                N::VerificationCaseUsage,
            ],
        )
        .with_description("Requirements and what satisfies, verifies or refines them.")
        .with_edge_kinds(&[
            E::Satisfy,
            E::Verify,
            E::Refine,
            E::Derive,
            E::Trace,
            E::Frame,
            E::Subject,
            E::Containment,
        ]),
    ]
});

/// Every built-in viewpoint, in registry order.
pub fn builtin_viewpoints() -> &'static [Viewpoint] {
    &BUILTIN
}

/// Look up a built-in viewpoint by id.
pub fn viewpoint_by_id(id: &str) -> Option<&'static Viewpoint> {
    BUILTIN.iter().find(|viewpoint| viewpoint.id == id)
}
