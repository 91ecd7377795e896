use super::{Accent, ElementKindTag, ShapeFamily};

kind_enum! {
    /// The closed set of node kinds a model may contain.
    pub enum NodeKind {
        // Organizational
        Package => "package",
        LibraryPackage => "library-package",
        Comment => "comment",

        // Structural
        PartDefinition => "part-definition",
        PartUsage => "part-usage",
        AttributeDefinition => "attribute-definition",
        AttributeUsage => "attribute-usage",
        PortDefinition => "port-definition",
        PortUsage => "port-usage",
        ItemDefinition => "item-definition",
        ItemUsage => "item-usage",
        ConnectionDefinition => "connection-definition",
        ConnectionUsage => "connection-usage",
        InterfaceDefinition => "interface-definition",
        InterfaceUsage => "interface-usage",
        AllocationDefinition => "allocation-definition",
        AllocationUsage => "allocation-usage",
        EnumerationDefinition => "enumeration-definition",
        OccurrenceDefinition => "occurrence-definition",

        // Behavioral
        ActionDefinition => "action-definition",
        ActionUsage => "action-usage",
        /// Fork, join, merge, decision, start and done nodes.
        ActivityControl => "activity-control",
        CalculationDefinition => "calculation-definition",
        CalculationUsage => "calculation-usage",
        StateDefinition => "state-definition",
        StateUsage => "state-usage",
        ConstraintDefinition => "constraint-definition",
        ConstraintUsage => "constraint-usage",

        // Requirements and cases
        RequirementDefinition => "requirement-definition",
        RequirementUsage => "requirement-usage",
        ConcernDefinition => "concern-definition",
        UseCaseDefinition => "use-case-definition",
        UseCaseUsage => "use-case-usage",
        AnalysisCaseDefinition => "analysis-case-definition",
        AnalysisCaseUsage => "analysis-case-usage",
        VerificationCaseDefinition => "verification-case-definition",
        VerificationCaseUsage => "verification-case-usage",

        // Interaction
        Actor => "actor",
        Interaction => "interaction",
        Lifeline => "lifeline",

        // Metadata and views
        MetadataDefinition => "metadata-definition",
        MetadataUsage => "metadata-usage",
        ViewDefinition => "view-definition",
        ViewUsage => "view-usage",
        ViewpointDefinition => "viewpoint-definition",
    }
}

impl NodeKind {
    /// Shape family used to draw nodes of this kind.
    pub fn shape(self) -> ShapeFamily {
        use NodeKind::*;
        match self {
            Package | LibraryPackage => ShapeFamily::Package,
            Comment => ShapeFamily::Note,

            PartDefinition | AttributeDefinition | PortDefinition | ItemDefinition
            | ConnectionDefinition | InterfaceDefinition | AllocationDefinition
            | EnumerationDefinition | OccurrenceDefinition | ActionDefinition
            | CalculationDefinition | ConstraintDefinition | AnalysisCaseDefinition
            | VerificationCaseDefinition | MetadataDefinition | ViewDefinition
            | ViewpointDefinition => ShapeFamily::Definition,

            PartUsage | AttributeUsage | PortUsage | ItemUsage | ConnectionUsage
            | InterfaceUsage | AllocationUsage | ActionUsage | CalculationUsage
            | ConstraintUsage | AnalysisCaseUsage | VerificationCaseUsage | MetadataUsage
            | ViewUsage => ShapeFamily::Usage,

            ActivityControl => ShapeFamily::Control,
            StateDefinition | StateUsage => ShapeFamily::State,
            RequirementDefinition | RequirementUsage | ConcernDefinition => {
                ShapeFamily::Requirement
            }
            UseCaseDefinition | UseCaseUsage => ShapeFamily::UseCase,
            Actor => ShapeFamily::Actor,
            Interaction => ShapeFamily::Frame,
            Lifeline => ShapeFamily::Lifeline,
        }
    }

    /// Accent color for nodes of this kind, by family.
    pub fn accent(self) -> Accent {
        use NodeKind::*;
        match self {
            Package | LibraryPackage => Accent::rgb(0x64, 0x74, 0x8b),
            Comment => Accent::rgb(0xea, 0xb3, 0x08),

            PartDefinition | PartUsage | AttributeDefinition | AttributeUsage
            | PortDefinition | PortUsage | ItemDefinition | ItemUsage
            | EnumerationDefinition | OccurrenceDefinition => Accent::rgb(0x3b, 0x82, 0xf6),

            ConnectionDefinition | ConnectionUsage | InterfaceDefinition | InterfaceUsage
            | AllocationDefinition | AllocationUsage => Accent::rgb(0x06, 0xb6, 0xd4),

            ActionDefinition | ActionUsage | ActivityControl | CalculationDefinition
            | CalculationUsage => Accent::rgb(0x22, 0xc5, 0x5e),

            StateDefinition | StateUsage => Accent::rgb(0xa8, 0x55, 0xf7),
            ConstraintDefinition | ConstraintUsage => Accent::rgb(0xf9, 0x73, 0x16),

            RequirementDefinition | RequirementUsage | ConcernDefinition => {
                Accent::rgb(0xef, 0x44, 0x44)
            }
            UseCaseDefinition | UseCaseUsage | AnalysisCaseDefinition | AnalysisCaseUsage
            | VerificationCaseDefinition | VerificationCaseUsage => Accent::rgb(0xec, 0x48, 0x99),

            Actor | Interaction | Lifeline => Accent::rgb(0x14, 0xb8, 0xa6),

            MetadataDefinition | MetadataUsage | ViewDefinition | ViewUsage
            | ViewpointDefinition => Accent::rgb(0x8b, 0x5c, 0xf6),
        }
    }

    /// `definition` / `usage` tag, derived from the wire name.
    pub fn element_kind(self) -> Option<ElementKindTag> {
        ElementKindTag::of(self.as_str())
    }

    /// Kinds whose parameters are merged with those of their definition.
    pub fn inherits_parameters(self) -> bool {
        matches!(self, NodeKind::ActionUsage | NodeKind::CalculationUsage)
    }
}
