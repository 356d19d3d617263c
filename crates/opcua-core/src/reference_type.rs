//! Reference type hierarchy.
//!
//! Reference types name the relationships between nodes (containment,
//! typing, state machine transitions, ...). They form a single-rooted tree
//! under `References`. A symmetric reference reads the same in both
//! directions and has no inverse name; every asymmetric one has one.

use lazy_static::lazy_static;
use log::trace;
use rustc_hash::FxHashMap;

use crate::identifiers::reference_types as ids;
use crate::limits::MAX_REFERENCE_TYPE_DEPTH;
use crate::model::{NodeId, QualifiedName};

/// The capabilities every reference type exposes, builtin or not.
pub trait ReferenceType {
    fn node_id(&self) -> NodeId;

    fn browse_name(&self) -> QualifiedName;

    /// Name of the reference read from target to source. `None` for symmetric types.
    fn inverse_name(&self) -> Option<&str>;

    fn is_symmetric(&self) -> bool;

    fn is_abstract(&self) -> bool;

    /// Id of the direct supertype. `None` only for the root.
    fn super_type_id(&self) -> Option<NodeId>;
}

/// The reference types defined in namespace 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinReferenceType {
    References,
    NonHierarchicalReferences,
    HierarchicalReferences,
    HasChild,
    Organizes,
    HasEventSource,
    HasModellingRule,
    HasEncoding,
    HasDescription,
    HasTypeDefinition,
    GeneratesEvent,
    AlwaysGeneratesEvent,
    Aggregates,
    HasSubtype,
    HasProperty,
    HasComponent,
    HasNotifier,
    HasOrderedComponent,
    FromState,
    ToState,
    HasCause,
    HasEffect,
    HasHistoricalConfiguration,
    HasSubStateMachine,
    HasTrueSubState,
    HasFalseSubState,
    HasCondition,
    HasArgumentDescription,
    HasOptionalInputArgumentDescription,
    HasInterface,
    HasAddIn,
    IsDeprecated,
    HasStructuredComponent,
    AssociatedWith,
}

const REFERENCE_TYPE_COUNT: usize = 34;

struct Descriptor {
    variant: BuiltinReferenceType,
    node_id: NodeId,
    browse_name: &'static str,
    inverse_name: Option<&'static str>,
    symmetric: bool,
    is_abstract: bool,
    super_type: Option<BuiltinReferenceType>,
}

const fn asymmetric(
    variant: BuiltinReferenceType,
    node_id: NodeId,
    browse_name: &'static str,
    inverse_name: &'static str,
    is_abstract: bool,
    super_type: BuiltinReferenceType,
) -> Descriptor {
    Descriptor {
        variant,
        node_id,
        browse_name,
        inverse_name: Some(inverse_name),
        symmetric: false,
        is_abstract,
        super_type: Some(super_type),
    }
}

const fn symmetric(
    variant: BuiltinReferenceType,
    node_id: NodeId,
    browse_name: &'static str,
    is_abstract: bool,
    super_type: Option<BuiltinReferenceType>,
) -> Descriptor {
    Descriptor {
        variant,
        node_id,
        browse_name,
        inverse_name: None,
        symmetric: true,
        is_abstract,
        super_type,
    }
}

use BuiltinReferenceType as R;

// Indexed by discriminant; order must match the enum declaration.
static DESCRIPTORS: [Descriptor; REFERENCE_TYPE_COUNT] = [
    symmetric(R::References, ids::REFERENCES, "References", true, None),
    symmetric(
        R::NonHierarchicalReferences,
        ids::NON_HIERARCHICAL_REFERENCES,
        "NonHierarchicalReferences",
        true,
        Some(R::References),
    ),
    asymmetric(
        R::HierarchicalReferences,
        ids::HIERARCHICAL_REFERENCES,
        "HierarchicalReferences",
        "InverseHierarchicalReferences",
        true,
        R::References,
    ),
    asymmetric(
        R::HasChild,
        ids::HAS_CHILD,
        "HasChild",
        "ChildOf",
        true,
        R::HierarchicalReferences,
    ),
    asymmetric(
        R::Organizes,
        ids::ORGANIZES,
        "Organizes",
        "OrganizedBy",
        false,
        R::HierarchicalReferences,
    ),
    asymmetric(
        R::HasEventSource,
        ids::HAS_EVENT_SOURCE,
        "HasEventSource",
        "EventSourceOf",
        false,
        R::HierarchicalReferences,
    ),
    asymmetric(
        R::HasModellingRule,
        ids::HAS_MODELLING_RULE,
        "HasModellingRule",
        "ModellingRuleOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasEncoding,
        ids::HAS_ENCODING,
        "HasEncoding",
        "EncodingOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasDescription,
        ids::HAS_DESCRIPTION,
        "HasDescription",
        "DescriptionOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasTypeDefinition,
        ids::HAS_TYPE_DEFINITION,
        "HasTypeDefinition",
        "TypeDefinitionOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::GeneratesEvent,
        ids::GENERATES_EVENT,
        "GeneratesEvent",
        "GeneratedBy",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::AlwaysGeneratesEvent,
        ids::ALWAYS_GENERATES_EVENT,
        "AlwaysGeneratesEvent",
        "AlwaysGeneratedBy",
        false,
        R::GeneratesEvent,
    ),
    asymmetric(
        R::Aggregates,
        ids::AGGREGATES,
        "Aggregates",
        "AggregatedBy",
        true,
        R::HasChild,
    ),
    asymmetric(
        R::HasSubtype,
        ids::HAS_SUBTYPE,
        "HasSubtype",
        "SubtypeOf",
        false,
        R::HasChild,
    ),
    asymmetric(
        R::HasProperty,
        ids::HAS_PROPERTY,
        "HasProperty",
        "PropertyOf",
        false,
        R::Aggregates,
    ),
    asymmetric(
        R::HasComponent,
        ids::HAS_COMPONENT,
        "HasComponent",
        "ComponentOf",
        false,
        R::Aggregates,
    ),
    asymmetric(
        R::HasNotifier,
        ids::HAS_NOTIFIER,
        "HasNotifier",
        "NotifierOf",
        false,
        R::HasEventSource,
    ),
    asymmetric(
        R::HasOrderedComponent,
        ids::HAS_ORDERED_COMPONENT,
        "HasOrderedComponent",
        "OrderedComponentOf",
        false,
        R::HasComponent,
    ),
    asymmetric(
        R::FromState,
        ids::FROM_STATE,
        "FromState",
        "ToTransition",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::ToState,
        ids::TO_STATE,
        "ToState",
        "FromTransition",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasCause,
        ids::HAS_CAUSE,
        "HasCause",
        "MayBeCausedBy",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasEffect,
        ids::HAS_EFFECT,
        "HasEffect",
        "MayBeEffectedBy",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasHistoricalConfiguration,
        ids::HAS_HISTORICAL_CONFIGURATION,
        "HasHistoricalConfiguration",
        "HistoricalConfigurationOf",
        false,
        R::Aggregates,
    ),
    asymmetric(
        R::HasSubStateMachine,
        ids::HAS_SUB_STATE_MACHINE,
        "HasSubStateMachine",
        "SubStateMachineOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasTrueSubState,
        ids::HAS_TRUE_SUB_STATE,
        "HasTrueSubState",
        "IsTrueSubStateOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasFalseSubState,
        ids::HAS_FALSE_SUB_STATE,
        "HasFalseSubState",
        "IsFalseSubStateOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasCondition,
        ids::HAS_CONDITION,
        "HasCondition",
        "IsConditionOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasArgumentDescription,
        ids::HAS_ARGUMENT_DESCRIPTION,
        "HasArgumentDescription",
        "ArgumentDescriptionOf",
        false,
        R::HasComponent,
    ),
    asymmetric(
        R::HasOptionalInputArgumentDescription,
        ids::HAS_OPTIONAL_INPUT_ARGUMENT_DESCRIPTION,
        "HasOptionalInputArgumentDescription",
        "OptionalInputArgumentDescriptionOf",
        false,
        R::HasArgumentDescription,
    ),
    asymmetric(
        R::HasInterface,
        ids::HAS_INTERFACE,
        "HasInterface",
        "InterfaceOf",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasAddIn,
        ids::HAS_ADD_IN,
        "HasAddIn",
        "AddInOf",
        false,
        R::HasComponent,
    ),
    asymmetric(
        R::IsDeprecated,
        ids::IS_DEPRECATED,
        "IsDeprecated",
        "Deprecates",
        false,
        R::NonHierarchicalReferences,
    ),
    asymmetric(
        R::HasStructuredComponent,
        ids::HAS_STRUCTURED_COMPONENT,
        "HasStructuredComponent",
        "IsStructuredComponentOf",
        false,
        R::HasComponent,
    ),
    symmetric(
        R::AssociatedWith,
        ids::ASSOCIATED_WITH,
        "AssociatedWith",
        false,
        Some(R::NonHierarchicalReferences),
    ),
];

lazy_static! {
    static ref BY_NODE_ID: FxHashMap<NodeId, BuiltinReferenceType> = {
        let map: FxHashMap<_, _> = DESCRIPTORS
            .iter()
            .map(|d| (d.node_id.clone(), d.variant))
            .collect();
        trace!("reference type registry built: {} types", map.len());
        map
    };
}

impl BuiltinReferenceType {
    /// All builtin reference types in declaration order.
    pub fn all() -> impl Iterator<Item = BuiltinReferenceType> {
        DESCRIPTORS.iter().map(|d| d.variant)
    }

    /// Read-only view of the `node id -> reference type` map.
    pub fn registry() -> &'static FxHashMap<NodeId, BuiltinReferenceType> {
        &BY_NODE_ID
    }

    /// Looks up a builtin reference type by node id.
    pub fn from_node_id(node_id: &NodeId) -> Option<BuiltinReferenceType> {
        BY_NODE_ID.get(node_id).copied()
    }

    /// Looks up a builtin reference type by browse name (namespace 0).
    pub fn from_browse_name(name: &str) -> Option<BuiltinReferenceType> {
        DESCRIPTORS
            .iter()
            .find(|d| d.browse_name == name)
            .map(|d| d.variant)
    }

    fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Browse name without the namespace qualifier.
    pub fn name(self) -> &'static str {
        self.descriptor().browse_name
    }

    /// The direct supertype. `None` only for [`BuiltinReferenceType::References`].
    pub fn super_type(self) -> Option<BuiltinReferenceType> {
        self.descriptor().super_type
    }

    /// Iterates from `self` up to the root, both included.
    pub fn ancestors(self) -> impl Iterator<Item = BuiltinReferenceType> {
        std::iter::successors(Some(self), |t| t.super_type()).take(MAX_REFERENCE_TYPE_DEPTH)
    }

    /// True if `self` is `other` or a (transitive) subtype of it.
    pub fn is_subtype_of(self, other: BuiltinReferenceType) -> bool {
        self.ancestors().any(|t| t == other)
    }

    /// True for `HierarchicalReferences` and all its subtypes.
    pub fn is_hierarchical(self) -> bool {
        self.is_subtype_of(BuiltinReferenceType::HierarchicalReferences)
    }

    /// All builtin types that are `other` or subtypes of it.
    pub fn subtypes_of(other: BuiltinReferenceType) -> Vec<BuiltinReferenceType> {
        Self::all().filter(|t| t.is_subtype_of(other)).collect()
    }
}

impl ReferenceType for BuiltinReferenceType {
    fn node_id(&self) -> NodeId {
        self.descriptor().node_id.clone()
    }

    fn browse_name(&self) -> QualifiedName {
        QualifiedName::new(0, self.descriptor().browse_name)
    }

    fn inverse_name(&self) -> Option<&str> {
        self.descriptor().inverse_name
    }

    fn is_symmetric(&self) -> bool {
        self.descriptor().symmetric
    }

    fn is_abstract(&self) -> bool {
        self.descriptor().is_abstract
    }

    fn super_type_id(&self) -> Option<NodeId> {
        self.super_type().map(|t| t.descriptor().node_id.clone())
    }
}

/// A reference type described by data, such as one read from a server's
/// address space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTypeDefinition {
    pub node_id: NodeId,
    pub browse_name: QualifiedName,
    pub inverse_name: Option<String>,
    pub symmetric: bool,
    pub is_abstract: bool,
    pub super_type_id: Option<NodeId>,
}

impl ReferenceType for ReferenceTypeDefinition {
    fn node_id(&self) -> NodeId {
        self.node_id.clone()
    }

    fn browse_name(&self) -> QualifiedName {
        self.browse_name.clone()
    }

    fn inverse_name(&self) -> Option<&str> {
        self.inverse_name.as_deref()
    }

    fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn super_type_id(&self) -> Option<NodeId> {
        self.super_type_id.clone()
    }
}

impl From<BuiltinReferenceType> for ReferenceTypeDefinition {
    fn from(t: BuiltinReferenceType) -> Self {
        Self {
            node_id: t.node_id(),
            browse_name: t.browse_name(),
            inverse_name: t.inverse_name().map(str::to_string),
            symmetric: t.is_symmetric(),
            is_abstract: t.is_abstract(),
            super_type_id: t.super_type_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_order_matches_discriminants() {
        assert_eq!(DESCRIPTORS.len(), REFERENCE_TYPE_COUNT);
        for (i, d) in DESCRIPTORS.iter().enumerate() {
            assert_eq!(d.variant as usize, i, "{:?} out of order", d.variant);
        }
    }

    #[test]
    fn test_registry_covers_every_variant() {
        let registry = BuiltinReferenceType::registry();
        assert_eq!(registry.len(), REFERENCE_TYPE_COUNT);
        for t in BuiltinReferenceType::all() {
            assert_eq!(registry.get(&t.node_id()), Some(&t));
        }
    }

    #[test]
    fn test_root() {
        let root = BuiltinReferenceType::References;
        assert!(root.is_abstract());
        assert!(root.is_symmetric());
        assert_eq!(root.super_type_id(), None);
        assert_eq!(root.inverse_name(), None);

        let roots: Vec<_> = BuiltinReferenceType::all()
            .filter(|t| t.super_type_id().is_none())
            .collect();
        assert_eq!(roots, vec![BuiltinReferenceType::References]);
    }

    #[test]
    fn test_no_dangling_super_types() {
        for t in BuiltinReferenceType::all() {
            if let Some(super_id) = t.super_type_id() {
                assert!(
                    BuiltinReferenceType::from_node_id(&super_id).is_some(),
                    "{:?} has dangling supertype {}",
                    t,
                    super_id
                );
            }
        }
    }

    #[test]
    fn test_every_chain_reaches_root() {
        for t in BuiltinReferenceType::all() {
            let mut current = t.node_id();
            let mut steps = 0;
            while let Some(super_id) = BuiltinReferenceType::from_node_id(&current)
                .and_then(|r| r.super_type_id())
            {
                current = super_id;
                steps += 1;
                assert!(steps < MAX_REFERENCE_TYPE_DEPTH, "cycle from {:?}", t);
            }
            assert_eq!(current, ids::REFERENCES, "{:?} does not reach the root", t);
        }
    }

    #[test]
    fn test_symmetric_iff_no_inverse_name() {
        for t in BuiltinReferenceType::all() {
            assert_eq!(t.is_symmetric(), t.inverse_name().is_none(), "{:?}", t);
        }
    }

    #[test]
    fn test_known_descriptors() {
        let t = BuiltinReferenceType::HasComponent;
        assert_eq!(t.node_id(), ids::HAS_COMPONENT);
        assert_eq!(t.browse_name(), QualifiedName::new(0, "HasComponent"));
        assert_eq!(t.inverse_name(), Some("ComponentOf"));
        assert_eq!(t.super_type(), Some(BuiltinReferenceType::Aggregates));
        assert!(!t.is_abstract());

        assert!(BuiltinReferenceType::HasChild.is_abstract());
        assert!(BuiltinReferenceType::AssociatedWith.is_symmetric());
        assert!(!BuiltinReferenceType::AssociatedWith.is_abstract());
        assert_eq!(
            BuiltinReferenceType::from_node_id(&NodeId::numeric(0, 3065)),
            Some(BuiltinReferenceType::AlwaysGeneratesEvent)
        );
        assert_eq!(BuiltinReferenceType::from_node_id(&NodeId::numeric(0, 50)), None);
        assert_eq!(BuiltinReferenceType::from_node_id(&NodeId::numeric(1, 47)), None);
    }

    #[test]
    fn test_subtyping() {
        use BuiltinReferenceType::*;

        assert!(HasOrderedComponent.is_subtype_of(HasComponent));
        assert!(HasOrderedComponent.is_subtype_of(Aggregates));
        assert!(HasOrderedComponent.is_subtype_of(References));
        assert!(HasComponent.is_subtype_of(HasComponent));
        assert!(!HasComponent.is_subtype_of(HasOrderedComponent));
        assert!(!HasTypeDefinition.is_subtype_of(HierarchicalReferences));

        assert!(Organizes.is_hierarchical());
        assert!(HasNotifier.is_hierarchical());
        assert!(!HasEncoding.is_hierarchical());
        assert!(!References.is_hierarchical());

        let aggregates = BuiltinReferenceType::subtypes_of(Aggregates);
        assert!(aggregates.contains(&HasProperty));
        assert!(aggregates.contains(&HasStructuredComponent));
        assert!(!aggregates.contains(&Organizes));
    }

    #[test]
    fn test_browse_name_lookup() {
        for t in BuiltinReferenceType::all() {
            assert_eq!(BuiltinReferenceType::from_browse_name(t.name()), Some(t));
        }
        assert_eq!(BuiltinReferenceType::from_browse_name("HasNothing"), None);
    }

    #[test]
    fn test_definition_from_builtin() {
        let def = ReferenceTypeDefinition::from(BuiltinReferenceType::HasSubtype);
        assert_eq!(def.node_id(), ids::HAS_SUBTYPE);
        assert_eq!(def.inverse_name(), Some("SubtypeOf"));
        assert_eq!(def.super_type_id(), Some(ids::HAS_CHILD));

        let custom = ReferenceTypeDefinition {
            node_id: NodeId::numeric(2, 5001),
            browse_name: QualifiedName::new(2, "FeedsInto"),
            inverse_name: Some("FedBy".to_string()),
            symmetric: false,
            is_abstract: false,
            super_type_id: Some(ids::NON_HIERARCHICAL_REFERENCES),
        };
        let as_dyn: &dyn ReferenceType = &custom;
        assert_eq!(as_dyn.inverse_name(), Some("FedBy"));
        assert!(
            as_dyn
                .super_type_id()
                .and_then(|id| BuiltinReferenceType::from_node_id(&id))
                .is_some()
        );
    }
}
