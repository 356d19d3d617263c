//! Cross-registry checks through the public API.

use std::any::TypeId;
use std::sync::Arc;
use std::thread;

use opcua_core::identifiers::{OPC_UA_NAMESPACE, data_types, reference_types};
use opcua_core::{
    AttributeId, BuiltinDataType, BuiltinReferenceType, ExpandedNodeId, NamespaceTable, NodeClass,
    NodeId, ReferenceType, Variant, attribute, builtin,
};

#[test]
fn test_node_id_resolves_through_namespace_table() {
    let table = NamespaceTable::new();
    let ns = table.add("urn:example:plant").unwrap();

    let xni: ExpandedNodeId = "nsu=urn:example:plant;s=Boiler1".parse().unwrap();
    let local = xni.local(&table).unwrap();
    assert_eq!(local.namespace_index, ns);
    assert_eq!(local.to_string(), "ns=1;s=Boiler1");

    let unknown: ExpandedNodeId = "nsu=urn:example:other;i=5".parse().unwrap();
    assert!(unknown.local(&table).is_none());
}

#[test]
fn test_builtin_data_type_ids_are_ns0_numeric() {
    for t in BuiltinDataType::ALL {
        let node_id = t.node_id();
        assert_eq!(node_id.namespace_index, 0);
        assert_eq!(node_id.as_ns0_numeric(), Some(t.id() as u32));
        assert!(builtin::is_builtin(&node_id));
    }
    assert_eq!(BuiltinDataType::Double.node_id(), data_types::DOUBLE);
}

#[test]
fn test_builtin_lookup_from_text_forms() {
    let plain: NodeId = "i=11".parse().unwrap();
    assert_eq!(
        builtin::backing_type_for_node_id(&plain),
        Some(TypeId::of::<f64>())
    );

    let with_uri: ExpandedNodeId = format!("nsu={};i=12", OPC_UA_NAMESPACE).parse().unwrap();
    assert!(builtin::is_builtin_expanded(&with_uri));
    assert_eq!(
        builtin::backing_type_for_expanded(&with_uri),
        Some(TypeId::of::<String>())
    );

    let remote: ExpandedNodeId = "svr=2;i=12".parse().unwrap();
    assert!(!builtin::is_builtin_expanded(&remote));

    let other_ns: NodeId = "ns=3;i=12".parse().unwrap();
    assert!(!builtin::is_builtin(&other_ns));
}

#[test]
fn test_variant_reports_its_data_type() {
    let v = Variant::Double(1.5);
    let data_type = v.data_type().unwrap();
    assert_eq!(data_type, BuiltinDataType::Double);
    assert_eq!(
        builtin::variant_for(&data_type.node_id()),
        Some(BuiltinDataType::Double)
    );
    assert_eq!(Variant::Empty.data_type(), None);
}

#[test]
fn test_reference_hierarchy_from_identifiers() {
    let organizes = BuiltinReferenceType::from_node_id(&reference_types::ORGANIZES).unwrap();
    assert!(organizes.is_hierarchical());
    assert_eq!(organizes.super_type_id(), Some(reference_types::HIERARCHICAL_REFERENCES));

    let hierarchical =
        BuiltinReferenceType::subtypes_of(BuiltinReferenceType::HierarchicalReferences);
    let non_hierarchical =
        BuiltinReferenceType::subtypes_of(BuiltinReferenceType::NonHierarchicalReferences);
    assert_eq!(
        hierarchical.len() + non_hierarchical.len() + 1,
        BuiltinReferenceType::registry().len()
    );
    assert!(hierarchical.iter().all(|t| !non_hierarchical.contains(t)));
}

#[test]
fn test_reference_type_node_class_attributes() {
    // Each ReferenceType accessor has a matching attribute on the node class.
    let attrs = attribute::attributes(NodeClass::ReferenceType);
    for attr in [
        AttributeId::NodeId,
        AttributeId::BrowseName,
        AttributeId::InverseName,
        AttributeId::Symmetric,
        AttributeId::IsAbstract,
    ] {
        assert!(attrs.contains(&attr), "missing {}", attr);
    }
}

#[test]
fn test_registries_are_shared_across_threads() {
    let table = Arc::new(NamespaceTable::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let index = table.add(&format!("urn:example:thread:{}", i)).unwrap();
                let t = BuiltinReferenceType::from_node_id(&reference_types::HAS_COMPONENT);
                let attrs = attribute::attributes(NodeClass::Variable).len();
                (index, t, attrs)
            })
        })
        .collect();

    let mut indices: Vec<u16> = handles
        .into_iter()
        .map(|h| {
            let (index, t, attrs) = h.join().unwrap();
            assert_eq!(t, Some(BuiltinReferenceType::HasComponent));
            assert_eq!(attrs, 19);
            index
        })
        .collect();
    indices.sort();
    assert_eq!(indices, vec![1, 2, 3, 4]);
    assert_eq!(table.len(), 5);
}
