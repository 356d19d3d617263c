//! Well-known identifiers from namespace 0.
//!
//! These are the subset of the standard node ids the registries consume.
//! Values are fixed by the OPC UA information model and never change between
//! releases.

/// URI of the OPC UA base namespace, always at namespace index 0.
pub const OPC_UA_NAMESPACE: &str = "http://opcfoundation.org/UA/";

/// Builtin data type ids (`ns=0;i=1` through `ns=0;i=25`).
pub mod data_types {
    use crate::model::NodeId;

    pub const BOOLEAN: NodeId = NodeId::numeric(0, 1);
    pub const SBYTE: NodeId = NodeId::numeric(0, 2);
    pub const BYTE: NodeId = NodeId::numeric(0, 3);
    pub const INT16: NodeId = NodeId::numeric(0, 4);
    pub const UINT16: NodeId = NodeId::numeric(0, 5);
    pub const INT32: NodeId = NodeId::numeric(0, 6);
    pub const UINT32: NodeId = NodeId::numeric(0, 7);
    pub const INT64: NodeId = NodeId::numeric(0, 8);
    pub const UINT64: NodeId = NodeId::numeric(0, 9);
    pub const FLOAT: NodeId = NodeId::numeric(0, 10);
    pub const DOUBLE: NodeId = NodeId::numeric(0, 11);
    pub const STRING: NodeId = NodeId::numeric(0, 12);
    pub const DATE_TIME: NodeId = NodeId::numeric(0, 13);
    pub const GUID: NodeId = NodeId::numeric(0, 14);
    pub const BYTE_STRING: NodeId = NodeId::numeric(0, 15);
    pub const XML_ELEMENT: NodeId = NodeId::numeric(0, 16);
    pub const NODE_ID: NodeId = NodeId::numeric(0, 17);
    pub const EXPANDED_NODE_ID: NodeId = NodeId::numeric(0, 18);
    pub const STATUS_CODE: NodeId = NodeId::numeric(0, 19);
    pub const QUALIFIED_NAME: NodeId = NodeId::numeric(0, 20);
    pub const LOCALIZED_TEXT: NodeId = NodeId::numeric(0, 21);
    pub const EXTENSION_OBJECT: NodeId = NodeId::numeric(0, 22);
    pub const DATA_VALUE: NodeId = NodeId::numeric(0, 23);
    pub const VARIANT: NodeId = NodeId::numeric(0, 24);
    pub const DIAGNOSTIC_INFO: NodeId = NodeId::numeric(0, 25);
}

/// Builtin reference type ids.
pub mod reference_types {
    use crate::model::NodeId;

    pub const REFERENCES: NodeId = NodeId::numeric(0, 31);
    pub const NON_HIERARCHICAL_REFERENCES: NodeId = NodeId::numeric(0, 32);
    pub const HIERARCHICAL_REFERENCES: NodeId = NodeId::numeric(0, 33);
    pub const HAS_CHILD: NodeId = NodeId::numeric(0, 34);
    pub const ORGANIZES: NodeId = NodeId::numeric(0, 35);
    pub const HAS_EVENT_SOURCE: NodeId = NodeId::numeric(0, 36);
    pub const HAS_MODELLING_RULE: NodeId = NodeId::numeric(0, 37);
    pub const HAS_ENCODING: NodeId = NodeId::numeric(0, 38);
    pub const HAS_DESCRIPTION: NodeId = NodeId::numeric(0, 39);
    pub const HAS_TYPE_DEFINITION: NodeId = NodeId::numeric(0, 40);
    pub const GENERATES_EVENT: NodeId = NodeId::numeric(0, 41);
    pub const AGGREGATES: NodeId = NodeId::numeric(0, 44);
    pub const HAS_SUBTYPE: NodeId = NodeId::numeric(0, 45);
    pub const HAS_PROPERTY: NodeId = NodeId::numeric(0, 46);
    pub const HAS_COMPONENT: NodeId = NodeId::numeric(0, 47);
    pub const HAS_NOTIFIER: NodeId = NodeId::numeric(0, 48);
    pub const HAS_ORDERED_COMPONENT: NodeId = NodeId::numeric(0, 49);
    pub const FROM_STATE: NodeId = NodeId::numeric(0, 51);
    pub const TO_STATE: NodeId = NodeId::numeric(0, 52);
    pub const HAS_CAUSE: NodeId = NodeId::numeric(0, 53);
    pub const HAS_EFFECT: NodeId = NodeId::numeric(0, 54);
    pub const HAS_HISTORICAL_CONFIGURATION: NodeId = NodeId::numeric(0, 56);
    pub const HAS_SUB_STATE_MACHINE: NodeId = NodeId::numeric(0, 117);
    pub const HAS_ARGUMENT_DESCRIPTION: NodeId = NodeId::numeric(0, 129);
    pub const HAS_OPTIONAL_INPUT_ARGUMENT_DESCRIPTION: NodeId = NodeId::numeric(0, 131);
    pub const ALWAYS_GENERATES_EVENT: NodeId = NodeId::numeric(0, 3065);
    pub const HAS_TRUE_SUB_STATE: NodeId = NodeId::numeric(0, 9004);
    pub const HAS_FALSE_SUB_STATE: NodeId = NodeId::numeric(0, 9005);
    pub const HAS_CONDITION: NodeId = NodeId::numeric(0, 9006);
    pub const HAS_INTERFACE: NodeId = NodeId::numeric(0, 17603);
    pub const HAS_ADD_IN: NodeId = NodeId::numeric(0, 17604);
    pub const IS_DEPRECATED: NodeId = NodeId::numeric(0, 23562);
    pub const HAS_STRUCTURED_COMPONENT: NodeId = NodeId::numeric(0, 24136);
    pub const ASSOCIATED_WITH: NodeId = NodeId::numeric(0, 24137);
}
