//! Data model types shared by the registries.
//!
//! - Identifiers ([`NodeId`], [`ExpandedNodeId`])
//! - Values backing the builtin data types
//! - Node classes

pub mod id;
pub mod node_class;
pub mod value;

pub use id::{ExpandedNodeId, IdType, Identifier, NodeId};
pub use node_class::NodeClass;
pub use value::{
    ByteString, DataValue, DateTime, DiagnosticInfo, ExtensionObject, ExtensionObjectBody,
    LocalizedText, QualifiedName, StatusCode, Variant, XmlElement,
};
