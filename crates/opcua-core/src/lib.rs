//! opcua-core: the metadata layer of an OPC UA stack.
//!
//! This crate provides the registries that give meaning to identifiers
//! before any value is encoded or any node is browsed.
//!
//! # Overview
//!
//! - **Namespace table**: a thread-safe bidirectional map between namespace
//!   URIs and the `u16` indices carried inside every node id
//! - **Builtin types**: the 25 builtin data types, their ids, node ids and
//!   the Rust types backing them
//! - **Reference types**: the standard relationship hierarchy rooted at
//!   `References`
//! - **Attributes**: the attribute ids and the set each node class carries
//!
//! # Quick Start
//!
//! ```rust
//! use opcua_core::{AttributeId, BuiltinReferenceType, NamespaceTable, NodeClass, ReferenceType};
//! use opcua_core::{attribute, builtin};
//!
//! let table = NamespaceTable::new();
//! let ns = table.add("urn:example:plant").unwrap();
//! assert_eq!(ns, 1);
//! assert_eq!(table.get_uri(0).as_deref(), Some("http://opcfoundation.org/UA/"));
//!
//! assert_eq!(builtin::id_of::<f64>(), 11);
//!
//! let has_component = BuiltinReferenceType::HasComponent;
//! assert_eq!(has_component.inverse_name(), Some("ComponentOf"));
//! assert!(has_component.is_hierarchical());
//!
//! assert!(attribute::attributes(NodeClass::Variable).contains(&AttributeId::Value));
//! ```
//!
//! # Modules
//!
//! - [`namespace`]: Namespace table
//! - [`builtin`]: Builtin type registry
//! - [`reference_type`]: Reference type hierarchy
//! - [`attribute`]: Attribute catalog
//! - [`model`]: Node ids and builtin value types
//! - [`identifiers`]: Well-known ids from namespace 0
//! - [`error`]: Error types
//! - [`limits`]: Hard limits

pub mod attribute;
pub mod builtin;
pub mod error;
pub mod identifiers;
pub mod limits;
pub mod model;
pub mod namespace;
pub mod reference_type;

// Re-export commonly used types at crate root
pub use attribute::{AttributeId, AttributeSet};
pub use builtin::{BuiltinDataType, BuiltinType};
pub use error::{NamespaceError, NodeIdParseError};
pub use model::{
    ByteString, DataValue, DateTime, DiagnosticInfo, ExpandedNodeId, ExtensionObject,
    ExtensionObjectBody, IdType, Identifier, LocalizedText, NodeClass, NodeId, QualifiedName,
    StatusCode, Variant, XmlElement,
};
pub use namespace::{NamespaceTable, NamespaceTableOptions};
pub use reference_type::{BuiltinReferenceType, ReferenceType, ReferenceTypeDefinition};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// OPC UA specification release the well-known ids are taken from.
pub const OPC_UA_VERSION: &str = "1.05";
