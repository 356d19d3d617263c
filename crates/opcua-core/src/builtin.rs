//! Builtin data type registry.
//!
//! The 25 builtin types are the only types the wire format encodes without a
//! schema. Each has three interchangeable keys:
//! - a numeric type id (1..=25) used as the wire tag,
//! - the Rust type that backs its values in memory,
//! - a well-known node id in namespace 0 (`i=<type id>`).
//!
//! The lookup maps are built once on first use and are read-only afterwards.
//!
//! ```rust
//! use std::any::TypeId;
//! use opcua_core::builtin::{self, BuiltinDataType};
//!
//! assert_eq!(builtin::id_for(TypeId::of::<i32>()), Some(6));
//! assert_eq!(builtin::id_for(TypeId::of::<&'static str>()), Some(12));
//! assert_eq!(
//!     builtin::variant_for(&BuiltinDataType::Guid.node_id()),
//!     Some(BuiltinDataType::Guid)
//! );
//! ```

use std::any::TypeId;
use std::borrow::Cow;

use lazy_static::lazy_static;
use log::trace;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::limits::BUILTIN_TYPE_COUNT;
use crate::model::{
    ByteString, DataValue, DateTime, DiagnosticInfo, ExpandedNodeId, ExtensionObject,
    LocalizedText, NodeId, QualifiedName, StatusCode, Variant, XmlElement,
};

/// The builtin data types, keyed by their wire type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BuiltinDataType {
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    Guid = 14,
    ByteString = 15,
    XmlElement = 16,
    NodeId = 17,
    ExpandedNodeId = 18,
    StatusCode = 19,
    QualifiedName = 20,
    LocalizedText = 21,
    ExtensionObject = 22,
    DataValue = 23,
    Variant = 24,
    DiagnosticInfo = 25,
}

impl BuiltinDataType {
    /// All builtin types in type id order.
    pub const ALL: [BuiltinDataType; BUILTIN_TYPE_COUNT] = [
        BuiltinDataType::Boolean,
        BuiltinDataType::SByte,
        BuiltinDataType::Byte,
        BuiltinDataType::Int16,
        BuiltinDataType::UInt16,
        BuiltinDataType::Int32,
        BuiltinDataType::UInt32,
        BuiltinDataType::Int64,
        BuiltinDataType::UInt64,
        BuiltinDataType::Float,
        BuiltinDataType::Double,
        BuiltinDataType::String,
        BuiltinDataType::DateTime,
        BuiltinDataType::Guid,
        BuiltinDataType::ByteString,
        BuiltinDataType::XmlElement,
        BuiltinDataType::NodeId,
        BuiltinDataType::ExpandedNodeId,
        BuiltinDataType::StatusCode,
        BuiltinDataType::QualifiedName,
        BuiltinDataType::LocalizedText,
        BuiltinDataType::ExtensionObject,
        BuiltinDataType::DataValue,
        BuiltinDataType::Variant,
        BuiltinDataType::DiagnosticInfo,
    ];

    /// Creates a BuiltinDataType from its wire type id.
    pub fn from_u8(v: u8) -> Option<BuiltinDataType> {
        match v {
            1..=25 => Some(Self::ALL[v as usize - 1]),
            _ => None,
        }
    }

    /// Returns the wire type id (1..=25).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the well-known node id (`ns=0;i=<id>`).
    pub fn node_id(self) -> NodeId {
        NodeId::numeric(0, self as u32)
    }

    /// Returns the type's browse name.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinDataType::Boolean => "Boolean",
            BuiltinDataType::SByte => "SByte",
            BuiltinDataType::Byte => "Byte",
            BuiltinDataType::Int16 => "Int16",
            BuiltinDataType::UInt16 => "UInt16",
            BuiltinDataType::Int32 => "Int32",
            BuiltinDataType::UInt32 => "UInt32",
            BuiltinDataType::Int64 => "Int64",
            BuiltinDataType::UInt64 => "UInt64",
            BuiltinDataType::Float => "Float",
            BuiltinDataType::Double => "Double",
            BuiltinDataType::String => "String",
            BuiltinDataType::DateTime => "DateTime",
            BuiltinDataType::Guid => "Guid",
            BuiltinDataType::ByteString => "ByteString",
            BuiltinDataType::XmlElement => "XmlElement",
            BuiltinDataType::NodeId => "NodeId",
            BuiltinDataType::ExpandedNodeId => "ExpandedNodeId",
            BuiltinDataType::StatusCode => "StatusCode",
            BuiltinDataType::QualifiedName => "QualifiedName",
            BuiltinDataType::LocalizedText => "LocalizedText",
            BuiltinDataType::ExtensionObject => "ExtensionObject",
            BuiltinDataType::DataValue => "DataValue",
            BuiltinDataType::Variant => "Variant",
            BuiltinDataType::DiagnosticInfo => "DiagnosticInfo",
        }
    }

    /// Returns the `TypeId` of the Rust type backing values of this type.
    pub fn backing_type(self) -> TypeId {
        match self {
            BuiltinDataType::Boolean => TypeId::of::<bool>(),
            BuiltinDataType::SByte => TypeId::of::<i8>(),
            BuiltinDataType::Byte => TypeId::of::<u8>(),
            BuiltinDataType::Int16 => TypeId::of::<i16>(),
            BuiltinDataType::UInt16 => TypeId::of::<u16>(),
            BuiltinDataType::Int32 => TypeId::of::<i32>(),
            BuiltinDataType::UInt32 => TypeId::of::<u32>(),
            BuiltinDataType::Int64 => TypeId::of::<i64>(),
            BuiltinDataType::UInt64 => TypeId::of::<u64>(),
            BuiltinDataType::Float => TypeId::of::<f32>(),
            BuiltinDataType::Double => TypeId::of::<f64>(),
            BuiltinDataType::String => TypeId::of::<String>(),
            BuiltinDataType::DateTime => TypeId::of::<DateTime>(),
            BuiltinDataType::Guid => TypeId::of::<Uuid>(),
            BuiltinDataType::ByteString => TypeId::of::<ByteString>(),
            BuiltinDataType::XmlElement => TypeId::of::<XmlElement>(),
            BuiltinDataType::NodeId => TypeId::of::<NodeId>(),
            BuiltinDataType::ExpandedNodeId => TypeId::of::<ExpandedNodeId>(),
            BuiltinDataType::StatusCode => TypeId::of::<StatusCode>(),
            BuiltinDataType::QualifiedName => TypeId::of::<QualifiedName>(),
            BuiltinDataType::LocalizedText => TypeId::of::<LocalizedText>(),
            BuiltinDataType::ExtensionObject => TypeId::of::<ExtensionObject>(),
            BuiltinDataType::DataValue => TypeId::of::<DataValue>(),
            BuiltinDataType::Variant => TypeId::of::<Variant>(),
            BuiltinDataType::DiagnosticInfo => TypeId::of::<DiagnosticInfo>(),
        }
    }

    /// Returns the name of the Rust type backing values of this type.
    pub fn backing_type_name(self) -> &'static str {
        match self {
            BuiltinDataType::Boolean => "bool",
            BuiltinDataType::SByte => "i8",
            BuiltinDataType::Byte => "u8",
            BuiltinDataType::Int16 => "i16",
            BuiltinDataType::UInt16 => "u16",
            BuiltinDataType::Int32 => "i32",
            BuiltinDataType::UInt32 => "u32",
            BuiltinDataType::Int64 => "i64",
            BuiltinDataType::UInt64 => "u64",
            BuiltinDataType::Float => "f32",
            BuiltinDataType::Double => "f64",
            BuiltinDataType::String => "String",
            BuiltinDataType::Guid => "Uuid",
            other => other.name(),
        }
    }

    /// Looks up the builtin type with the given well-known node id.
    pub fn from_node_id(node_id: &NodeId) -> Option<BuiltinDataType> {
        variant_for(node_id)
    }
}

/// A Rust type that backs one builtin data type.
///
/// Implemented for each canonical backing type and for common borrowed or
/// boxed forms of them (`&str`, `Box<str>`, `Vec<u8>`, ...), which map to the
/// same builtin as their canonical type.
pub trait BuiltinType: 'static {
    const DATA_TYPE: BuiltinDataType;
}

macro_rules! impl_builtin_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl BuiltinType for $ty {
                const DATA_TYPE: BuiltinDataType = BuiltinDataType::$variant;
            }
        )*
    };
}

impl_builtin_type! {
    bool => Boolean,
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    String => String,
    DateTime => DateTime,
    Uuid => Guid,
    ByteString => ByteString,
    XmlElement => XmlElement,
    NodeId => NodeId,
    ExpandedNodeId => ExpandedNodeId,
    StatusCode => StatusCode,
    QualifiedName => QualifiedName,
    LocalizedText => LocalizedText,
    ExtensionObject => ExtensionObject,
    DataValue => DataValue,
    Variant => Variant,
    DiagnosticInfo => DiagnosticInfo,
    &'static str => String,
    Box<str> => String,
    Cow<'static, str> => String,
    Vec<u8> => ByteString,
    &'static [u8] => ByteString,
    Box<[u8]> => ByteString,
}

/// Maps a non-canonical representation to the canonical backing type.
fn alias_table() -> [(TypeId, BuiltinDataType); 6] {
    [
        (TypeId::of::<&'static str>(), BuiltinDataType::String),
        (TypeId::of::<Box<str>>(), BuiltinDataType::String),
        (TypeId::of::<Cow<'static, str>>(), BuiltinDataType::String),
        (TypeId::of::<Vec<u8>>(), BuiltinDataType::ByteString),
        (TypeId::of::<&'static [u8]>(), BuiltinDataType::ByteString),
        (TypeId::of::<Box<[u8]>>(), BuiltinDataType::ByteString),
    ]
}

struct BuiltinTypeRegistry {
    backing_by_id: FxHashMap<u8, TypeId>,
    id_by_backing: FxHashMap<TypeId, u8>,
    backing_by_node_id: FxHashMap<NodeId, TypeId>,
    node_id_by_backing: FxHashMap<TypeId, NodeId>,
    variant_by_node_id: FxHashMap<NodeId, BuiltinDataType>,
    canonical: FxHashMap<TypeId, TypeId>,
}

impl BuiltinTypeRegistry {
    fn build() -> Self {
        let mut registry = BuiltinTypeRegistry {
            backing_by_id: FxHashMap::default(),
            id_by_backing: FxHashMap::default(),
            backing_by_node_id: FxHashMap::default(),
            node_id_by_backing: FxHashMap::default(),
            variant_by_node_id: FxHashMap::default(),
            canonical: FxHashMap::default(),
        };

        for data_type in BuiltinDataType::ALL {
            let backing = data_type.backing_type();
            let node_id = data_type.node_id();

            registry.backing_by_id.insert(data_type.id(), backing);
            registry.id_by_backing.insert(backing, data_type.id());
            registry.backing_by_node_id.insert(node_id.clone(), backing);
            registry.node_id_by_backing.insert(backing, node_id.clone());
            registry.variant_by_node_id.insert(node_id, data_type);
        }

        for (alias, data_type) in alias_table() {
            registry.canonical.insert(alias, data_type.backing_type());
        }

        trace!(
            "builtin type registry built: {} types, {} aliases",
            registry.backing_by_id.len(),
            registry.canonical.len()
        );
        registry
    }

    fn normalize(&self, backing: TypeId) -> TypeId {
        self.canonical.get(&backing).copied().unwrap_or(backing)
    }
}

lazy_static! {
    static ref REGISTRY: BuiltinTypeRegistry = BuiltinTypeRegistry::build();
}

/// Normalizes a backing `TypeId` to the canonical backing type.
///
/// Borrowed and boxed forms (`&str`, `Box<str>`, `Vec<u8>`, ...) map to
/// `String` or `ByteString`; every other `TypeId` is returned unchanged.
pub fn normalize(backing: TypeId) -> TypeId {
    REGISTRY.normalize(backing)
}

/// Returns the wire type id for a backing type.
pub fn id_for(backing: TypeId) -> Option<u8> {
    REGISTRY.id_by_backing.get(&normalize(backing)).copied()
}

/// Returns the wire type id for `T`, resolved at compile time.
pub fn id_of<T: BuiltinType>() -> u8 {
    T::DATA_TYPE.id()
}

/// Returns the well-known node id for a backing type.
pub fn node_id_for(backing: TypeId) -> Option<NodeId> {
    REGISTRY.node_id_by_backing.get(&normalize(backing)).cloned()
}

/// Returns the backing type for a wire type id.
pub fn backing_type_for_id(id: u8) -> Option<TypeId> {
    REGISTRY.backing_by_id.get(&id).copied()
}

/// Returns the backing type for a well-known node id.
pub fn backing_type_for_node_id(node_id: &NodeId) -> Option<TypeId> {
    REGISTRY.backing_by_node_id.get(node_id).copied()
}

/// Returns the backing type for an expanded node id.
///
/// Resolves only when the id is local, lives in namespace 0 (by index, or by
/// the OPC UA namespace URI) and has a numeric identifier.
pub fn backing_type_for_expanded(xni: &ExpandedNodeId) -> Option<TypeId> {
    let node_id = xni.local_default()?;
    node_id.as_ns0_numeric()?;
    backing_type_for_node_id(&node_id)
}

/// Returns the builtin type for a well-known node id.
pub fn variant_for(node_id: &NodeId) -> Option<BuiltinDataType> {
    REGISTRY.variant_by_node_id.get(node_id).copied()
}

/// True if `node_id` is one of the builtin type ids.
pub fn is_builtin(node_id: &NodeId) -> bool {
    REGISTRY.variant_by_node_id.contains_key(node_id)
}

/// True if `xni` has a local form that is a builtin type id.
pub fn is_builtin_expanded(xni: &ExpandedNodeId) -> bool {
    xni.local_default().is_some_and(|node_id| is_builtin(&node_id))
}

/// True if `backing` (after normalization) backs a builtin type.
pub fn is_builtin_backing(backing: TypeId) -> bool {
    REGISTRY.id_by_backing.contains_key(&normalize(backing))
}
