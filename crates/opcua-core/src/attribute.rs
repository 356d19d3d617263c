//! Attribute catalog.
//!
//! Every node carries a fixed set of attributes determined by its
//! [`NodeClass`]. All classes share a base set of ten; each class adds its
//! own on top.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::limits::ATTRIBUTE_COUNT;
use crate::model::NodeClass;

/// Attribute identifiers. The discriminant is the id used on the wire.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeId {
    NodeId = 1,
    NodeClass = 2,
    BrowseName = 3,
    DisplayName = 4,
    Description = 5,
    WriteMask = 6,
    UserWriteMask = 7,
    IsAbstract = 8,
    Symmetric = 9,
    InverseName = 10,
    ContainsNoLoops = 11,
    EventNotifier = 12,
    Value = 13,
    DataType = 14,
    ValueRank = 15,
    ArrayDimensions = 16,
    AccessLevel = 17,
    UserAccessLevel = 18,
    MinimumSamplingInterval = 19,
    Historizing = 20,
    Executable = 21,
    UserExecutable = 22,
    DataTypeDefinition = 23,
    RolePermissions = 24,
    UserRolePermissions = 25,
    AccessRestrictions = 26,
    AccessLevelEx = 27,
}

/// Set of attributes a node class carries.
pub type AttributeSet = FxHashSet<AttributeId>;

impl AttributeId {
    /// All attributes in id order.
    pub const ALL: [AttributeId; ATTRIBUTE_COUNT] = [
        AttributeId::NodeId,
        AttributeId::NodeClass,
        AttributeId::BrowseName,
        AttributeId::DisplayName,
        AttributeId::Description,
        AttributeId::WriteMask,
        AttributeId::UserWriteMask,
        AttributeId::IsAbstract,
        AttributeId::Symmetric,
        AttributeId::InverseName,
        AttributeId::ContainsNoLoops,
        AttributeId::EventNotifier,
        AttributeId::Value,
        AttributeId::DataType,
        AttributeId::ValueRank,
        AttributeId::ArrayDimensions,
        AttributeId::AccessLevel,
        AttributeId::UserAccessLevel,
        AttributeId::MinimumSamplingInterval,
        AttributeId::Historizing,
        AttributeId::Executable,
        AttributeId::UserExecutable,
        AttributeId::DataTypeDefinition,
        AttributeId::RolePermissions,
        AttributeId::UserRolePermissions,
        AttributeId::AccessRestrictions,
        AttributeId::AccessLevelEx,
    ];

    pub fn from_id(id: u32) -> Option<AttributeId> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn is_valid(id: u32) -> bool {
        Self::from_id(id).is_some()
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Compares against a raw id that may be absent.
    pub fn matches(self, id: Option<u32>) -> bool {
        id == Some(self.id())
    }

    pub fn name(self) -> &'static str {
        match self {
            AttributeId::NodeId => "NodeId",
            AttributeId::NodeClass => "NodeClass",
            AttributeId::BrowseName => "BrowseName",
            AttributeId::DisplayName => "DisplayName",
            AttributeId::Description => "Description",
            AttributeId::WriteMask => "WriteMask",
            AttributeId::UserWriteMask => "UserWriteMask",
            AttributeId::IsAbstract => "IsAbstract",
            AttributeId::Symmetric => "Symmetric",
            AttributeId::InverseName => "InverseName",
            AttributeId::ContainsNoLoops => "ContainsNoLoops",
            AttributeId::EventNotifier => "EventNotifier",
            AttributeId::Value => "Value",
            AttributeId::DataType => "DataType",
            AttributeId::ValueRank => "ValueRank",
            AttributeId::ArrayDimensions => "ArrayDimensions",
            AttributeId::AccessLevel => "AccessLevel",
            AttributeId::UserAccessLevel => "UserAccessLevel",
            AttributeId::MinimumSamplingInterval => "MinimumSamplingInterval",
            AttributeId::Historizing => "Historizing",
            AttributeId::Executable => "Executable",
            AttributeId::UserExecutable => "UserExecutable",
            AttributeId::DataTypeDefinition => "DataTypeDefinition",
            AttributeId::RolePermissions => "RolePermissions",
            AttributeId::UserRolePermissions => "UserRolePermissions",
            AttributeId::AccessRestrictions => "AccessRestrictions",
            AttributeId::AccessLevelEx => "AccessLevelEx",
        }
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attributes every node class carries.
pub const BASE_ATTRIBUTES: [AttributeId; 10] = [
    AttributeId::NodeId,
    AttributeId::NodeClass,
    AttributeId::BrowseName,
    AttributeId::DisplayName,
    AttributeId::Description,
    AttributeId::WriteMask,
    AttributeId::UserWriteMask,
    AttributeId::RolePermissions,
    AttributeId::UserRolePermissions,
    AttributeId::AccessRestrictions,
];

fn class_extras(node_class: NodeClass) -> &'static [AttributeId] {
    use AttributeId as A;

    match node_class {
        NodeClass::Unspecified => &[],
        NodeClass::Object => &[A::EventNotifier],
        NodeClass::Variable => &[
            A::Value,
            A::DataType,
            A::ValueRank,
            A::ArrayDimensions,
            A::AccessLevel,
            A::UserAccessLevel,
            A::MinimumSamplingInterval,
            A::Historizing,
            A::AccessLevelEx,
        ],
        NodeClass::Method => &[A::Executable, A::UserExecutable],
        NodeClass::ObjectType => &[A::IsAbstract],
        NodeClass::VariableType => &[
            A::Value,
            A::DataType,
            A::ValueRank,
            A::ArrayDimensions,
            A::IsAbstract,
        ],
        NodeClass::ReferenceType => &[A::IsAbstract, A::Symmetric, A::InverseName],
        NodeClass::DataType => &[A::IsAbstract, A::DataTypeDefinition],
        NodeClass::View => &[A::ContainsNoLoops, A::EventNotifier],
    }
}

lazy_static! {
    static ref BY_CLASS: FxHashMap<NodeClass, AttributeSet> = NodeClass::ALL
        .iter()
        .map(|&class| {
            let set = BASE_ATTRIBUTES
                .iter()
                .chain(class_extras(class))
                .copied()
                .collect();
            (class, set)
        })
        .collect();
    static ref EMPTY: AttributeSet = AttributeSet::default();
}

/// The attributes a node of `node_class` carries. Empty for
/// [`NodeClass::Unspecified`].
pub fn attributes(node_class: NodeClass) -> &'static AttributeSet {
    BY_CLASS.get(&node_class).unwrap_or(&EMPTY)
}

/// Attributes of `node_class` in id order.
pub fn sorted_attributes(node_class: NodeClass) -> Vec<AttributeId> {
    let mut list: Vec<_> = attributes(node_class).iter().copied().collect();
    list.sort();
    list
}
