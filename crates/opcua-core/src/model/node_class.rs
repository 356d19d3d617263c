//! Node classes of the address space.

/// The category of a node, which decides its legal attributes.
///
/// Wire values are single bits so that browse requests can mask several
/// classes at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum NodeClass {
    Unspecified = 0,
    Object = 1,
    Variable = 2,
    Method = 4,
    ObjectType = 8,
    VariableType = 16,
    ReferenceType = 32,
    DataType = 64,
    View = 128,
}

impl NodeClass {
    /// All concrete node classes, excluding `Unspecified`.
    pub const ALL: [NodeClass; 8] = [
        NodeClass::Object,
        NodeClass::Variable,
        NodeClass::Method,
        NodeClass::ObjectType,
        NodeClass::VariableType,
        NodeClass::ReferenceType,
        NodeClass::DataType,
        NodeClass::View,
    ];

    /// Creates a NodeClass from its wire value. Unknown values map to `Unspecified`.
    pub fn from_u32(v: u32) -> NodeClass {
        match v {
            1 => NodeClass::Object,
            2 => NodeClass::Variable,
            4 => NodeClass::Method,
            8 => NodeClass::ObjectType,
            16 => NodeClass::VariableType,
            32 => NodeClass::ReferenceType,
            64 => NodeClass::DataType,
            128 => NodeClass::View,
            _ => NodeClass::Unspecified,
        }
    }

    /// Returns the wire value.
    pub fn value(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u32() {
        for class in NodeClass::ALL {
            assert_eq!(NodeClass::from_u32(class.value()), class);
        }
        assert_eq!(NodeClass::from_u32(0), NodeClass::Unspecified);
        assert_eq!(NodeClass::from_u32(3), NodeClass::Unspecified);
        assert_eq!(NodeClass::from_u32(256), NodeClass::Unspecified);
    }
}
