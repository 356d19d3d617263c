//! Value types backing the builtin data types.
//!
//! Primitive builtins map onto Rust primitives (`bool`, `i32`, `f64`, ...),
//! `String` and `Uuid`. The remaining builtins are defined here.

use std::fmt;

use crate::builtin::BuiltinDataType;
use crate::model::{ExpandedNodeId, NodeId};

/// A sequence of octets that may be null (distinct from empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteString(Option<Vec<u8>>);

impl ByteString {
    /// The null byte string.
    pub const NULL: ByteString = ByteString(None);

    /// Returns the bytes, or `None` for the null value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.0.as_deref()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_null_or_empty(&self) -> bool {
        self.0.as_ref().is_none_or(|b| b.is_empty())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        ByteString(Some(bytes))
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        ByteString(Some(bytes.to_vec()))
    }
}

/// An XML fragment carried as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct XmlElement(pub Option<String>);

/// A timestamp in 100-nanosecond ticks since 1601-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(i64);

/// Ticks between 1601-01-01 and 1970-01-01.
const EPOCH_DELTA_TICKS: i64 = 116_444_736_000_000_000;
const TICKS_PER_MILLISECOND: i64 = 10_000;

impl DateTime {
    /// The minimum representable time, which encodes as "null" on the wire.
    pub const MIN: DateTime = DateTime(0);

    pub const fn from_ticks(ticks: i64) -> Self {
        DateTime(ticks)
    }

    /// Converts from milliseconds since the Unix epoch, clamping below at [`DateTime::MIN`].
    pub fn from_unix_millis(millis: i64) -> Self {
        let ticks = millis
            .saturating_mul(TICKS_PER_MILLISECOND)
            .saturating_add(EPOCH_DELTA_TICKS);
        DateTime(ticks.max(0))
    }

    pub fn ticks(self) -> i64 {
        self.0
    }

    pub fn unix_millis(self) -> i64 {
        self.0.saturating_sub(EPOCH_DELTA_TICKS) / TICKS_PER_MILLISECOND
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// A 32-bit OPC UA status code. The top two bits carry the severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(pub u32);

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode(0);
    pub const BAD_INTERNAL_ERROR: StatusCode = StatusCode(0x8002_0000);
    pub const BAD_NODE_ID_INVALID: StatusCode = StatusCode(0x8033_0000);

    const SEVERITY_MASK: u32 = 0xC000_0000;

    pub fn is_good(self) -> bool {
        self.0 & Self::SEVERITY_MASK == 0
    }

    pub fn is_uncertain(self) -> bool {
        self.0 & Self::SEVERITY_MASK == 0x4000_0000
    }

    pub fn is_bad(self) -> bool {
        self.0 & Self::SEVERITY_MASK == 0x8000_0000
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// A name qualified by a namespace index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace_index, self.name)
    }
}

/// Human-readable text with an optional locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocalizedText {
    pub locale: Option<String>,
    pub text: Option<String>,
}

impl LocalizedText {
    /// Text without a locale.
    pub fn english(text: impl Into<String>) -> Self {
        Self {
            locale: None,
            text: Some(text.into()),
        }
    }
}

/// Body of an [`ExtensionObject`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtensionObjectBody {
    #[default]
    None,
    Binary(ByteString),
    Xml(XmlElement),
}

/// An encoded structure tagged with its encoding id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionObject {
    pub encoding_id: NodeId,
    pub body: ExtensionObjectBody,
}

/// Vendor-specific diagnostics attached to a status code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticInfo {
    pub symbolic_id: Option<i32>,
    pub namespace_uri: Option<i32>,
    pub localized_text: Option<i32>,
    pub locale: Option<i32>,
    pub additional_info: Option<String>,
    pub inner_status_code: Option<StatusCode>,
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
}

/// A value with status and timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataValue {
    pub value: Variant,
    pub status: StatusCode,
    pub source_timestamp: Option<DateTime>,
    pub server_timestamp: Option<DateTime>,
}

/// A scalar of any builtin type, or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    #[default]
    Empty,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    DateTime(DateTime),
    Guid(uuid::Uuid),
    ByteString(ByteString),
    XmlElement(XmlElement),
    NodeId(NodeId),
    ExpandedNodeId(ExpandedNodeId),
    StatusCode(StatusCode),
    QualifiedName(QualifiedName),
    LocalizedText(LocalizedText),
    ExtensionObject(ExtensionObject),
    DataValue(Box<DataValue>),
    Variant(Box<Variant>),
    DiagnosticInfo(Box<DiagnosticInfo>),
}

impl Variant {
    /// Returns the builtin type of the held value, or `None` when empty.
    pub fn data_type(&self) -> Option<BuiltinDataType> {
        let data_type = match self {
            Variant::Empty => return None,
            Variant::Boolean(_) => BuiltinDataType::Boolean,
            Variant::SByte(_) => BuiltinDataType::SByte,
            Variant::Byte(_) => BuiltinDataType::Byte,
            Variant::Int16(_) => BuiltinDataType::Int16,
            Variant::UInt16(_) => BuiltinDataType::UInt16,
            Variant::Int32(_) => BuiltinDataType::Int32,
            Variant::UInt32(_) => BuiltinDataType::UInt32,
            Variant::Int64(_) => BuiltinDataType::Int64,
            Variant::UInt64(_) => BuiltinDataType::UInt64,
            Variant::Float(_) => BuiltinDataType::Float,
            Variant::Double(_) => BuiltinDataType::Double,
            Variant::String(_) => BuiltinDataType::String,
            Variant::DateTime(_) => BuiltinDataType::DateTime,
            Variant::Guid(_) => BuiltinDataType::Guid,
            Variant::ByteString(_) => BuiltinDataType::ByteString,
            Variant::XmlElement(_) => BuiltinDataType::XmlElement,
            Variant::NodeId(_) => BuiltinDataType::NodeId,
            Variant::ExpandedNodeId(_) => BuiltinDataType::ExpandedNodeId,
            Variant::StatusCode(_) => BuiltinDataType::StatusCode,
            Variant::QualifiedName(_) => BuiltinDataType::QualifiedName,
            Variant::LocalizedText(_) => BuiltinDataType::LocalizedText,
            Variant::ExtensionObject(_) => BuiltinDataType::ExtensionObject,
            Variant::DataValue(_) => BuiltinDataType::DataValue,
            Variant::Variant(_) => BuiltinDataType::Variant,
            Variant::DiagnosticInfo(_) => BuiltinDataType::DiagnosticInfo,
        };
        Some(data_type)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_severity() {
        assert!(StatusCode::GOOD.is_good());
        assert!(StatusCode::BAD_INTERNAL_ERROR.is_bad());
        assert!(StatusCode(0x4000_0000).is_uncertain());
        assert_eq!(StatusCode::BAD_NODE_ID_INVALID.to_string(), "0x80330000");
    }

    #[test]
    fn test_byte_string_null_vs_empty() {
        assert!(ByteString::NULL.is_null());
        assert!(ByteString::NULL.is_null_or_empty());

        let empty = ByteString::from(Vec::new());
        assert!(!empty.is_null());
        assert!(empty.is_null_or_empty());
        assert_eq!(empty.as_bytes(), Some(&[][..]));
    }

    #[test]
    fn test_date_time_unix_conversion() {
        let dt = DateTime::from_unix_millis(0);
        assert_eq!(dt.ticks(), EPOCH_DELTA_TICKS);
        assert_eq!(dt.unix_millis(), 0);

        let dt = DateTime::from_unix_millis(1_700_000_000_123);
        assert_eq!(dt.unix_millis(), 1_700_000_000_123);

        // Before 1601 clamps to the null value.
        assert!(DateTime::from_unix_millis(i64::MIN).is_null());
    }

    #[test]
    fn test_date_time_unix_millis_saturates() {
        let min = i64::MIN / TICKS_PER_MILLISECOND;
        assert_eq!(DateTime::from_ticks(i64::MIN).unix_millis(), min);
        assert_eq!(DateTime::MIN.unix_millis(), -EPOCH_DELTA_TICKS / TICKS_PER_MILLISECOND);
    }

    #[test]
    fn test_variant_data_type() {
        assert_eq!(Variant::Empty.data_type(), None);
        assert_eq!(Variant::Double(1.5).data_type(), Some(BuiltinDataType::Double));
        assert_eq!(
            Variant::Variant(Box::new(Variant::Boolean(true))).data_type(),
            Some(BuiltinDataType::Variant)
        );
        assert_eq!(
            Variant::QualifiedName(QualifiedName::new(0, "x")).data_type(),
            Some(BuiltinDataType::QualifiedName)
        );
    }
}
