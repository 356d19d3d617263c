//! Error types for the namespace table and identifier parsing.
//!
//! Lookups that miss (unknown builtin type, unknown reference type, attribute
//! id out of range) are not errors; they return `None`.

use thiserror::Error;

use crate::model::StatusCode;

/// Error raised by [`NamespaceTable`](crate::NamespaceTable) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// No free index is left below the table ceiling.
    #[error("namespace table full: no free index for {uri:?} (max entries: {max})")]
    TableFull { uri: String, max: usize },
}

impl NamespaceError {
    /// Returns the OPC UA status code carried by this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NamespaceError::TableFull { .. } => StatusCode::BAD_INTERNAL_ERROR,
        }
    }
}

/// Error parsing the textual form of a [`NodeId`](crate::NodeId) or
/// [`ExpandedNodeId`](crate::ExpandedNodeId).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeIdParseError {
    #[error("missing ';' after {prefix:?} prefix")]
    MissingSeparator { prefix: &'static str },

    #[error("invalid namespace index: {value:?}")]
    InvalidNamespaceIndex { value: String },

    #[error("invalid server index: {value:?}")]
    InvalidServerIndex { value: String },

    #[error("unknown identifier type: {prefix:?}")]
    UnknownIdentifierType { prefix: String },

    #[error("invalid numeric identifier: {value:?}")]
    InvalidNumeric { value: String },

    #[error("invalid guid identifier: {value:?}")]
    InvalidGuid { value: String },

    #[error("invalid base64 in opaque identifier")]
    InvalidOpaque,

    #[error("identifier too short: {input:?}")]
    TooShort { input: String },
}

impl NodeIdParseError {
    /// Returns the OPC UA status code carried by this error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_NODE_ID_INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_full_message() {
        let err = NamespaceError::TableFull {
            uri: "urn:x".to_string(),
            max: 3,
        };
        assert_eq!(
            err.to_string(),
            "namespace table full: no free index for \"urn:x\" (max entries: 3)"
        );
        assert_eq!(err.status_code(), StatusCode::BAD_INTERNAL_ERROR);
    }

    #[test]
    fn test_parse_error_status() {
        let err = NodeIdParseError::InvalidOpaque;
        assert!(err.status_code().is_bad());
        assert_eq!(err.status_code(), StatusCode::BAD_NODE_ID_INVALID);
    }
}
