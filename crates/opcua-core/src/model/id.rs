//! Node identifiers.
//!
//! A [`NodeId`] is a namespace index plus an identifier of one of four kinds.
//! An [`ExpandedNodeId`] may name its namespace by URI instead of index and
//! may point at a remote server.
//!
//! Both render to and parse from the OPC UA text form:
//! ```text
//! ns=2;s=Machine/Speed
//! i=85
//! svr=1;nsu=urn:example;g=72962b91-fa75-4ae6-8d28-b404dc7daf63
//! ```

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use uuid::Uuid;

use crate::error::NodeIdParseError;
use crate::identifiers::OPC_UA_NAMESPACE;
use crate::model::ByteString;
use crate::namespace::NamespaceTable;

/// The kind of an [`Identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IdType {
    Numeric = 0,
    String = 1,
    Guid = 2,
    Opaque = 3,
}

/// The identifier part of a node id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    Numeric(u32),
    String(String),
    Guid(Uuid),
    Opaque(ByteString),
}

impl Identifier {
    /// Returns the kind of this identifier.
    pub fn id_type(&self) -> IdType {
        match self {
            Identifier::Numeric(_) => IdType::Numeric,
            Identifier::String(_) => IdType::String,
            Identifier::Guid(_) => IdType::Guid,
            Identifier::Opaque(_) => IdType::Opaque,
        }
    }

    /// Returns the numeric value, if this is a numeric identifier.
    pub fn as_numeric(&self) -> Option<u32> {
        match self {
            Identifier::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns true for the null value of each identifier kind.
    fn is_null(&self) -> bool {
        match self {
            Identifier::Numeric(v) => *v == 0,
            Identifier::String(s) => s.is_empty(),
            Identifier::Guid(g) => g.is_nil(),
            Identifier::Opaque(b) => b.is_null_or_empty(),
        }
    }

    fn parse(s: &str) -> Result<Identifier, NodeIdParseError> {
        if s.len() < 2 || !s.is_char_boundary(2) {
            return Err(NodeIdParseError::TooShort { input: s.to_string() });
        }

        let (prefix, value) = s.split_at(2);
        match prefix {
            "i=" => value
                .parse::<u32>()
                .map(Identifier::Numeric)
                .map_err(|_| NodeIdParseError::InvalidNumeric { value: value.to_string() }),
            "s=" => Ok(Identifier::String(value.to_string())),
            "g=" => Uuid::parse_str(value)
                .map(Identifier::Guid)
                .map_err(|_| NodeIdParseError::InvalidGuid { value: value.to_string() }),
            "b=" => BASE64
                .decode(value)
                .map(|bytes| Identifier::Opaque(ByteString::from(bytes)))
                .map_err(|_| NodeIdParseError::InvalidOpaque),
            _ => Err(NodeIdParseError::UnknownIdentifierType {
                prefix: prefix.to_string(),
            }),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(s) => write!(f, "s={}", s),
            Identifier::Guid(g) => write!(f, "g={}", g),
            Identifier::Opaque(b) => match b.as_bytes() {
                Some(bytes) => write!(f, "b={}", BASE64.encode(bytes)),
                None => f.write_str("b="),
            },
        }
    }
}

impl From<u32> for Identifier {
    fn from(v: u32) -> Self {
        Identifier::Numeric(v)
    }
}

impl From<&str> for Identifier {
    fn from(v: &str) -> Self {
        Identifier::String(v.to_string())
    }
}

impl From<String> for Identifier {
    fn from(v: String) -> Self {
        Identifier::String(v)
    }
}

impl From<Uuid> for Identifier {
    fn from(v: Uuid) -> Self {
        Identifier::Guid(v)
    }
}

impl From<ByteString> for Identifier {
    fn from(v: ByteString) -> Self {
        Identifier::Opaque(v)
    }
}

/// Identifies a node within one server's address space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub namespace_index: u16,
    pub identifier: Identifier,
}

impl NodeId {
    /// The null node id (`ns=0;i=0`).
    pub const NULL: NodeId = NodeId::numeric(0, 0);

    /// Creates a node id from any identifier kind.
    pub fn new(namespace_index: u16, identifier: impl Into<Identifier>) -> Self {
        Self {
            namespace_index,
            identifier: identifier.into(),
        }
    }

    /// Creates a numeric node id. Usable in const context.
    pub const fn numeric(namespace_index: u16, id: u32) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Numeric(id),
        }
    }

    /// Returns the identifier kind.
    pub fn id_type(&self) -> IdType {
        self.identifier.id_type()
    }

    /// Returns the numeric identifier if this id lives in namespace 0 and is numeric.
    pub fn as_ns0_numeric(&self) -> Option<u32> {
        if self.namespace_index == 0 {
            self.identifier.as_numeric()
        } else {
            None
        }
    }

    /// Returns true if this is the null value of its identifier kind in namespace 0.
    pub fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.identifier.is_null()
    }

    /// Returns a copy of this id in another namespace.
    pub fn with_namespace_index(&self, namespace_index: u16) -> NodeId {
        NodeId {
            namespace_index,
            identifier: self.identifier.clone(),
        }
    }

    /// Moves this id to the index `namespace_uri` has in `table`.
    ///
    /// Returns an unchanged copy when the URI is not registered.
    pub fn reindex(&self, table: &NamespaceTable, namespace_uri: &str) -> NodeId {
        match table.get_index(namespace_uri) {
            Some(index) if index != self.namespace_index => self.with_namespace_index(index),
            _ => self.clone(),
        }
    }

    /// Converts to a relative, local [`ExpandedNodeId`].
    pub fn expanded(&self) -> ExpandedNodeId {
        ExpandedNodeId {
            namespace_index: self.namespace_index,
            namespace_uri: None,
            identifier: self.identifier.clone(),
            server_index: 0,
        }
    }

    /// Converts to an absolute [`ExpandedNodeId`], resolving the namespace URI in `table`.
    pub fn expanded_with(&self, table: &NamespaceTable) -> ExpandedNodeId {
        ExpandedNodeId {
            namespace_index: self.namespace_index,
            namespace_uri: table.get_uri(self.namespace_index),
            identifier: self.identifier.clone(),
            server_index: 0,
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::NULL
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index > 0 {
            write!(f, "ns={};", self.namespace_index)?;
        }
        write!(f, "{}", self.identifier)
    }
}

impl FromStr for NodeId {
    type Err = NodeIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace_index, rest) = match s.strip_prefix("ns=") {
            Some(rest) => {
                let (index, rest) = rest
                    .split_once(';')
                    .ok_or(NodeIdParseError::MissingSeparator { prefix: "ns=" })?;
                (parse_namespace_index(index)?, rest)
            }
            None => (0, s),
        };

        Ok(NodeId {
            namespace_index,
            identifier: Identifier::parse(rest)?,
        })
    }
}

/// A node id that may carry a namespace URI and a server index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandedNodeId {
    pub namespace_index: u16,
    pub namespace_uri: Option<String>,
    pub identifier: Identifier,
    pub server_index: u32,
}

impl ExpandedNodeId {
    /// The null expanded node id.
    pub const NULL: ExpandedNodeId = ExpandedNodeId {
        namespace_index: 0,
        namespace_uri: None,
        identifier: Identifier::Numeric(0),
        server_index: 0,
    };

    /// Creates a relative, local expanded id.
    pub fn new(namespace_index: u16, identifier: impl Into<Identifier>) -> Self {
        Self {
            namespace_index,
            namespace_uri: None,
            identifier: identifier.into(),
            server_index: 0,
        }
    }

    /// Creates an absolute, local expanded id naming its namespace by URI.
    pub fn with_uri(namespace_uri: impl Into<String>, identifier: impl Into<Identifier>) -> Self {
        Self {
            namespace_index: 0,
            namespace_uri: Some(namespace_uri.into()),
            identifier: identifier.into(),
            server_index: 0,
        }
    }

    /// Returns a copy pointing at another server.
    pub fn on_server(mut self, server_index: u32) -> Self {
        self.server_index = server_index;
        self
    }

    /// Returns the identifier kind.
    pub fn id_type(&self) -> IdType {
        self.identifier.id_type()
    }

    /// True when a namespace URI is given instead of an index.
    pub fn is_absolute(&self) -> bool {
        self.namespace_uri.is_some()
    }

    /// True when the namespace is given by index.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// True when the node lives on the local server (`server_index == 0`).
    pub fn is_local(&self) -> bool {
        self.server_index == 0
    }

    /// Returns true if this is the null value of its identifier kind.
    pub fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.identifier.is_null()
    }

    /// Resolves to a local [`NodeId`] using `table` for absolute ids.
    ///
    /// `None` when the node is remote or its namespace URI is not registered.
    pub fn local(&self, table: &NamespaceTable) -> Option<NodeId> {
        self.local_by(|uri| table.get_index(uri))
    }

    /// Resolves to a local [`NodeId`] without a namespace table.
    ///
    /// Only the OPC UA namespace URI resolves (to index 0); any other URI
    /// yields `None`.
    pub fn local_default(&self) -> Option<NodeId> {
        self.local_by(|uri| (uri == OPC_UA_NAMESPACE).then_some(0))
    }

    fn local_by(&self, index_of: impl FnOnce(&str) -> Option<u16>) -> Option<NodeId> {
        if !self.is_local() {
            return None;
        }

        let namespace_index = match self.namespace_uri.as_deref() {
            None | Some("") => self.namespace_index,
            Some(uri) => index_of(uri)?,
        };

        Some(NodeId {
            namespace_index,
            identifier: self.identifier.clone(),
        })
    }
}

impl Default for ExpandedNodeId {
    fn default() -> Self {
        ExpandedNodeId::NULL
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        ExpandedNodeId {
            namespace_index: node_id.namespace_index,
            namespace_uri: None,
            identifier: node_id.identifier,
            server_index: 0,
        }
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.server_index > 0 {
            write!(f, "svr={};", self.server_index)?;
        }
        match &self.namespace_uri {
            Some(uri) => write!(f, "nsu={};", uri)?,
            None if self.namespace_index > 0 => write!(f, "ns={};", self.namespace_index)?,
            None => {}
        }
        write!(f, "{}", self.identifier)
    }
}

impl FromStr for ExpandedNodeId {
    type Err = NodeIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s;
        let mut server_index = 0u32;
        let mut namespace_index = 0u16;
        let mut namespace_uri = None;

        if let Some(after) = rest.strip_prefix("svr=") {
            let (value, tail) = after
                .split_once(';')
                .ok_or(NodeIdParseError::MissingSeparator { prefix: "svr=" })?;
            server_index = value
                .parse()
                .map_err(|_| NodeIdParseError::InvalidServerIndex { value: value.to_string() })?;
            rest = tail;
        }

        if let Some(after) = rest.strip_prefix("nsu=") {
            let (uri, tail) = after
                .split_once(';')
                .ok_or(NodeIdParseError::MissingSeparator { prefix: "nsu=" })?;
            namespace_uri = Some(uri.to_string());
            rest = tail;
        } else if let Some(after) = rest.strip_prefix("ns=") {
            let (value, tail) = after
                .split_once(';')
                .ok_or(NodeIdParseError::MissingSeparator { prefix: "ns=" })?;
            namespace_index = parse_namespace_index(value)?;
            rest = tail;
        }

        Ok(ExpandedNodeId {
            namespace_index,
            namespace_uri,
            identifier: Identifier::parse(rest)?,
            server_index,
        })
    }
}

fn parse_namespace_index(value: &str) -> Result<u16, NodeIdParseError> {
    value
        .parse()
        .map_err(|_| NodeIdParseError::InvalidNamespaceIndex { value: value.to_string() })
}
