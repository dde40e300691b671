//! Core triple types
//!
//! The encoder and the reverse pipeline share this structured model; the
//! line-oriented statement grammar exists only at file boundaries (see the
//! `format` and `parser` modules).

use serde::{Deserialize, Serialize};

/// Reserved predicate carrying a node's declared type.
pub const TYPE_PREDICATE: &str = "dgraph.type";

/// Identifier of a blank node, stored without the `_:` sigil.
///
/// Identifiers are derived from the path of keys and array indices leading
/// to the node, so the same path always yields the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identifier from its raw (sigil-less) form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier without the `_:` sigil
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Declared type of a container node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// A JSON object
    Object,
    /// A JSON array
    Array,
}

impl NodeType {
    /// Type name as it appears in statement text
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Object => "Object",
            NodeType::Array => "Array",
        }
    }

    /// Parse a declared type name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Object" => Some(NodeType::Object),
            "Array" => Some(NodeType::Array),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Datatype annotation carried by a typed literal
///
/// Strings and the `null` sentinel stay unannotated on the wire, so they
/// have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Datatype {
    Boolean,
    Int,
    Float,
}

impl Datatype {
    /// Tag name as it appears inside the `^^<xs:...>` annotation
    pub fn as_str(self) -> &'static str {
        match self {
            Datatype::Boolean => "boolean",
            Datatype::Int => "int",
            Datatype::Float => "float",
        }
    }

    /// Parse an annotation tag name
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "boolean" => Some(Datatype::Boolean),
            "int" => Some(Datatype::Int),
            "float" => Some(Datatype::Float),
            _ => None,
        }
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value with an optional datatype annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    /// The rendered value, unescaped
    pub value: String,
    /// Annotation, if the grammar carries one for this value kind
    pub datatype: Option<Datatype>,
}

impl Literal {
    /// An unannotated literal
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
        }
    }

    /// A literal with a datatype annotation
    pub fn typed(value: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype),
        }
    }

    /// The unannotated `null` sentinel
    pub fn null() -> Self {
        Self::string("null")
    }
}

/// Object position of a statement: a reference to another node, or a literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Node(NodeId),
    Literal(Literal),
}

/// A subject-predicate-object statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: NodeId,
    /// Raw JSON key or stringified array index
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    /// Declare a node's type
    pub fn node_type(subject: NodeId, node_type: NodeType) -> Self {
        Self {
            subject,
            predicate: TYPE_PREDICATE.to_string(),
            object: Term::Literal(Literal::string(node_type.as_str())),
        }
    }

    /// Link a parent node to a child node
    pub fn link(parent: NodeId, predicate: impl Into<String>, child: NodeId) -> Self {
        Self {
            subject: parent,
            predicate: predicate.into(),
            object: Term::Node(child),
        }
    }

    /// Attach a literal value to a node
    pub fn literal(subject: NodeId, predicate: impl Into<String>, literal: Literal) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: Term::Literal(literal),
        }
    }

    /// Whether this is a reserved `dgraph.type` statement
    pub fn is_type(&self) -> bool {
        self.predicate == TYPE_PREDICATE
    }
}
