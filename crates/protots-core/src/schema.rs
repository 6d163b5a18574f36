//! In-memory schema tree.
//!
//! The tree is produced by an external loader (the CLI crate compiles
//! `.proto` files into it) and consumed read-only by the generators.
//! Child order everywhere is declaration order in the source file; the
//! emitters rely on it for deterministic output.

/// One node in the schema tree.
///
/// A closed set of variants; generators dispatch with exhaustive `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Structural grouping (a protobuf package segment or an enclosing
    /// message acting as a scope for nested declarations).
    Namespace(Namespace),
    /// A message type.
    Message(Message),
    /// An enumeration.
    Enum(EnumDecl),
    /// An RPC service.
    Service(Service),
}

/// A named grouping of child nodes.
///
/// Namespace names are unique among siblings; messages, enums and
/// services at the same level are the parser's responsibility.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Namespace {
    pub name: String,
    pub children: Vec<SchemaNode>,
}

impl Namespace {
    /// Create an empty namespace with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Namespace {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Resolve a dotted path (`a.b.c`) against this namespace.
    ///
    /// Descends one child namespace per segment. Returns `None` as soon
    /// as any segment does not name a child namespace; a partial prefix
    /// match is not a match.
    pub fn resolve(&self, dotted: &str) -> Option<&Namespace> {
        let mut current = self;
        for segment in dotted.split('.') {
            current = current.children.iter().find_map(|child| match child {
                SchemaNode::Namespace(ns) if ns.name == segment => Some(ns),
                _ => None,
            })?;
        }
        Some(current)
    }
}

/// A message type: one emitted data-structure declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub name: String,
    /// Leading doc comment, lines joined with `\n`.
    pub doc: Option<String>,
    pub fields: Vec<Field>,
}

/// A single message field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Scalar name (`string`, `int32`, ...) or a simple/dotted reference
    /// to another message or enum. References are never validated here;
    /// unknown names pass through to the output unchanged.
    pub type_name: String,
    pub repeated: bool,
    /// Absence of `required` means optional (emitted with a `?` marker).
    pub required: bool,
    pub doc: Option<String>,
}

/// An enumeration with explicit value numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub doc: Option<String>,
    /// Declaration order; numbers need not be contiguous or start at 0.
    pub values: Vec<EnumValue>,
}

/// One enum value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

/// An RPC service.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,
    pub doc: Option<String>,
    pub methods: Vec<Method>,
}

/// One RPC method.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub request_type: String,
    pub response_type: String,
    /// The client sends a stream of requests. Does not change the
    /// emitted return shape; the request parameter keeps the same type
    /// reference.
    pub request_stream: bool,
    /// The server responds with a stream; emitted as `AsyncIterable`.
    pub response_stream: bool,
    pub doc: Option<String>,
}
