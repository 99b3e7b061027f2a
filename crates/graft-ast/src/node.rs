use std::collections::HashMap;

use crate::kind::NodeKind;

/// An attribute value held by a [`Node`].
///
/// Leaf variants cover the builtin leaf categories of the grammar; `Node`
/// and `List` hold child subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Node(Box<Node>),
    List(Vec<Node>),
    Ident(String),
    Str(String),
    Int(i64),
    Bytes(Vec<u8>),
}

impl Value {
    /// Whether this value counts as missing for repair purposes.
    ///
    /// Missing means the category's zero-value: null, an empty list, an
    /// empty identifier/string/bytes, or the integer zero. A present
    /// subtree is never missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Node(_) => false,
            Value::List(items) => items.is_empty(),
            Value::Ident(s) | Value::Str(s) => s.is_empty(),
            Value::Int(n) => *n == 0,
            Value::Bytes(b) => b.is_empty(),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A mutable tree node, owned by the caller.
///
/// The schema layer reads and writes attributes by name; it never allocates
/// or frees whole trees on the caller's behalf. An attribute that was never
/// set reads as absent, which repair treats the same as [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    attrs: HashMap<String, Value>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, attrs: HashMap::new() }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.attrs.insert(name.into(), value);
    }

    /// Builder-style `set`, for constructing nodes inline.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set(name, value);
        self
    }
}
