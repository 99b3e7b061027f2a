//! Minimal grammar-valid placeholder subtrees ("chaff").
//!
//! Every constructor allocates a fresh tree on each call: placeholders are
//! attached at distinct tree positions and may be mutated in place later,
//! so nothing here is shared or cached.

use crate::error::{Result, SchemaError};
use crate::kind::{Group, NodeKind};
use crate::node::{Node, Value};
use crate::schema::Category;

/// A no-op statement.
pub fn stmt() -> Node {
    Node::new(NodeKind::Pass)
}

/// A constant literal expression.
pub fn expr() -> Node {
    Node::new(NodeKind::Constant).with("value", Value::Int(42))
}

/// An identifier in store (definition) context, valid as an assignment
/// target.
pub fn name() -> Node {
    Node::new(NodeKind::Name)
        .with("id", Value::Ident("_".to_string()))
        .with("ctx", Value::Node(Box::new(Node::new(NodeKind::Store))))
}

/// A simple index slice wrapping a fresh expression placeholder.
pub fn slice() -> Node {
    Node::new(NodeKind::Index).with("value", Value::Node(Box::new(expr())))
}

/// A keyword argument with a fresh expression value.
pub fn keyword() -> Node {
    Node::new(NodeKind::Keyword)
        .with("arg", Value::Ident("_".to_string()))
        .with("value", Value::Node(Box::new(expr())))
}

/// A formal parameter.
pub fn arg() -> Node {
    Node::new(NodeKind::Arg).with("arg", Value::Ident("_".to_string()))
}

/// Constructs the placeholder for a declared category.
///
/// Categories without a constructor (builtin leaves, operator groups,
/// arguments/alias/withitem/comprehension kinds) are a configuration
/// error: an unfilled required slot must never escape silently.
pub fn for_category(category: Category) -> Result<Node> {
    match category {
        Category::Group(Group::Stmt) => Ok(stmt()),
        Category::Group(Group::Expr) => Ok(expr()),
        Category::Group(Group::Slice) => Ok(slice()),
        Category::Kind(NodeKind::Name) => Ok(name()),
        Category::Kind(NodeKind::Keyword) => Ok(keyword()),
        Category::Kind(NodeKind::Arg) => Ok(arg()),
        other => Err(SchemaError::UnknownChaffCategory(other)),
    }
}
