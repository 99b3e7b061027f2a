pub mod chaff;
pub mod error;
pub mod kind;
pub mod node;
pub mod python;
pub mod repair;
pub mod schema;
pub mod validate;

// Re-export commonly used items
pub use error::{GrammarParseError, Result, SchemaError};
pub use kind::{Group, NodeKind};
pub use node::{Node, Value};
pub use python::PYTHON_RULES;
pub use schema::{AttributeSpec, Builtin, Category, NodeType, Registry};
pub use validate::{is_lvalue_kind, is_lvalue_slot, slot_validator};
