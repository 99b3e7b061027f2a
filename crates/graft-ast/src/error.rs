use crate::kind::NodeKind;
use crate::schema::Category;

/// Errors raised while building a registry from grammar rule text.
///
/// All of these are startup-time configuration failures; registry
/// construction is all-or-nothing.
#[derive(Debug, thiserror::Error)]
pub enum GrammarParseError {
    #[error("Malformed rule `{rule}`: expected `Kind(attr, attr, ...)`")]
    MalformedRule { rule: String },

    #[error("Unknown node kind `{name}` in rule `{rule}`")]
    UnknownKindName { rule: String, name: String },

    #[error("Malformed attribute `{attr}` in rule `{rule}`: expected `category['*']['?'] name`")]
    MalformedAttribute { rule: String, attr: String },

    #[error("Unknown category `{token}` in attribute `{attr}` of rule `{rule}`")]
    UnknownCategory { rule: String, attr: String, token: String },

    #[error("Duplicate attribute `{name}` in rule `{rule}`")]
    DuplicateAttribute { rule: String, name: String },
}

/// Errors raised while using a built registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Node kind `{}` is not in the configured registry", .0.name())]
    UnknownKind(NodeKind),

    #[error("No placeholder constructor for category `{0}`")]
    UnknownChaffCategory(Category),
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
