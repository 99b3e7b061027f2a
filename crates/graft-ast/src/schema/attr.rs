use std::fmt;

use crate::error::GrammarParseError;
use crate::kind::{Group, NodeKind};

/// Builtin leaf categories an attribute may be declared at.
///
/// These are terminals of the grammar: they admit no node kind and have no
/// placeholder constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Identifier,
    Int,
    Str,
    Bytes,
    Object,
    Singleton,
    Constant,
    Pseudo,
}

impl Builtin {
    pub fn token(self) -> &'static str {
        match self {
            Builtin::Identifier => "identifier",
            Builtin::Int => "int",
            Builtin::Str => "string",
            Builtin::Bytes => "bytes",
            Builtin::Object => "object",
            Builtin::Singleton => "singleton",
            Builtin::Constant => "constant",
            Builtin::Pseudo => "PSEUDO",
        }
    }

    pub fn from_token(token: &str) -> Option<Builtin> {
        match token {
            "identifier" => Some(Builtin::Identifier),
            "int" => Some(Builtin::Int),
            "string" => Some(Builtin::Str),
            "bytes" => Some(Builtin::Bytes),
            "object" => Some(Builtin::Object),
            "singleton" => Some(Builtin::Singleton),
            "constant" => Some(Builtin::Constant),
            "PSEUDO" => Some(Builtin::Pseudo),
            _ => None,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The declared category of an attribute slot: a builtin leaf, an abstract
/// group, or one concrete node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Builtin(Builtin),
    Group(Group),
    Kind(NodeKind),
}

impl Category {
    /// Resolves a category token: builtins first, then group tokens, then
    /// concrete kind names.
    pub fn resolve(token: &str) -> Option<Category> {
        if let Some(builtin) = Builtin::from_token(token) {
            return Some(Category::Builtin(builtin));
        }
        if let Some(group) = Group::from_token(token) {
            return Some(Category::Group(group));
        }
        NodeKind::from_name(token).map(Category::Kind)
    }

    /// Whether a subtree of kind `kind` satisfies this category.
    pub fn admits(self, kind: NodeKind) -> bool {
        match self {
            Category::Builtin(_) => false,
            Category::Group(group) => kind.group() == Some(group),
            Category::Kind(exact) => kind == exact,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Builtin(builtin) => builtin.fmt(f),
            Category::Group(group) => group.fmt(f),
            Category::Kind(kind) => kind.fmt(f),
        }
    }
}

/// One declared attribute slot of a node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: String,
    pub category: Category,
    pub is_list: bool,
    pub is_required: bool,
}

impl AttributeSpec {
    /// Parses one attribute declaration of the form `category['*']['?'] name`.
    ///
    /// `rule` is the enclosing rule text, used only for error context.
    pub fn parse(attr: &str, rule: &str) -> Result<AttributeSpec, GrammarParseError> {
        let malformed = || GrammarParseError::MalformedAttribute {
            rule: rule.to_string(),
            attr: attr.to_string(),
        };

        let (head, name) = attr.split_once(' ').ok_or_else(malformed)?;
        if !is_word(name) {
            return Err(malformed());
        }

        let (head, is_required) = match head.strip_suffix('?') {
            Some(rest) => (rest, false),
            None => (head, true),
        };
        let (token, is_list) = match head.strip_suffix('*') {
            Some(rest) => (rest, true),
            None => (head, false),
        };
        if !is_word(token) {
            return Err(malformed());
        }

        let category =
            Category::resolve(token).ok_or_else(|| GrammarParseError::UnknownCategory {
                rule: rule.to_string(),
                attr: attr.to_string(),
                token: token.to_string(),
            })?;

        Ok(AttributeSpec { name: name.to_string(), category, is_list, is_required })
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
