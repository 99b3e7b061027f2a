use std::collections::HashMap;

use crate::error::{GrammarParseError, Result, SchemaError};
use crate::kind::NodeKind;
use crate::schema::attr::AttributeSpec;

/// The schema entry for one node kind: its declared attribute slots, in
/// grammar production order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeType {
    pub kind: NodeKind,
    pub attrs: Vec<AttributeSpec>,
}

impl NodeType {
    /// Parses one rule of the form `Kind(attr, attr, ...)`.
    pub fn from_rule(rule: &str) -> Result<NodeType, GrammarParseError> {
        let malformed = || GrammarParseError::MalformedRule { rule: rule.to_string() };

        let body = rule.strip_suffix(')').ok_or_else(malformed)?;
        let (name, args) = body.split_once('(').ok_or_else(malformed)?;
        if args.contains('(') || args.contains(')') {
            return Err(malformed());
        }

        let kind = NodeKind::from_name(name).ok_or_else(|| GrammarParseError::UnknownKindName {
            rule: rule.to_string(),
            name: name.to_string(),
        })?;

        let mut attrs: Vec<AttributeSpec> = Vec::new();
        if !args.is_empty() {
            for attr in args.split(", ") {
                let spec = AttributeSpec::parse(attr, rule)?;
                if attrs.iter().any(|a| a.name == spec.name) {
                    return Err(GrammarParseError::DuplicateAttribute {
                        rule: rule.to_string(),
                        name: spec.name,
                    });
                }
                attrs.push(spec);
            }
        }

        Ok(NodeType { kind, attrs })
    }

    /// Looks up a declared attribute by name.
    pub fn attr(&self, name: &str) -> Option<&AttributeSpec> {
        self.attrs.iter().find(|a| a.name == name)
    }

    /// The attribute slots whose declared category admits a subtree of
    /// `src` kind, in declared order. Refinement rules are not applied
    /// here; see [`crate::validate::slot_validator`].
    pub fn attrs_admitting(&self, src: NodeKind) -> impl Iterator<Item = &AttributeSpec> {
        self.attrs.iter().filter(move |a| a.category.admits(src))
    }
}

/// Immutable mapping from node kind to its schema entry.
///
/// Built once at startup; afterwards read-only and freely shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Registry {
    types: HashMap<NodeKind, NodeType>,
}

impl Registry {
    /// Builds a registry from an ordered list of rule strings.
    ///
    /// Construction is all-or-nothing: the first malformed rule aborts the
    /// build. A later rule for an already-seen kind replaces the earlier
    /// entry.
    pub fn build<I, S>(rules: I) -> Result<Registry, GrammarParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = HashMap::new();
        for rule in rules {
            let node_type = NodeType::from_rule(rule.as_ref())?;
            types.insert(node_type.kind, node_type);
        }
        Ok(Registry { types })
    }

    pub fn get(&self, kind: NodeKind) -> Result<&NodeType> {
        self.types.get(&kind).ok_or(SchemaError::UnknownKind(kind))
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.types.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
