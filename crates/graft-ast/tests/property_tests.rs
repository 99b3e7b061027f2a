use graft_ast::{Node, NodeKind, NodeType, Registry};
use proptest::prelude::*;
use proptest::sample::select;

const KIND_NAMES: &[&str] = &["Assign", "Return", "Call", "FunctionDef", "withitem", "arg"];

const CATEGORY_TOKENS: &[&str] = &[
    "stmt",
    "expr",
    "identifier",
    "int",
    "slice",
    "keyword",
    "arguments",
    "expr_context",
];

/// Kinds whose required slots all have a placeholder constructor, so a
/// freshly allocated node is fully repairable.
const REPAIRABLE_KINDS: &[NodeKind] = &[
    NodeKind::Module,
    NodeKind::Interactive,
    NodeKind::Expression,
    NodeKind::Return,
    NodeKind::Delete,
    NodeKind::Assign,
    NodeKind::For,
    NodeKind::AsyncFor,
    NodeKind::While,
    NodeKind::If,
    NodeKind::Raise,
    NodeKind::Assert,
    NodeKind::Expr,
    NodeKind::Pass,
    NodeKind::Break,
    NodeKind::Continue,
    NodeKind::Dict,
    NodeKind::Set,
    NodeKind::IfExp,
    NodeKind::Await,
    NodeKind::Yield,
    NodeKind::YieldFrom,
    NodeKind::Call,
    NodeKind::Ellipsis,
    NodeKind::Constant,
    NodeKind::Slice,
    NodeKind::Index,
];

proptest! {
    /// Parsing a well-formed rule yields one AttributeSpec per declared
    /// field, with the multiplicity and optionality flags round-tripped.
    #[test]
    fn prop_rule_attr_count_matches_fields(
        kind in select(KIND_NAMES),
        fields in prop::collection::vec(
            (select(CATEGORY_TOKENS), any::<bool>(), any::<bool>()),
            0..6,
        ),
    ) {
        let attrs: Vec<String> = fields
            .iter()
            .enumerate()
            .map(|(i, (token, is_list, is_optional))| {
                format!(
                    "{}{}{} field{}",
                    token,
                    if *is_list { "*" } else { "" },
                    if *is_optional { "?" } else { "" },
                    i,
                )
            })
            .collect();
        let rule = format!("{}({})", kind, attrs.join(", "));

        let node_type = NodeType::from_rule(&rule).unwrap();
        prop_assert_eq!(node_type.attrs.len(), fields.len());
        for (spec, (_, is_list, is_optional)) in node_type.attrs.iter().zip(&fields) {
            prop_assert_eq!(spec.is_list, *is_list);
            prop_assert_eq!(spec.is_required, !*is_optional);
        }
    }

    /// After one repair every required attribute is non-empty, and a second
    /// repair finds nothing left to fix.
    #[test]
    fn prop_repair_is_idempotent(kind in select(REPAIRABLE_KINDS)) {
        let registry = Registry::python().unwrap();
        let node_type = registry.get(kind).unwrap();

        let mut node = Node::new(kind);
        node_type.repair(&mut node).unwrap();

        for spec in node_type.attrs.iter().filter(|a| a.is_required) {
            let value = node.get(&spec.name).unwrap();
            prop_assert!(!value.is_missing(), "attribute {} still missing", spec.name);
            if spec.is_list {
                prop_assert!(value.as_list().unwrap().len() >= 1);
            }
        }

        let second = node_type.repair(&mut node).unwrap();
        prop_assert!(second.is_empty());
    }
}
