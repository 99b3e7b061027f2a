use graft_ast::{
    AttributeSpec, Builtin, Category, GrammarParseError, Group, NodeKind, NodeType, Registry,
    SchemaError, PYTHON_RULES,
};

// ===== Attribute Spec Parser Tests =====

#[test]
fn test_parse_attr_scalar_required() {
    let spec = AttributeSpec::parse("expr value", "Assign(...)").unwrap();
    assert_eq!(spec.name, "value");
    assert_eq!(spec.category, Category::Group(Group::Expr));
    assert!(!spec.is_list);
    assert!(spec.is_required);
}

#[test]
fn test_parse_attr_list_flag() {
    let spec = AttributeSpec::parse("stmt* body", "Module(...)").unwrap();
    assert!(spec.is_list);
    assert!(spec.is_required);
}

#[test]
fn test_parse_attr_optional_flag() {
    let spec = AttributeSpec::parse("expr? returns", "FunctionDef(...)").unwrap();
    assert!(!spec.is_list);
    assert!(!spec.is_required);
}

#[test]
fn test_parse_attr_list_and_optional() {
    let spec = AttributeSpec::parse("expr*? decorator_list", "FunctionDef(...)").unwrap();
    assert!(spec.is_list);
    assert!(!spec.is_required);
}

#[test]
fn test_parse_attr_builtin_category() {
    let spec = AttributeSpec::parse("identifier name", "FunctionDef(...)").unwrap();
    assert_eq!(spec.category, Category::Builtin(Builtin::Identifier));
}

#[test]
fn test_parse_attr_pseudo_builtin() {
    let spec = AttributeSpec::parse("PSEUDO marker", "Pass()").unwrap();
    assert_eq!(spec.category, Category::Builtin(Builtin::Pseudo));
}

#[test]
fn test_parse_attr_concrete_kind_category() {
    let spec = AttributeSpec::parse("arguments args", "Lambda(...)").unwrap();
    assert_eq!(spec.category, Category::Kind(NodeKind::Arguments));
}

#[test]
fn test_parse_attr_unknown_category() {
    let err = AttributeSpec::parse("mystery value", "Foo(...)").unwrap_err();
    match err {
        GrammarParseError::UnknownCategory { token, .. } => assert_eq!(token, "mystery"),
        _ => panic!("Expected UnknownCategory, got {:?}", err),
    }
}

#[test]
fn test_parse_attr_missing_name() {
    let err = AttributeSpec::parse("expr", "Expr(expr)").unwrap_err();
    assert!(matches!(err, GrammarParseError::MalformedAttribute { .. }));
}

#[test]
fn test_parse_attr_flags_in_wrong_order() {
    // Grammar order is category '*'? '?'?, so "expr?* x" is malformed.
    let err = AttributeSpec::parse("expr?* x", "Foo(...)").unwrap_err();
    assert!(matches!(err, GrammarParseError::MalformedAttribute { .. }));
}

// ===== Rule Parser Tests =====

#[test]
fn test_rule_attr_count_matches_fields() {
    let node_type = NodeType::from_rule("Assign(expr* targets, expr value)").unwrap();
    assert_eq!(node_type.kind, NodeKind::Assign);
    assert_eq!(node_type.attrs.len(), 2);
    assert_eq!(node_type.attrs[0].name, "targets");
    assert_eq!(node_type.attrs[1].name, "value");
}

#[test]
fn test_rule_empty_argument_list() {
    let node_type = NodeType::from_rule("Pass()").unwrap();
    assert_eq!(node_type.kind, NodeKind::Pass);
    assert!(node_type.attrs.is_empty());
}

#[test]
fn test_rule_lowercase_product_kind() {
    let node_type = NodeType::from_rule("withitem(expr context_expr, expr? optional_vars)").unwrap();
    assert_eq!(node_type.kind, NodeKind::Withitem);
    assert_eq!(node_type.attrs.len(), 2);
}

#[test]
fn test_rule_missing_close_paren() {
    let err = NodeType::from_rule("Assign(expr* targets, expr value").unwrap_err();
    assert!(matches!(err, GrammarParseError::MalformedRule { .. }));
}

#[test]
fn test_rule_unknown_kind_name() {
    let err = NodeType::from_rule("Mystery(expr value)").unwrap_err();
    match err {
        GrammarParseError::UnknownKindName { name, .. } => assert_eq!(name, "Mystery"),
        _ => panic!("Expected UnknownKindName, got {:?}", err),
    }
}

#[test]
fn test_rule_duplicate_attribute() {
    let err = NodeType::from_rule("Assign(expr value, expr value)").unwrap_err();
    match err {
        GrammarParseError::DuplicateAttribute { name, .. } => assert_eq!(name, "value"),
        _ => panic!("Expected DuplicateAttribute, got {:?}", err),
    }
}

#[test]
fn test_rule_concatenated_rules_rejected() {
    // Two rules accidentally glued into one string must fail loudly, not
    // silently register the first.
    let err = NodeType::from_rule(
        "Tuple(expr* elts, expr_context ctx)Slice(expr? lower, expr? upper, expr? step)",
    )
    .unwrap_err();
    assert!(matches!(err, GrammarParseError::MalformedRule { .. }));
}

// ===== Registry Tests =====

#[test]
fn test_registry_build_and_get() {
    let registry = Registry::build(["Assign(expr* targets, expr value)", "Pass()"]).unwrap();
    assert_eq!(registry.len(), 2);

    let assign = registry.get(NodeKind::Assign).unwrap();
    assert_eq!(assign.attrs.len(), 2);
    assert!(registry.contains(NodeKind::Pass));
}

#[test]
fn test_registry_build_is_all_or_nothing() {
    let err = Registry::build(["Pass()", "Assign(expr* targets, expr value"]).unwrap_err();
    assert!(matches!(err, GrammarParseError::MalformedRule { .. }));
}

#[test]
fn test_registry_unknown_kind_lookup() {
    let registry = Registry::build(["Pass()"]).unwrap();
    let err = registry.get(NodeKind::Assign).unwrap_err();
    match err {
        SchemaError::UnknownKind(kind) => assert_eq!(kind, NodeKind::Assign),
        _ => panic!("Expected UnknownKind, got {:?}", err),
    }
}

#[test]
fn test_registry_later_rule_overwrites() {
    let registry = Registry::build(["Return(expr? value)", "Return()"]).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get(NodeKind::Return).unwrap().attrs.is_empty());
}

#[test]
fn test_registry_identical_rules_identical_registries() {
    let a = Registry::build(PYTHON_RULES).unwrap();
    let b = Registry::build(PYTHON_RULES).unwrap();
    assert_eq!(a.len(), b.len());
    for rule in PYTHON_RULES {
        let kind = NodeKind::from_name(rule.split('(').next().unwrap()).unwrap();
        assert_eq!(a.get(kind).unwrap(), b.get(kind).unwrap());
    }
}

#[test]
fn test_python_registry_covers_builtin_rules() {
    let registry = Registry::python().unwrap();
    assert_eq!(registry.len(), PYTHON_RULES.len());

    let except = registry.get(NodeKind::ExceptHandler).unwrap();
    let names: Vec<&str> = except.attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["type", "name", "body"]);
}

#[test]
fn test_attrs_admitting_filters_by_category() {
    let registry = Registry::python().unwrap();
    let node_type = registry.get(NodeKind::For).unwrap();

    let expr_slots: Vec<&str> = node_type
        .attrs_admitting(NodeKind::Call)
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(expr_slots, ["target", "iter"]);

    let stmt_slots: Vec<&str> = node_type
        .attrs_admitting(NodeKind::Pass)
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(stmt_slots, ["body", "orelse"]);
}
