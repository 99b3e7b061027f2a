use std::fmt;

/// Abstract sum categories of the tree grammar.
///
/// Every concrete [`NodeKind`] belongs to at most one group; product kinds
/// (arguments, keyword, alias, ...) belong to none. Category admission is a
/// table lookup over this mapping rather than runtime type introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Mod,
    Stmt,
    Expr,
    Context,
    Slice,
    BoolOperator,
    BinOperator,
    UnaryOperator,
    CmpOperator,
    Handler,
}

impl Group {
    /// Grammar token for this group as it appears in attribute declarations.
    pub fn token(self) -> &'static str {
        match self {
            Group::Mod => "mod",
            Group::Stmt => "stmt",
            Group::Expr => "expr",
            Group::Context => "expr_context",
            Group::Slice => "slice",
            Group::BoolOperator => "boolop",
            Group::BinOperator => "operator",
            Group::UnaryOperator => "unaryop",
            Group::CmpOperator => "cmpop",
            Group::Handler => "excepthandler",
        }
    }

    pub fn from_token(token: &str) -> Option<Group> {
        match token {
            "mod" => Some(Group::Mod),
            "stmt" => Some(Group::Stmt),
            "expr" => Some(Group::Expr),
            "expr_context" => Some(Group::Context),
            "slice" => Some(Group::Slice),
            "boolop" => Some(Group::BoolOperator),
            "operator" => Some(Group::BinOperator),
            "unaryop" => Some(Group::UnaryOperator),
            "cmpop" => Some(Group::CmpOperator),
            "excepthandler" => Some(Group::Handler),
            _ => None,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

macro_rules! node_kinds {
    ($($variant:ident : $name:literal => $group:expr;)+) => {
        /// A concrete node kind of the tree grammar.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($variant),+
        }

        impl NodeKind {
            /// Grammar name of this kind, as used in rule text.
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $name),+
                }
            }

            /// Resolves a grammar name against the kind universe.
            pub fn from_name(name: &str) -> Option<NodeKind> {
                match name {
                    $($name => Some(NodeKind::$variant),)+
                    _ => None,
                }
            }

            /// The abstract group this kind belongs to, if any.
            pub fn group(self) -> Option<Group> {
                match self {
                    $(NodeKind::$variant => $group),+
                }
            }
        }
    };
}

node_kinds! {
    // Module roots
    Module: "Module" => Some(Group::Mod);
    Interactive: "Interactive" => Some(Group::Mod);
    Expression: "Expression" => Some(Group::Mod);

    // Statements
    FunctionDef: "FunctionDef" => Some(Group::Stmt);
    AsyncFunctionDef: "AsyncFunctionDef" => Some(Group::Stmt);
    ClassDef: "ClassDef" => Some(Group::Stmt);
    Return: "Return" => Some(Group::Stmt);
    Delete: "Delete" => Some(Group::Stmt);
    Assign: "Assign" => Some(Group::Stmt);
    AugAssign: "AugAssign" => Some(Group::Stmt);
    AnnAssign: "AnnAssign" => Some(Group::Stmt);
    For: "For" => Some(Group::Stmt);
    AsyncFor: "AsyncFor" => Some(Group::Stmt);
    While: "While" => Some(Group::Stmt);
    If: "If" => Some(Group::Stmt);
    With: "With" => Some(Group::Stmt);
    AsyncWith: "AsyncWith" => Some(Group::Stmt);
    Raise: "Raise" => Some(Group::Stmt);
    Try: "Try" => Some(Group::Stmt);
    Assert: "Assert" => Some(Group::Stmt);
    Import: "Import" => Some(Group::Stmt);
    ImportFrom: "ImportFrom" => Some(Group::Stmt);
    Global: "Global" => Some(Group::Stmt);
    Nonlocal: "Nonlocal" => Some(Group::Stmt);
    Expr: "Expr" => Some(Group::Stmt);
    Pass: "Pass" => Some(Group::Stmt);
    Break: "Break" => Some(Group::Stmt);
    Continue: "Continue" => Some(Group::Stmt);

    // Expressions
    BoolOp: "BoolOp" => Some(Group::Expr);
    BinOp: "BinOp" => Some(Group::Expr);
    UnaryOp: "UnaryOp" => Some(Group::Expr);
    Lambda: "Lambda" => Some(Group::Expr);
    IfExp: "IfExp" => Some(Group::Expr);
    Dict: "Dict" => Some(Group::Expr);
    Set: "Set" => Some(Group::Expr);
    ListComp: "ListComp" => Some(Group::Expr);
    SetComp: "SetComp" => Some(Group::Expr);
    DictComp: "DictComp" => Some(Group::Expr);
    GeneratorExp: "GeneratorExp" => Some(Group::Expr);
    Await: "Await" => Some(Group::Expr);
    Yield: "Yield" => Some(Group::Expr);
    YieldFrom: "YieldFrom" => Some(Group::Expr);
    Compare: "Compare" => Some(Group::Expr);
    Call: "Call" => Some(Group::Expr);
    FormattedValue: "FormattedValue" => Some(Group::Expr);
    JoinedStr: "JoinedStr" => Some(Group::Expr);
    Constant: "Constant" => Some(Group::Expr);
    Ellipsis: "Ellipsis" => Some(Group::Expr);
    Attribute: "Attribute" => Some(Group::Expr);
    Subscript: "Subscript" => Some(Group::Expr);
    Starred: "Starred" => Some(Group::Expr);
    Name: "Name" => Some(Group::Expr);
    List: "List" => Some(Group::Expr);
    Tuple: "Tuple" => Some(Group::Expr);
    // Legacy literal kinds, still named by the joined-string rules
    Str: "Str" => Some(Group::Expr);
    Num: "Num" => Some(Group::Expr);

    // Expression contexts
    Load: "Load" => Some(Group::Context);
    Store: "Store" => Some(Group::Context);
    Del: "Del" => Some(Group::Context);

    // Slices
    Slice: "Slice" => Some(Group::Slice);
    ExtSlice: "ExtSlice" => Some(Group::Slice);
    Index: "Index" => Some(Group::Slice);

    // Boolean operators
    And: "And" => Some(Group::BoolOperator);
    Or: "Or" => Some(Group::BoolOperator);

    // Binary operators
    Add: "Add" => Some(Group::BinOperator);
    Sub: "Sub" => Some(Group::BinOperator);
    Mult: "Mult" => Some(Group::BinOperator);
    MatMult: "MatMult" => Some(Group::BinOperator);
    Div: "Div" => Some(Group::BinOperator);
    Mod: "Mod" => Some(Group::BinOperator);
    Pow: "Pow" => Some(Group::BinOperator);
    LShift: "LShift" => Some(Group::BinOperator);
    RShift: "RShift" => Some(Group::BinOperator);
    BitOr: "BitOr" => Some(Group::BinOperator);
    BitXor: "BitXor" => Some(Group::BinOperator);
    BitAnd: "BitAnd" => Some(Group::BinOperator);
    FloorDiv: "FloorDiv" => Some(Group::BinOperator);

    // Unary operators
    Invert: "Invert" => Some(Group::UnaryOperator);
    Not: "Not" => Some(Group::UnaryOperator);
    UAdd: "UAdd" => Some(Group::UnaryOperator);
    USub: "USub" => Some(Group::UnaryOperator);

    // Comparison operators
    Eq: "Eq" => Some(Group::CmpOperator);
    NotEq: "NotEq" => Some(Group::CmpOperator);
    Lt: "Lt" => Some(Group::CmpOperator);
    LtE: "LtE" => Some(Group::CmpOperator);
    Gt: "Gt" => Some(Group::CmpOperator);
    GtE: "GtE" => Some(Group::CmpOperator);
    Is: "Is" => Some(Group::CmpOperator);
    IsNot: "IsNot" => Some(Group::CmpOperator);
    In: "In" => Some(Group::CmpOperator);
    NotIn: "NotIn" => Some(Group::CmpOperator);

    // Exception handlers
    ExceptHandler: "ExceptHandler" => Some(Group::Handler);

    // Product kinds (lowercase grammar names)
    Comprehension: "comprehension" => None;
    Arguments: "arguments" => None;
    Arg: "arg" => None;
    Keyword: "keyword" => None;
    Alias: "alias" => None;
    Withitem: "withitem" => None;
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
