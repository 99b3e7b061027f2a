//! The builtin Python tree grammar.

use crate::error::{GrammarParseError, Result};
use crate::schema::Registry;

/// Grammar rules for the Python node kinds a mutation engine may rewrite.
///
/// JoinedStr, FormattedValue and comprehension rules are deliberately
/// absent: f-strings, comprehensions and type annotations are left alone
/// by mutation, though their kinds still exist for slot validation.
pub const PYTHON_RULES: &[&str] = &[
    "Module(stmt* body)",
    "Interactive(stmt* body)",
    "Expression(expr body)",
    "FunctionDef(identifier name, arguments args, stmt* body, expr*? decorator_list, expr? returns)",
    "AsyncFunctionDef(identifier name, arguments args, stmt* body, expr*? decorator_list, expr? returns)",
    "ClassDef(identifier name, expr*? bases, keyword* keywords, stmt* body, expr*? decorator_list)",
    "Return(expr? value)",
    "Delete(expr* targets)",
    "Assign(expr* targets, expr value)",
    "AugAssign(expr target, operator op, expr value)",
    "AnnAssign(expr target, expr annotation, expr? value, int simple)",
    "For(expr target, expr iter, stmt* body, stmt*? orelse)",
    "AsyncFor(expr target, expr iter, stmt* body, stmt*? orelse)",
    "While(expr test, stmt* body, stmt*? orelse)",
    "If(expr test, stmt* body, stmt*? orelse)",
    "With(withitem* items, stmt* body)",
    "AsyncWith(withitem* items, stmt* body)",
    "Raise(expr? exc, expr? cause)",
    "Try(stmt* body, excepthandler* handlers, stmt*? orelse, stmt*? finalbody)",
    "ExceptHandler(expr? type, identifier? name, stmt* body)",
    "Assert(expr test, expr? msg)",
    "Import(alias* names)",
    "ImportFrom(identifier? module, alias* names, int? level)",
    "Global(identifier* names)",
    "Nonlocal(identifier* names)",
    "Expr(expr value)",
    "Pass()",
    "Break()",
    "Continue()",
    "BoolOp(boolop op, expr* values)",
    "BinOp(expr left, operator op, expr right)",
    "UnaryOp(unaryop op, expr operand)",
    "Lambda(arguments args, expr body)",
    "IfExp(expr test, expr body, expr orelse)",
    "Dict(expr* keys, expr* values)",
    "Set(expr* elts)",
    "ListComp(expr elt, comprehension* generators)",
    "SetComp(expr elt, comprehension* generators)",
    "DictComp(expr key, expr value, comprehension* generators)",
    "GeneratorExp(expr elt, comprehension* generators)",
    "Await(expr value)",
    "Yield(expr? value)",
    "YieldFrom(expr value)",
    "Compare(expr left, cmpop* ops, expr* comparators)",
    "Call(expr func, expr*? args, keyword*? keywords)",
    "Ellipsis()",
    "Constant()",
    "Attribute(expr value, identifier attr, expr_context ctx)",
    "Subscript(expr value, slice slice, expr_context ctx)",
    "Starred(expr value, expr_context ctx)",
    "Name(identifier id, expr_context ctx)",
    "List(expr* elts, expr_context ctx)",
    "Tuple(expr* elts, expr_context ctx)",
    "Slice(expr? lower, expr? upper, expr? step)",
    "ExtSlice(slice* dims)",
    "Index(expr value)",
    "arguments(arg*? args, arg? vararg, arg*? kwonlyargs, expr*? kw_defaults, arg? kwarg, expr*? defaults)",
    "arg(identifier arg, expr? annotation)",
    "keyword(identifier? arg, expr value)",
    "alias(identifier name, identifier? asname)",
    "withitem(expr context_expr, expr? optional_vars)",
];

impl Registry {
    /// Builds the registry for [`PYTHON_RULES`].
    pub fn python() -> Result<Registry, GrammarParseError> {
        Registry::build(PYTHON_RULES)
    }
}
