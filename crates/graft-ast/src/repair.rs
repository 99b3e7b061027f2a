//! Filling required-but-missing attributes with placeholder subtrees.

use crate::chaff;
use crate::error::Result;
use crate::kind::NodeKind;
use crate::node::{Node, Value};
use crate::schema::{AttributeSpec, Category, NodeType};
use crate::validate::is_lvalue_slot;

impl NodeType {
    /// Fills every required attribute of `node` that is missing or empty
    /// with a freshly built placeholder, and returns the names fixed, in
    /// declared attribute order.
    ///
    /// Repair is additive-only: a value that already satisfies its
    /// required/non-empty constraint is never touched. Running repair a
    /// second time with no intervening mutation returns an empty list.
    ///
    /// All placeholders are synthesized before any is attached, so a
    /// failed placeholder lookup leaves the node exactly as it was.
    pub fn repair(&self, node: &mut Node) -> Result<Vec<String>> {
        debug_assert_eq!(node.kind, self.kind);

        let mut fixes: Vec<(&AttributeSpec, Node)> = Vec::new();
        for spec in &self.attrs {
            if !spec.is_required {
                continue;
            }
            let missing = node.get(&spec.name).map_or(true, Value::is_missing);
            if !missing {
                continue;
            }
            // Lvalue slots only admit assignable forms; a generic
            // expression placeholder would be structurally invalid there.
            let category = if is_lvalue_slot(self.kind, &spec.name) {
                Category::Kind(NodeKind::Name)
            } else {
                spec.category
            };
            fixes.push((spec, chaff::for_category(category)?));
        }

        let mut fixed = Vec::with_capacity(fixes.len());
        for (spec, placeholder) in fixes {
            let value = if spec.is_list {
                Value::List(vec![placeholder])
            } else {
                Value::Node(Box::new(placeholder))
            };
            node.set(spec.name.clone(), value);
            fixed.push(spec.name.clone());
        }
        Ok(fixed)
    }
}
