//! Slot-compatibility rules the flat kind hierarchy cannot express.

use crate::error::Result;
use crate::kind::NodeKind;
use crate::schema::{AttributeSpec, Registry};

/// Attribute slots that are structurally assignment targets.
const LVALUE_SLOTS: &[(NodeKind, &str)] = &[
    (NodeKind::Assign, "targets"),
    (NodeKind::AugAssign, "target"),
    (NodeKind::For, "target"),
    (NodeKind::Withitem, "optional_vars"),
];

/// Expression kinds that are structurally assignable.
const LVALUE_KINDS: &[NodeKind] = &[
    NodeKind::Attribute,
    NodeKind::Subscript,
    NodeKind::Starred,
    NodeKind::Name,
    NodeKind::List,
    NodeKind::Tuple,
];

/// Whether `(kind, attr)` is an assignment-target slot.
pub fn is_lvalue_slot(kind: NodeKind, attr: &str) -> bool {
    LVALUE_SLOTS.iter().any(|(k, a)| *k == kind && *a == attr)
}

/// Whether `kind` is an assignable expression form.
pub fn is_lvalue_kind(kind: NodeKind) -> bool {
    LVALUE_KINDS.contains(&kind)
}

/// Refinement predicate for substituting a `src`-kind subtree into an
/// attribute slot of a `dst`-kind node.
///
/// This composes with (never replaces) the declared-category check:
/// - an interpolated fragment is valid only inside a joined string's
///   `values` list;
/// - lvalue slots admit only assignable expression forms;
/// - a joined string's `values` list admits only string fragments and
///   interpolated fragments.
pub fn slot_validator(dst: NodeKind, src: NodeKind) -> impl Fn(&AttributeSpec) -> bool {
    move |attr: &AttributeSpec| {
        if src == NodeKind::FormattedValue
            && !(dst == NodeKind::JoinedStr && attr.name == "values")
        {
            return false;
        }

        if is_lvalue_slot(dst, &attr.name) && !is_lvalue_kind(src) {
            return false;
        }

        if dst == NodeKind::JoinedStr
            && attr.name == "values"
            && src != NodeKind::Str
            && src != NodeKind::FormattedValue
        {
            return false;
        }

        true
    }
}

impl Registry {
    /// Whether a subtree of `src` kind may be substituted into the
    /// `dst_attr` slot of a `dst`-kind node: the slot's declared category
    /// must admit `src`, and every refinement rule must hold.
    ///
    /// An unregistered destination kind is a caller error; an unknown
    /// attribute name is simply incompatible.
    pub fn compatible(&self, dst: NodeKind, dst_attr: &str, src: NodeKind) -> Result<bool> {
        let node_type = self.get(dst)?;
        let Some(attr) = node_type.attr(dst_attr) else {
            return Ok(false);
        };
        Ok(attr.category.admits(src) && slot_validator(dst, src)(attr))
    }
}
