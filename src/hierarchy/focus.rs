use crate::error::HierarchyError;
use crate::hierarchy::{HierarchyNode, NodeCursor, NodeKind};

/// Build the tree displayed while focusing on `node`.
///
/// The result is a fresh synthetic root with exactly one child per level
/// down to the selected node, which keeps its full subtree. Every node sits
/// at the same depth it had in the source tree, so the output is always
/// four levels deep from its root.
pub fn compose_focus(node: &NodeCursor<'_>) -> Result<HierarchyNode, HierarchyError> {
    let kind = node.kind().ok_or_else(|| {
        HierarchyError::malformed(node.path().to_string(), "nested deeper than four levels")
    })?;

    let mut chain = node.node().clone();
    match kind {
        NodeKind::Root => {
            return Err(HierarchyError::malformed(
                node.path().to_string(),
                "the root cannot be focused",
            ))
        }
        NodeKind::Category => {}
        NodeKind::State | NodeKind::Leaf => {
            for level in 1..kind.depth() {
                let ancestor = node.ancestor_node(level).ok_or_else(|| {
                    HierarchyError::malformed(node.path().to_string(), "broken ancestor chain")
                })?;
                chain = HierarchyNode::branch(ancestor.name.clone(), vec![chain]);
            }
        }
    }

    Ok(HierarchyNode::root(vec![chain]))
}
