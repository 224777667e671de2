//! Upward resolution: a node's root category, and a node's display record.

use crate::error::HierarchyError;
use crate::hierarchy::index::HierarchyIndex;
use crate::hierarchy::{NodeCursor, NodeKind};

pub const LABEL_CATEGORY: &str = "Category";
pub const LABEL_TOTAL: &str = "Total Shipped";
pub const LABEL_BREADCRUMB: &str = "Breadcrumb";
pub const LABEL_STATE: &str = "Ship State";
pub const LABEL_CITY: &str = "State City";
pub const LABEL_CITY_STATE: &str = "State Shipped";

/// Climb to the depth-1 ancestor of `node`.
///
/// Stops once the parent is the root, so it works on any tree whose root
/// sits directly above the categories, focused or not. A root cursor
/// resolves to itself.
pub fn root_category<'a>(node: &NodeCursor<'a>) -> NodeCursor<'a> {
    let mut current = node.clone();
    while let Some(parent) = current.parent().filter(|p| p.parent().is_some()) {
        current = parent;
    }
    current
}

/// Flat, ordered label → value record for the details pane.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDetails {
    kind: NodeKind,
    fields: Vec<(String, String)>,
}

impl NodeDetails {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Set a field, keeping the position of an existing label.
    fn set(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Fields with labels prettified for display.
    pub fn display_fields(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.fields
            .iter()
            .map(|(l, v)| (format_label(l), v.as_str()))
    }
}

/// Map a node of the original or a focused tree to its details record.
///
/// Category and state records come straight from the index. Leaf records
/// merge the leaf's own `details` and a breadcrumb read from the live
/// ancestor chain, which differs between the original and focused trees.
pub fn resolve_details(
    index: &HierarchyIndex,
    node: &NodeCursor<'_>,
) -> Result<NodeDetails, HierarchyError> {
    let kind = node.kind().ok_or_else(|| {
        HierarchyError::malformed(
            node.breadcrumb(index.separator()),
            "nested deeper than four levels",
        )
    })?;

    match kind {
        NodeKind::Root => Err(HierarchyError::not_found(node.name())),
        NodeKind::Category => {
            let record = index
                .category(node.name())
                .ok_or_else(|| HierarchyError::not_found(node.name()))?;
            let mut details = NodeDetails::new(kind);
            details.set(LABEL_CATEGORY, record.category.as_str());
            details.set(LABEL_TOTAL, record.total_value.to_string());
            details.set(LABEL_BREADCRUMB, record.breadcrumb.as_str());
            Ok(details)
        }
        NodeKind::State => {
            let category = node.ancestor_node(1).map(|n| n.name.as_str()).unwrap_or("");
            let record = index
                .state(category, node.name())
                .ok_or_else(|| HierarchyError::not_found(lookup_key(category, node.name())))?;
            let mut details = NodeDetails::new(kind);
            details.set(LABEL_CATEGORY, record.category.as_str());
            details.set(LABEL_STATE, record.state.as_str());
            details.set(LABEL_TOTAL, record.total_value.to_string());
            details.set(LABEL_BREADCRUMB, record.breadcrumb.as_str());
            Ok(details)
        }
        NodeKind::Leaf => {
            let category = node.ancestor_node(2).map(|n| n.name.as_str()).unwrap_or("");
            let record = index
                .leaf(category, node.name())
                .ok_or_else(|| HierarchyError::not_found(lookup_key(category, node.name())))?;
            let mut details = NodeDetails::new(kind);
            details.set(LABEL_CATEGORY, record.category.as_str());
            details.set(LABEL_CITY, node.name());
            details.set(LABEL_CITY_STATE, record.parent_state.as_str());
            if let Some(extra) = &node.node().details {
                for (key, value) in extra {
                    let text = match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    details.set(key.as_str(), text);
                }
            }
            details.set(LABEL_BREADCRUMB, node.breadcrumb(index.separator()));
            Ok(details)
        }
    }
}

fn lookup_key(category: &str, name: &str) -> String {
    format!("{}|{}", category, name)
}

/// `"ship_state"` → `"Ship State"`.
pub fn format_label(raw: &str) -> String {
    raw.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
