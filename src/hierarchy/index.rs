//! Per-node lookup tables built in one traversal of the original hierarchy.
//!
//! Categories are keyed by name. States and leaves are keyed by their root
//! category plus their own name, in two separate tables so the record shape
//! is known at lookup time.

use std::collections::HashMap;

use crate::error::HierarchyError;
use crate::hierarchy::resolve::root_category;
use crate::hierarchy::{HierarchyNode, NodeCursor, NodeKind, DEFAULT_SEPARATOR};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub category: String,
    pub total_value: f64,
    pub breadcrumb: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateRecord {
    pub category: String,
    pub state: String,
    pub total_value: f64,
    pub breadcrumb: String,
}

/// Leaf records only remember where the leaf hangs; the rest is read live.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRecord {
    pub category: String,
    pub parent_state: String,
}

type Table<R> = HashMap<String, HashMap<String, R>>;

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyIndex {
    separator: String,
    category_order: Vec<String>,
    categories: HashMap<String, CategoryRecord>,
    states: Table<StateRecord>,
    leaves: Table<LeafRecord>,
}

impl HierarchyIndex {
    /// Index `tree` using the default `->` breadcrumb separator.
    pub fn build(tree: &HierarchyNode) -> Result<Self, HierarchyError> {
        Self::build_with(tree, DEFAULT_SEPARATOR)
    }

    pub fn build_with(tree: &HierarchyNode, separator: &str) -> Result<Self, HierarchyError> {
        let mut index = Self {
            separator: separator.to_string(),
            category_order: Vec::new(),
            categories: HashMap::new(),
            states: HashMap::new(),
            leaves: HashMap::new(),
        };
        index.index_tree(tree)?;
        log::debug!(
            "indexed {} categories, {} states, {} leaves",
            index.categories.len(),
            index.states.values().map(HashMap::len).sum::<usize>(),
            index.leaves.values().map(HashMap::len).sum::<usize>()
        );
        Ok(index)
    }

    /// Walk `tree` and write a record for every category, state and leaf.
    ///
    /// Re-running over the same tree overwrites entries with identical values.
    pub fn index_tree(&mut self, tree: &HierarchyNode) -> Result<(), HierarchyError> {
        self.visit(NodeCursor::root(tree))
    }

    fn visit(&mut self, cursor: NodeCursor<'_>) -> Result<(), HierarchyError> {
        let kind = cursor.kind().ok_or_else(|| {
            HierarchyError::malformed(
                cursor.breadcrumb(&self.separator),
                "nested deeper than four levels",
            )
        })?;

        match kind {
            NodeKind::Root => {}
            NodeKind::Category => {
                let name = cursor.name().to_string();
                if !self.categories.contains_key(&name) {
                    self.category_order.push(name.clone());
                }
                self.categories.insert(
                    name.clone(),
                    CategoryRecord {
                        category: name,
                        total_value: cursor.value(),
                        breadcrumb: cursor.breadcrumb(&self.separator),
                    },
                );
            }
            NodeKind::State => {
                let category = root_category(&cursor).name().to_string();
                let record = StateRecord {
                    category: category.clone(),
                    state: cursor.name().to_string(),
                    total_value: cursor.value(),
                    breadcrumb: cursor.breadcrumb(&self.separator),
                };
                self.states
                    .entry(category)
                    .or_default()
                    .insert(cursor.name().to_string(), record);
            }
            NodeKind::Leaf => {
                let category = root_category(&cursor).name().to_string();
                let parent_state = cursor
                    .parent()
                    .map(|p| p.name().to_string())
                    .unwrap_or_default();
                let previous = self.leaves.entry(category.clone()).or_default().insert(
                    cursor.name().to_string(),
                    LeafRecord {
                        category,
                        parent_state: parent_state.clone(),
                    },
                );
                if let Some(prev) = previous.filter(|p| p.parent_state != parent_state) {
                    log::warn!(
                        "leaf '{}' in '{}' appears under both '{}' and '{}'; keeping '{}'",
                        cursor.name(),
                        prev.category,
                        prev.parent_state,
                        parent_state,
                        parent_state
                    );
                }
            }
        }

        let children: Vec<NodeCursor<'_>> = cursor.children().collect();
        for child in children {
            self.visit(child)?;
        }
        Ok(())
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Category names in document order.
    pub fn category_names(&self) -> &[String] {
        &self.category_order
    }

    pub fn category(&self, name: &str) -> Option<&CategoryRecord> {
        self.categories.get(name)
    }

    pub fn state(&self, category: &str, state: &str) -> Option<&StateRecord> {
        self.states.get(category)?.get(state)
    }

    pub fn leaf(&self, category: &str, leaf: &str) -> Option<&LeafRecord> {
        self.leaves.get(category)?.get(leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fixtures::sample;

    #[test]
    fn category_records_carry_totals() {
        let index = HierarchyIndex::build(&sample()).unwrap();
        let top = index.category("Top").unwrap();
        assert_eq!(top.total_value, 100.0);
        assert_eq!(top.breadcrumb, "Root->Top");
        assert_eq!(index.category_names(), ["Top", "Bottom"]);
    }

    #[test]
    fn state_and_leaf_records_use_root_category() {
        let index = HierarchyIndex::build(&sample()).unwrap();

        let lagos = index.state("Top", "Lagos").unwrap();
        assert_eq!(lagos.total_value, 60.0);
        assert_eq!(lagos.breadcrumb, "Root->Top->Lagos");

        let fagge = index.leaf("Bottom", "Fagge").unwrap();
        assert_eq!(fagge.category, "Bottom");
        assert_eq!(fagge.parent_state, "Kano");

        assert!(index.leaf("Kano", "Fagge").is_none());
        assert!(index.state("Top", "Ikeja").is_none());
    }

    #[test]
    fn leaf_named_like_state_does_not_clash() {
        let tree = HierarchyNode::root(vec![HierarchyNode::branch(
            "Set",
            vec![
                HierarchyNode::branch("Goa", vec![HierarchyNode::leaf("Panaji", 3.0)]),
                HierarchyNode::branch("Delhi", vec![HierarchyNode::leaf("Goa", 2.0)]),
            ],
        )]);
        let index = HierarchyIndex::build(&tree).unwrap();
        assert_eq!(index.state("Set", "Goa").unwrap().total_value, 3.0);
        assert_eq!(index.leaf("Set", "Goa").unwrap().parent_state, "Delhi");
    }

    #[test]
    fn reindexing_is_idempotent() {
        let tree = sample();
        let mut index = HierarchyIndex::build(&tree).unwrap();
        let first = index.clone();
        index.index_tree(&tree).unwrap();
        assert_eq!(index, first);
    }

    #[test]
    fn custom_separator_shapes_breadcrumbs() {
        let index = HierarchyIndex::build_with(&sample(), " / ").unwrap();
        assert_eq!(index.state("Bottom", "Kano").unwrap().breadcrumb, "Root / Bottom / Kano");
        assert_eq!(index.separator(), " / ");
    }

    #[test]
    fn rejects_trees_deeper_than_four_levels() {
        let tree = HierarchyNode::root(vec![HierarchyNode::branch(
            "A",
            vec![HierarchyNode::branch(
                "B",
                vec![HierarchyNode::branch("C", vec![HierarchyNode::leaf("D", 1.0)])],
            )],
        )]);
        let err = HierarchyIndex::build(&tree).unwrap_err();
        assert!(
            matches!(err, HierarchyError::MalformedInput { ref path, .. } if path == "Root->A->B->C->D"),
            "{err}"
        );
    }
}
