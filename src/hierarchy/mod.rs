pub mod parser;
pub mod index;
pub mod resolve;
pub mod focus;

use std::fmt;

use serde::Serialize;

/// Name of the synthetic depth-0 node.
pub const ROOT_NAME: &str = "Root";

/// Default separator between names in a breadcrumb.
pub const DEFAULT_SEPARATOR: &str = "->";

/// Supplementary leaf attributes, kept in document order.
pub type Details = serde_json::Map<String, serde_json::Value>;

/// Position of a node in the fixed four-level hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Synthetic root (depth 0), displayed as "All"
    Root,
    /// Top-level category (depth 1)
    Category,
    /// State within a category (depth 2)
    State,
    /// Finest-grained measurement, e.g. a city (depth 3)
    Leaf,
}

impl NodeKind {
    /// Tag for a positional depth. Depths beyond the leaf level have no tag.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(NodeKind::Root),
            1 => Some(NodeKind::Category),
            2 => Some(NodeKind::State),
            3 => Some(NodeKind::Leaf),
            _ => None,
        }
    }

    pub fn depth(self) -> usize {
        match self {
            NodeKind::Root => 0,
            NodeKind::Category => 1,
            NodeKind::State => 2,
            NodeKind::Leaf => 3,
        }
    }
}

/// One level of the domain tree.
///
/// `value` is the intrinsic measurement for leaves and the sum of the
/// children's values for internal nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl HierarchyNode {
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            children: Vec::new(),
            details: None,
        }
    }

    /// Internal node whose value is the sum of its children.
    pub fn branch(name: impl Into<String>, children: Vec<HierarchyNode>) -> Self {
        let value = children.iter().map(|c| c.value).sum();
        Self {
            name: name.into(),
            value,
            children,
            details: None,
        }
    }

    /// Synthetic root over the given categories.
    pub fn root(children: Vec<HierarchyNode>) -> Self {
        Self::branch(ROOT_NAME, children)
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&HierarchyNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of levels below and including this node.
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(|c| c.height()).max().unwrap_or(0)
    }
}

/// Ancestor-linked view of a node produced by walking down from a root.
///
/// The lineage holds borrowed references from the root to the node itself,
/// so the parent link is a non-owning back-reference into the same tree.
#[derive(Debug, Clone)]
pub struct NodeCursor<'a> {
    lineage: Vec<&'a HierarchyNode>,
}

impl<'a> NodeCursor<'a> {
    pub fn root(tree: &'a HierarchyNode) -> Self {
        Self {
            lineage: vec![tree],
        }
    }

    pub fn node(&self) -> &'a HierarchyNode {
        self.lineage[self.lineage.len() - 1]
    }

    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// Aggregated value of the subtree.
    pub fn value(&self) -> f64 {
        self.node().value
    }

    pub fn depth(&self) -> usize {
        self.lineage.len() - 1
    }

    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_depth(self.depth())
    }

    pub fn parent(&self) -> Option<NodeCursor<'a>> {
        if self.lineage.len() < 2 {
            return None;
        }
        Some(Self {
            lineage: self.lineage[..self.lineage.len() - 1].to_vec(),
        })
    }

    /// Node `levels` steps up the chain (1 = parent, 2 = grandparent).
    pub fn ancestor_node(&self, levels: usize) -> Option<&'a HierarchyNode> {
        let depth = self.depth();
        if levels > depth {
            return None;
        }
        Some(self.lineage[depth - levels])
    }

    pub fn child(&self, index: usize) -> Option<NodeCursor<'a>> {
        let child = self.node().children.get(index)?;
        Some(self.descend(child))
    }

    pub fn child_named(&self, name: &str) -> Option<NodeCursor<'a>> {
        let child = self.node().child(name)?;
        Some(self.descend(child))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeCursor<'a>> + '_ {
        self.node().children.iter().map(move |c| self.descend(c))
    }

    fn descend(&self, child: &'a HierarchyNode) -> NodeCursor<'a> {
        let mut lineage = Vec::with_capacity(self.lineage.len() + 1);
        lineage.extend_from_slice(&self.lineage);
        lineage.push(child);
        Self { lineage }
    }

    /// Nodes from this one up to the root, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a HierarchyNode> + '_ {
        self.lineage.iter().rev().copied()
    }

    /// Root-to-node name path of this cursor's tree, joined by `separator`.
    pub fn breadcrumb(&self, separator: &str) -> String {
        self.lineage
            .iter()
            .map(|n| n.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Hover text: breadcrumb plus the aggregated value.
    pub fn tooltip(&self, separator: &str) -> String {
        format!("{}\nValue: {}", self.breadcrumb(separator), self.value())
    }

    pub fn path(&self) -> NodePath {
        NodePath(
            self.lineage[1..]
                .iter()
                .map(|n| n.name.clone())
                .collect(),
        )
    }
}

/// Owned name path from the root (exclusive) to a node.
///
/// Sibling names are unique, so a path identifies the same logical node in
/// the original tree and in any focused tree derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// Path to the synthetic root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut names = self.0.clone();
        names.push(name.into());
        Self(names)
    }

    /// Locate this path in `tree`.
    pub fn resolve<'a>(&self, tree: &'a HierarchyNode) -> Option<NodeCursor<'a>> {
        let mut cursor = NodeCursor::root(tree);
        for name in &self.0 {
            cursor = cursor.child_named(name)?;
        }
        Some(cursor)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "{}", ROOT_NAME)
        } else {
            write!(f, "{}", self.0.join("/"))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample;
    use super::*;

    #[test]
    fn branch_sums_children() {
        let tree = sample();
        assert_eq!(tree.value, 125.0);
        assert_eq!(tree.child("Top").map(|c| c.value), Some(100.0));
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.node_count(), 10);
    }

    #[test]
    fn cursor_tracks_depth_and_lineage() {
        let tree = sample();
        let leaf = NodePath::from_names(["Top", "Lagos", "Ikeja"])
            .resolve(&tree)
            .unwrap();

        assert_eq!(leaf.depth(), 3);
        assert_eq!(leaf.kind(), Some(NodeKind::Leaf));
        assert_eq!(leaf.parent().unwrap().name(), "Lagos");
        assert_eq!(leaf.ancestor_node(2).unwrap().name, "Top");
        assert!(leaf.ancestor_node(4).is_none());
        assert_eq!(leaf.breadcrumb(DEFAULT_SEPARATOR), "Root->Top->Lagos->Ikeja");
        assert_eq!(
            leaf.ancestors().map(|n| n.name.as_str()).collect::<Vec<_>>(),
            ["Ikeja", "Lagos", "Top", "Root"]
        );
    }

    #[test]
    fn path_round_trips_through_cursor() {
        let tree = sample();
        let path = NodePath::from_names(["Bottom", "Kano"]);
        let cursor = path.resolve(&tree).unwrap();
        assert_eq!(cursor.path(), path);
        assert_eq!(cursor.children().count(), 2);
        assert_eq!(path.to_string(), "Bottom/Kano");
        assert_eq!(NodePath::root().to_string(), "Root");
    }

    #[test]
    fn unknown_path_does_not_resolve() {
        let tree = sample();
        assert!(NodePath::from_names(["Top", "Kano"]).resolve(&tree).is_none());
    }

    #[test]
    fn tooltip_includes_value() {
        let tree = sample();
        let state = NodePath::from_names(["Top", "Abuja"]).resolve(&tree).unwrap();
        assert_eq!(state.tooltip("->"), "Root->Top->Abuja\nValue: 40");
    }

    #[test]
    fn kind_is_limited_to_four_levels() {
        assert_eq!(NodeKind::from_depth(0), Some(NodeKind::Root));
        assert_eq!(NodeKind::from_depth(2).map(NodeKind::depth), Some(2));
        assert_eq!(NodeKind::from_depth(4), None);
    }
}
