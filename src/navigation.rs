//! Drill-down navigation over a loaded hierarchy.
//!
//! `NavigationController` owns the original tree, its index and the single
//! live focus state. Every activation re-derives the displayed tree from the
//! original, so focus never compounds.

use crate::error::HierarchyError;
use crate::hierarchy::focus::compose_focus;
use crate::hierarchy::index::HierarchyIndex;
use crate::hierarchy::parser::parse_document;
use crate::hierarchy::resolve::{resolve_details, root_category, NodeDetails};
use crate::hierarchy::{HierarchyNode, NodeCursor, NodePath, DEFAULT_SEPARATOR};

/// Label of the category-pane entry that resets focus.
pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused { category: String },
}

impl FocusState {
    pub fn is_focused(&self) -> bool {
        matches!(self, FocusState::Focused { .. })
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            FocusState::Focused { category } => Some(category),
            FocusState::Unfocused => None,
        }
    }
}

/// One row of the category pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub label: String,
    pub path: NodePath,
    pub is_all: bool,
}

struct Loaded {
    original: HierarchyNode,
    index: HierarchyIndex,
}

pub struct NavigationController {
    separator: String,
    loaded: Option<Loaded>,
    focus: FocusState,
    focused_tree: Option<HierarchyNode>,
    selection: Option<NodePath>,
    details: Option<NodeDetails>,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            loaded: None,
            focus: FocusState::Unfocused,
            focused_tree: None,
            selection: None,
            details: None,
        }
    }

    /// Index `tree` and make it the original hierarchy, resetting focus.
    ///
    /// On failure the controller is left not ready.
    pub fn load(&mut self, tree: HierarchyNode) -> Result<(), HierarchyError> {
        self.reset_focus();
        self.loaded = None;
        let index = HierarchyIndex::build_with(&tree, &self.separator)?;
        log::info!(
            "loaded hierarchy with {} categories",
            index.category_names().len()
        );
        self.loaded = Some(Loaded {
            original: tree,
            index,
        });
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), HierarchyError> {
        match parse_document(json) {
            Ok(tree) => self.load(tree),
            Err(e) => {
                self.reset_focus();
                self.loaded = None;
                Err(e)
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn original_tree(&self) -> Option<&HierarchyNode> {
        self.loaded.as_ref().map(|l| &l.original)
    }

    pub fn index(&self) -> Option<&HierarchyIndex> {
        self.loaded.as_ref().map(|l| &l.index)
    }

    /// The tree to draw: the focused tree while focused, else the original.
    pub fn active_tree(&self) -> Option<&HierarchyNode> {
        self.focused_tree.as_ref().or_else(|| self.original_tree())
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    pub fn focused_category_name(&self) -> Option<&str> {
        self.focus.category()
    }

    /// Path of the node behind the current focus.
    pub fn selection(&self) -> Option<&NodePath> {
        self.selection.as_ref()
    }

    /// Details of the last activated node; hidden while unfocused.
    pub fn current_details(&self) -> Option<&NodeDetails> {
        self.details.as_ref()
    }

    /// Resolve details for a node of the active tree.
    pub fn resolve_details(&self, path: &NodePath) -> Result<NodeDetails, HierarchyError> {
        let loaded = self.loaded.as_ref().ok_or(HierarchyError::NotReady)?;
        let tree = self.active_tree().unwrap_or(&loaded.original);
        let cursor = path
            .resolve(tree)
            .ok_or_else(|| HierarchyError::not_found(path.to_string()))?;
        resolve_details(&loaded.index, &cursor)
    }

    /// Handle a node activation.
    ///
    /// The root or the "All" entry resets to the original tree. Any other
    /// node is located in the original tree by its name path and becomes
    /// the new focus. State is only updated once the whole transition has
    /// been computed.
    pub fn activate(&mut self, path: &NodePath, is_all_entry: bool) -> Result<(), HierarchyError> {
        let loaded = self.loaded.as_ref().ok_or(HierarchyError::NotReady)?;

        if is_all_entry || path.is_root() {
            log::debug!("activate {}: unfocus", path);
            self.reset_focus();
            return Ok(());
        }

        let selected = path
            .resolve(&loaded.original)
            .ok_or_else(|| HierarchyError::not_found(path.to_string()))?;
        let category = root_category(&selected).name().to_string();
        let tree = compose_focus(&selected)?;
        let details = {
            let in_focus = path
                .resolve(&tree)
                .ok_or_else(|| HierarchyError::not_found(path.to_string()))?;
            resolve_details(&loaded.index, &in_focus)?
        };

        log::debug!("activate {}: focus on category '{}'", path, category);
        self.focus = FocusState::Focused { category };
        self.focused_tree = Some(tree);
        self.selection = Some(path.clone());
        self.details = Some(details);
        Ok(())
    }

    pub fn activate_entry(&mut self, entry: &CategoryEntry) -> Result<(), HierarchyError> {
        self.activate(&entry.path, entry.is_all)
    }

    /// "All" followed by every category in document order.
    pub fn category_entries(&self) -> Vec<CategoryEntry> {
        let Some(loaded) = &self.loaded else {
            return Vec::new();
        };
        let mut entries = vec![CategoryEntry {
            label: ALL_LABEL.to_string(),
            path: NodePath::root(),
            is_all: true,
        }];
        entries.extend(loaded.index.category_names().iter().map(|name| CategoryEntry {
            label: name.clone(),
            path: NodePath::from_names([name.as_str()]),
            is_all: false,
        }));
        entries
    }

    /// Category name that drives the color of `node` in the active tree.
    pub fn color_key(&self, node: &NodeCursor<'_>) -> Option<String> {
        if node.depth() == 0 {
            return None;
        }
        match &self.focus {
            FocusState::Focused { category } => Some(category.clone()),
            FocusState::Unfocused => Some(root_category(node).name().to_string()),
        }
    }

    fn reset_focus(&mut self) {
        self.focus = FocusState::Unfocused;
        self.focused_tree = None;
        self.selection = None;
        self.details = None;
    }
}
