pub mod error;
pub mod hierarchy;
pub mod navigation;
pub mod source;
pub mod config;

// Chart geometry and colors consumed by the viewer
pub mod render;

pub use error::HierarchyError;
pub use hierarchy::{HierarchyNode, NodeCursor, NodeKind, NodePath};
pub use navigation::{FocusState, NavigationController};
