use thiserror::Error;

/// Errors raised while loading, indexing, or navigating a hierarchy.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// A lookup key is absent from the index, or a path does not exist in the tree.
    #[error("not found: {key}")]
    NotFound { key: String },

    /// The document does not have the fixed root → category → state → leaf shape.
    #[error("malformed input at {path}: {reason}")]
    MalformedInput { path: String, reason: String },

    /// No hierarchy has been indexed yet.
    #[error("hierarchy not ready")]
    NotReady,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("fetch failed: {message}")]
    Fetch { message: String },
}

impl HierarchyError {
    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from a lookup miss rather than bad input.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
