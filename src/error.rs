//! Error types for tree operations.
//!
//! Every variant is raised before any link is touched, so a failed call
//! leaves the tree exactly as it was.

use crate::node::NodeId;

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur during tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A key or node reference was required but absent (or stale).
    #[error("{operation}: missing key or node reference")]
    NullArgument { operation: &'static str },

    /// `rotate` was asked to act on nodes that are not parent and child.
    #[error("rotate: node {child} is not a direct child of node {parent}")]
    InvalidRelationship { child: NodeId, parent: NodeId },

    /// The 32-bit node id space is used up.
    #[error("tree is full: {capacity} nodes")]
    CapacityExceeded { capacity: usize },
}

impl TreeError {
    /// Returns true for the null-argument class of errors.
    pub fn is_null_argument(&self) -> bool {
        matches!(self, TreeError::NullArgument { .. })
    }

    /// Returns true for the illegal-relationship class of errors.
    pub fn is_invalid_relationship(&self) -> bool {
        matches!(self, TreeError::InvalidRelationship { .. })
    }
}
