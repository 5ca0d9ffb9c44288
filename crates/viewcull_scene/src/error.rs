//! # Scene Error Types

use thiserror::Error;

use crate::id::NodeId;

/// Errors that can occur while editing a scene.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The handle refers to a node that was despawned (or never existed).
    #[error("stale node handle: {0}")]
    StaleNode(NodeId),

    /// The child already has a parent.
    #[error("node {child} is already a child of {parent}")]
    AlreadyParented {
        /// The node being attached.
        child: NodeId,
        /// Its current parent.
        parent: NodeId,
    },

    /// Attaching would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle {
        /// The requested parent.
        parent: NodeId,
        /// The node being attached, an ancestor of `parent`.
        child: NodeId,
    },

    /// A node cannot be its own parent.
    #[error("node {0} cannot be its own parent")]
    SelfParent(NodeId),

    /// The node has no parent to detach from.
    #[error("node {0} has no parent")]
    NotParented(NodeId),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
