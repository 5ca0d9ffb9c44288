//! The capabilities a scene graph exposes to the culler.

use std::fmt::Debug;
use std::hash::Hash;

use crate::config::Toggle;
use crate::rect::Rect;

/// A hierarchical scene the culler can walk.
///
/// The culler holds node handles, never nodes. Implementations own the
/// hierarchy, the transforms and the bounds computation.
///
/// Implementations must keep each node's bounds a superset of its
/// descendants' bounds. The culler skips the subtree of any node whose bounds
/// lie inside the view, so a descendant poking outside its ancestor keeps
/// whatever flag it had before.
pub trait SceneGraph {
    /// Handle identifying a node. Compared by identity.
    type Node: Copy + Eq + Hash + Debug;

    /// Returns true if `node` still refers to a live node.
    fn contains(&self, node: Self::Node) -> bool;

    /// Computes the axis-aligned bounds of `node` and its subtree.
    ///
    /// With `refresh` set, stale transforms in the subtree are brought up to
    /// date first. Without it, cached transforms are used as they are.
    fn bounds(&mut self, node: Self::Node, refresh: bool) -> Rect;

    /// Returns the children of `node` in draw order. Empty for leaves.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Reads the flag selected by `toggle`.
    fn flag(&self, node: Self::Node, toggle: Toggle) -> bool;

    /// Writes the flag selected by `toggle`.
    fn set_flag(&mut self, node: Self::Node, toggle: Toggle, value: bool);
}
