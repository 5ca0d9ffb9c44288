//! # The Culler
//!
//! Owns a registration set of subtree roots and writes each node's toggle
//! from a bounds-vs-view test.
//!
//! ## Pruning
//!
//! In recursive mode a node whose bounds lie entirely inside the view is
//! marked visible and its children are NOT visited: by the bounds-nesting
//! invariant they are inside too. Their flags are left as the previous pass
//! (or other code) set them. A caller that shrinks the view after hiding
//! nodes through another path should `uncull` first.
//!
//! ## Allocation
//!
//! A pass allocates nothing. Bounds are returned by value and children are
//! walked by index, so no borrow of the graph is held across a flag write.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::config::{CullerConfig, Toggle};
use crate::graph::SceneGraph;
use crate::rect::Rect;
use crate::stats::CullStats;

/// Marks registered subtrees visible or hidden against a view rectangle.
#[derive(Debug, Clone)]
pub struct Culler<N> {
    recursive: bool,
    toggle: Toggle,
    targets: HashSet<N>,
    last_stats: CullStats,
}

impl<N: Copy + Eq + Hash + Debug> Default for Culler<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Copy + Eq + Hash + Debug> Culler<N> {
    /// Creates a recursive culler writing the `visible` flag.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CullerConfig::default())
    }

    /// Creates a culler with the given options.
    #[must_use]
    pub fn with_config(config: CullerConfig) -> Self {
        Self {
            recursive: config.recursive,
            toggle: config.toggle,
            targets: HashSet::new(),
            last_stats: CullStats::default(),
        }
    }

    /// Returns true if culling recurses into children.
    #[inline]
    #[must_use]
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Returns the flag this culler writes.
    #[inline]
    #[must_use]
    pub const fn toggle(&self) -> Toggle {
        self.toggle
    }

    /// Returns the counters of the most recent cull pass.
    #[inline]
    #[must_use]
    pub const fn last_stats(&self) -> &CullStats {
        &self.last_stats
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    /// Adds a subtree root. No-op if already registered.
    pub fn register(&mut self, node: N) -> &mut Self {
        if self.targets.insert(node) {
            trace!(?node, "registered cull target");
        }
        self
    }

    /// Adds every node in order.
    pub fn register_all<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
    {
        for node in nodes {
            self.register(node);
        }
        self
    }

    /// Removes a subtree root. No-op if absent.
    pub fn unregister(&mut self, node: N) -> &mut Self {
        if self.targets.remove(&node) {
            trace!(?node, "unregistered cull target");
        }
        self
    }

    /// Removes every node.
    pub fn unregister_all<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
    {
        for node in nodes {
            self.unregister(node);
        }
        self
    }

    /// Empties the registration set. Flags are left as they are.
    pub fn clear(&mut self) -> &mut Self {
        self.targets.clear();
        self
    }

    /// Returns true if `node` is registered.
    #[must_use]
    pub fn is_registered(&self, node: N) -> bool {
        self.targets.contains(&node)
    }

    /// Number of registered roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterates the registered roots in no particular order.
    pub fn targets(&self) -> impl Iterator<Item = N> + '_ {
        self.targets.iter().copied()
    }

    /// Drops registrations whose node is no longer alive in `graph`.
    ///
    /// `cull` and `uncull` skip such handles on every pass; call this after
    /// despawning to stop paying for them. Returns the number of registrations dropped.
    pub fn retain_live<G>(&mut self, graph: &G) -> usize
    where
        G: SceneGraph<Node = N>,
    {
        let before = self.targets.len();
        self.targets.retain(|&node| graph.contains(node));
        let dropped = before - self.targets.len();
        if dropped > 0 {
            warn!(dropped, "dropped stale cull targets");
        }
        dropped
    }

    // =========================================================================
    // CULL / UNCULL
    // =========================================================================

    /// Writes each registered node's toggle from its intersection with `view`.
    ///
    /// A node is visible iff its bounds overlap `view` with non-zero area. In
    /// recursive mode children are tested too, except below a node whose
    /// bounds lie entirely inside `view` (see the module docs).
    ///
    /// Unless `skip_bounds_refresh` is set, each registered root refreshes the
    /// transforms of its subtree once before testing; descendants reuse them.
    /// Handles that no longer refer to a live node are skipped.
    pub fn cull<G>(&mut self, graph: &mut G, view: &Rect, skip_bounds_refresh: bool) -> &mut Self
    where
        G: SceneGraph<Node = N>,
    {
        let toggle = self.toggle;
        let refresh = !skip_bounds_refresh;
        let mut stats = CullStats::default();

        for &target in &self.targets {
            if !graph.contains(target) {
                debug!(node = ?target, "skipping stale cull target");
                stats.skipped_stale += 1;
                continue;
            }

            let bounds = graph.bounds(target, refresh);
            if self.recursive {
                Self::cull_subtree(graph, toggle, view, target, bounds, &mut stats);
            } else {
                let visible = bounds.intersects(view);
                graph.set_flag(target, toggle, visible);
                stats.record(visible);
            }
        }

        debug!(
            targets = self.targets.len(),
            visited = stats.visited,
            hidden = stats.hidden,
            pruned = stats.pruned,
            "cull pass complete"
        );
        self.last_stats = stats;
        self
    }

    /// Sets every registered node back to visible.
    ///
    /// In recursive mode the whole subtree is reset, with no bounds tests and
    /// no pruning. Otherwise only the registered nodes themselves.
    pub fn uncull<G>(&mut self, graph: &mut G) -> &mut Self
    where
        G: SceneGraph<Node = N>,
    {
        let toggle = self.toggle;

        for &target in &self.targets {
            if !graph.contains(target) {
                debug!(node = ?target, "skipping stale cull target");
                continue;
            }

            if self.recursive {
                Self::uncull_subtree(graph, toggle, target);
            } else {
                graph.set_flag(target, toggle, true);
            }
        }
        self
    }

    fn cull_subtree<G>(
        graph: &mut G,
        toggle: Toggle,
        view: &Rect,
        node: N,
        bounds: Rect,
        stats: &mut CullStats,
    ) where
        G: SceneGraph<Node = N>,
    {
        let visible = bounds.intersects(view);
        graph.set_flag(node, toggle, visible);
        stats.record(visible);

        let child_count = graph.children(node).len();
        if child_count == 0 {
            return;
        }
        if view.contains_rect(&bounds) {
            stats.pruned += 1;
            return;
        }

        for index in 0..child_count {
            let child = graph.children(node)[index];
            // Transforms were refreshed at the root.
            let child_bounds = graph.bounds(child, false);
            Self::cull_subtree(graph, toggle, view, child, child_bounds, stats);
        }
    }

    fn uncull_subtree<G>(graph: &mut G, toggle: Toggle, node: N)
    where
        G: SceneGraph<Node = N>,
    {
        graph.set_flag(node, toggle, true);

        let child_count = graph.children(node).len();
        for index in 0..child_count {
            let child = graph.children(node)[index];
            Self::uncull_subtree(graph, toggle, child);
        }
    }
}
