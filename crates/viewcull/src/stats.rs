//! Per-pass culling counters.

/// Counters for a single cull pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Nodes whose bounds were tested.
    pub visited: u32,
    /// Nodes marked visible.
    pub visible: u32,
    /// Nodes marked hidden.
    pub hidden: u32,
    /// Fully contained nodes whose children were not visited.
    pub pruned: u32,
    /// Registered handles that no longer refer to a live node.
    pub skipped_stale: u32,
}

impl CullStats {
    /// Records one tested node.
    #[inline]
    pub(crate) fn record(&mut self, visible: bool) {
        self.visited += 1;
        if visible {
            self.visible += 1;
        } else {
            self.hidden += 1;
        }
    }

    /// Share of tested nodes that were hidden, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cull_rate(&self) -> f32 {
        if self.visited == 0 {
            return 0.0;
        }
        (self.hidden as f32 / self.visited as f32) * 100.0
    }
}
