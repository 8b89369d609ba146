//! Level assignment and the dirty-node queue driving propagation.
//!
//! Every node gets a level when created. Levels never change because
//! edges are only added together with their (new) target node. Ordering
//! dirty nodes by `(level, id)` is therefore a fixed topological order:
//! an input always has a strictly lower level than the nodes reading it.

use std::collections::BTreeSet;

use relife_core::NodeId;

/// Level for a derived node reading inputs at `input_levels`.
///
/// A derived node with no inputs is a constant and sits at level 1, one
/// above the variables, so it still sorts after every source.
pub(crate) fn derived_level(input_levels: impl IntoIterator<Item = u32>) -> u32 {
    input_levels.into_iter().max().unwrap_or(0) + 1
}

/// Set of nodes awaiting evaluation, drained lowest level first.
///
/// Set semantics give at-most-once scheduling: a node marked dirty by
/// several changed inputs is queued once.
#[derive(Debug, Default)]
pub(crate) struct DirtyQueue {
    pending: BTreeSet<(u32, NodeId)>,
}

impl DirtyQueue {
    pub(crate) fn schedule(&mut self, level: u32, node: NodeId) {
        self.pending.insert((level, node));
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.pending.pop_first().map(|(_, id)| id)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}
