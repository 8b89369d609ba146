//! Index arena holding every node of a graph.
//!
//! Slots are appended in creation order and never removed, so a
//! [`NodeId`] stays valid for the arena's whole lifetime and doubles as a
//! direct `Vec` index.

use std::mem::size_of;

use relife_core::{GraphError, NodeId};

use crate::node::{Node, NodeKind};

/// Append-only node storage.
pub(crate) struct NodeArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> NodeArena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The id the next pushed node will receive.
    pub(crate) fn next_id(&self) -> Result<NodeId, GraphError> {
        u32::try_from(self.nodes.len())
            .map(NodeId)
            .map_err(|_| GraphError::CapacityExceeded {
                requested: self.nodes.len() + 1,
            })
    }

    /// Append a node. `id` must come from [`next_id`](Self::next_id).
    pub(crate) fn push(&mut self, id: NodeId, node: Node<T>) {
        debug_assert_eq!(id.index(), self.nodes.len());
        self.nodes.push(node);
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    /// Check that every id in `inputs` refers to an existing slot.
    ///
    /// `new_id` is the id a node built from these inputs would receive;
    /// listing it is a self-cycle.
    pub(crate) fn check_inputs(&self, new_id: NodeId, inputs: &[NodeId]) -> Result<(), GraphError> {
        for &input in inputs {
            if input == new_id {
                return Err(GraphError::CyclicDependency { node: new_id });
            }
            if input.index() >= self.nodes.len() {
                return Err(GraphError::UnknownNode {
                    node: input,
                    node_count: new_id.0,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind() == kind).count()
    }

    /// Approximate heap footprint in bytes.
    ///
    /// Counts the slot vector and any edge lists that spilled past their
    /// inline capacity. Values owning heap memory of their own are not
    /// followed.
    pub(crate) fn memory_bytes(&self) -> usize {
        let slots = self.nodes.capacity() * size_of::<Node<T>>();
        let spilled: usize = self
            .nodes
            .iter()
            .map(|n| {
                let mut bytes = 0;
                if n.dependents.spilled() {
                    bytes += n.dependents.capacity() * size_of::<NodeId>();
                }
                if let crate::node::Payload::Derived { inputs, .. } = &n.payload {
                    if inputs.spilled() {
                        bytes += inputs.capacity() * size_of::<NodeId>();
                    }
                }
                bytes
            })
            .sum();
        slots + spilled
    }
}
