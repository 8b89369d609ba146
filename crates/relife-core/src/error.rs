//! Error types for dependency graph construction and mutation.

use std::error::Error;
use std::fmt;

use crate::id::NodeId;

/// Errors from building or writing a dependency graph.
///
/// All variants are detected eagerly: construction errors are returned
/// before any node is inserted, so a failed call leaves the graph
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A derived node lists itself among its own inputs. No topological
    /// order exists for such a node.
    CyclicDependency {
        /// The id the rejected node would have received.
        node: NodeId,
    },
    /// An input references a node that has not been created.
    UnknownNode {
        /// The offending input id.
        node: NodeId,
        /// Number of nodes in the graph at the time of the call.
        node_count: u32,
    },
    /// A write targeted a derived node. Only variables accept writes.
    NotAVariable {
        /// The derived node that was written.
        node: NodeId,
    },
    /// The graph cannot hold more nodes (ids are `u32`).
    CapacityExceeded {
        /// The node count that was requested.
        requested: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CyclicDependency { node } => {
                write!(f, "derived node {node} depends on itself")
            }
            Self::UnknownNode { node, node_count } => {
                write!(
                    f,
                    "input node {node} does not exist (graph has {node_count} nodes)"
                )
            }
            Self::NotAVariable { node } => {
                write!(f, "node {node} is derived and cannot be written")
            }
            Self::CapacityExceeded { requested } => {
                write!(f, "graph capacity exceeded: {requested} nodes requested")
            }
        }
    }
}

impl Error for GraphError {}
