//! Node handles and node storage records.

use relife_core::{NodeId, TxnId};
use smallvec::SmallVec;

/// Inline capacity for input and dependent lists.
///
/// Sized for the automaton's 9-input neighbourhood: a cell reads itself
/// plus eight neighbours, and each variable feeds nine derived nodes.
pub(crate) const INLINE_EDGES: usize = 9;

/// Edge list stored inline for up to [`INLINE_EDGES`] entries.
pub(crate) type EdgeList = SmallVec<[NodeId; INLINE_EDGES]>;

/// Evaluation function of a derived node.
///
/// Receives the current values of the node's inputs, in declaration order.
pub(crate) type ComputeFn<T> = Box<dyn Fn(&[T]) -> T + Send>;

/// Handle to a variable (source) node.
///
/// Handles are plain ids: cheap to copy, valid for the lifetime of the
/// graph that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(pub(crate) NodeId);

impl Var {
    /// The untyped id of this node.
    #[inline]
    pub fn id(self) -> NodeId {
        self.0
    }
}

impl From<Var> for NodeId {
    fn from(v: Var) -> Self {
        v.0
    }
}

/// Handle to a derived node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Derived(pub(crate) NodeId);

impl Derived {
    /// The untyped id of this node.
    #[inline]
    pub fn id(self) -> NodeId {
        self.0
    }
}

impl From<Derived> for NodeId {
    fn from(d: Derived) -> Self {
        d.0
    }
}

/// Which kind of node occupies an arena slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A source node written through transactions.
    Variable,
    /// A node computed from other nodes.
    Derived,
}

/// Variable or derived payload of a node record.
pub(crate) enum Payload<T> {
    Variable,
    Derived {
        inputs: EdgeList,
        compute: ComputeFn<T>,
    },
}

/// One arena slot.
pub(crate) struct Node<T> {
    /// Current (variable) or memoized (derived) value.
    pub(crate) value: T,
    pub(crate) payload: Payload<T>,
    /// Topological level: 0 for variables, `1 + max(input levels)` otherwise.
    pub(crate) level: u32,
    /// Derived nodes reading this node, deduplicated, in creation order.
    pub(crate) dependents: EdgeList,
    /// Last transaction in which `value` changed.
    pub(crate) changed_at: TxnId,
    /// Last transaction in which this node was evaluated (derived only).
    pub(crate) evaluated_at: TxnId,
}

impl<T> Node<T> {
    pub(crate) fn kind(&self) -> NodeKind {
        match self.payload {
            Payload::Variable => NodeKind::Variable,
            Payload::Derived { .. } => NodeKind::Derived,
        }
    }

    pub(crate) fn inputs(&self) -> &[NodeId] {
        match &self.payload {
            Payload::Variable => &[],
            Payload::Derived { inputs, .. } => inputs,
        }
    }
}
