//! The dependency graph: node creation, reads, and propagation.

use std::fmt;

use indexmap::IndexMap;
use relife_core::{GraphError, NodeId, StatsSink, TxnId, TxnReport};

use crate::arena::NodeArena;
use crate::node::{Derived, EdgeList, Node, NodeKind, Payload, Var};
use crate::order::{self, DirtyQueue};
use crate::transaction::Transaction;

/// An incremental computation graph over values of type `T`.
///
/// All nodes share one value type. Change detection uses `PartialEq`:
/// a write or an evaluation that produces a value equal to the stored
/// one is not a change and does not propagate.
///
/// The graph is single-threaded. It is [`Send`] when `T` is, so it can
/// move between threads, but all mutation goes through `&mut self`.
pub struct Graph<T> {
    arena: NodeArena<T>,
    last_txn: TxnId,
    last_report: Option<TxnReport>,
    total_evaluations: u64,
    max_level: u32,
    /// Reused input buffer for evaluations.
    scratch: Vec<T>,
    sink: Option<Box<dyn StatsSink + Send>>,
}

impl<T: Clone + PartialEq> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(nodes),
            last_txn: TxnId::BUILD,
            last_report: None,
            total_evaluations: 0,
            max_level: 0,
            scratch: Vec::new(),
            sink: None,
        }
    }

    // ── Construction ────────────────────────────────────────────

    /// Allocate a variable holding `initial`.
    ///
    /// # Panics
    ///
    /// Panics if the graph already holds `u32::MAX` nodes.
    pub fn create_variable(&mut self, initial: T) -> Var {
        let id = match self.arena.next_id() {
            Ok(id) => id,
            Err(e) => panic!("{e}"),
        };
        self.arena.push(
            id,
            Node {
                value: initial,
                payload: Payload::Variable,
                level: 0,
                dependents: EdgeList::new(),
                changed_at: self.last_txn,
                evaluated_at: self.last_txn,
            },
        );
        Var(id)
    }

    /// Allocate a derived node computing `compute` over `inputs`.
    ///
    /// `compute` receives the input values in the order given and is
    /// evaluated once immediately to seed the memoized value. It must be
    /// pure: the graph decides when, and whether, to call it again.
    ///
    /// Inputs may repeat. On error the graph is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`GraphError::CyclicDependency`] if `inputs` contains the id this
    ///   node would receive.
    /// - [`GraphError::UnknownNode`] if an input does not exist.
    /// - [`GraphError::CapacityExceeded`] if the graph is full.
    pub fn create_derived<F>(&mut self, inputs: &[NodeId], compute: F) -> Result<Derived, GraphError>
    where
        F: Fn(&[T]) -> T + Send + 'static,
    {
        let id = self.arena.next_id()?;
        self.arena.check_inputs(id, inputs)?;

        let level = order::derived_level(inputs.iter().map(|&i| self.arena.node(i).level));

        self.scratch.clear();
        for &input in inputs {
            self.scratch.push(self.arena.node(input).value.clone());
        }
        let value = compute(&self.scratch);
        self.total_evaluations += 1;

        for &input in inputs {
            let deps = &mut self.arena.node_mut(input).dependents;
            // `id` is the newest node, so a repeated input can only have
            // pushed it last.
            if deps.last() != Some(&id) {
                deps.push(id);
            }
        }

        self.arena.push(
            id,
            Node {
                value,
                payload: Payload::Derived {
                    inputs: inputs.iter().copied().collect(),
                    compute: Box::new(compute),
                },
                level,
                dependents: EdgeList::new(),
                changed_at: self.last_txn,
                evaluated_at: self.last_txn,
            },
        );
        self.max_level = self.max_level.max(level);
        Ok(Derived(id))
    }

    // ── Reads ───────────────────────────────────────────────────

    /// Current value of a node.
    ///
    /// Never evaluates anything: propagation keeps derived values up to
    /// date at commit time.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn read(&self, node: impl Into<NodeId>) -> &T {
        &self.arena.node(node.into()).value
    }

    /// Current value of a node, or `None` for an unknown id.
    pub fn try_read(&self, node: NodeId) -> Option<&T> {
        self.arena.get(node).map(|n| &n.value)
    }

    /// Recover a typed variable handle from a raw id.
    pub fn variable(&self, node: NodeId) -> Result<Var, GraphError> {
        match self.arena.get(node).map(Node::kind) {
            Some(NodeKind::Variable) => Ok(Var(node)),
            Some(NodeKind::Derived) => Err(GraphError::NotAVariable { node }),
            None => Err(self.unknown(node)),
        }
    }

    // ── Transactions ────────────────────────────────────────────

    /// Open a transaction.
    ///
    /// Writes are staged on the returned handle and applied together by
    /// [`Transaction::commit`]. Dropping the handle without committing
    /// discards them.
    pub fn transaction(&mut self) -> Transaction<'_, T> {
        Transaction::new(self)
    }

    /// Open a transaction, run `body` against it, and commit.
    pub fn run_transaction<F>(&mut self, body: F) -> TxnReport
    where
        F: FnOnce(&mut Transaction<'_, T>),
    {
        let mut tx = self.transaction();
        body(&mut tx);
        tx.commit()
    }

    /// Apply staged writes and run one propagation pass.
    ///
    /// Changed variables mark their dependents dirty; dirty nodes are
    /// evaluated lowest level first. A node whose new value equals its
    /// memoized value does not mark its own dependents.
    pub(crate) fn commit_staged(&mut self, staged: IndexMap<NodeId, T>) -> TxnReport {
        let txn = self.last_txn.next();
        self.last_txn = txn;

        let mut report = TxnReport {
            txn,
            writes: u32::try_from(staged.len()).unwrap_or(u32::MAX),
            ..TxnReport::default()
        };
        let mut dirty = DirtyQueue::default();

        for (id, value) in staged {
            let node = self.arena.node_mut(id);
            if node.value == value {
                continue;
            }
            node.value = value;
            node.changed_at = txn;
            report.changed += 1;
            self.schedule_dependents(id, &mut dirty);
        }

        while let Some(id) = dirty.pop() {
            let value = self.evaluate(id);
            report.evaluations += 1;

            let node = self.arena.node_mut(id);
            debug_assert_ne!(node.evaluated_at, txn, "node {id} evaluated twice in txn {txn}");
            node.evaluated_at = txn;
            if node.value != value {
                node.value = value;
                node.changed_at = txn;
                report.derived_changed += 1;
                self.schedule_dependents(id, &mut dirty);
            }
        }

        self.total_evaluations += u64::from(report.evaluations);
        self.last_report = Some(report);
        if let Some(sink) = self.sink.as_mut() {
            sink.record(&report);
        }
        log::trace!(
            "txn {txn}: {} writes, {} changed, {} evaluations, {} derived changed",
            report.writes,
            report.changed,
            report.evaluations,
            report.derived_changed,
        );
        report
    }

    fn schedule_dependents(&self, id: NodeId, dirty: &mut DirtyQueue) {
        for &dep in &self.arena.node(id).dependents {
            dirty.schedule(self.arena.node(dep).level, dep);
        }
    }

    fn evaluate(&mut self, id: NodeId) -> T {
        let node = self.arena.node(id);
        let Payload::Derived { inputs, compute } = &node.payload else {
            unreachable!("variable {id} scheduled for evaluation");
        };
        self.scratch.clear();
        for &input in inputs {
            self.scratch.push(self.arena.node(input).value.clone());
        }
        compute(&self.scratch)
    }

    fn unknown(&self, node: NodeId) -> GraphError {
        GraphError::UnknownNode {
            node,
            node_count: u32::try_from(self.arena.len()).unwrap_or(u32::MAX),
        }
    }
}

impl<T> Graph<T> {
    // ── Instrumentation ─────────────────────────────────────────

    /// Install a sink receiving one report per commit.
    ///
    /// Returns the previously installed sink, if any.
    pub fn set_stats_sink(
        &mut self,
        sink: Box<dyn StatsSink + Send>,
    ) -> Option<Box<dyn StatsSink + Send>> {
        self.sink.replace(sink)
    }

    /// Remove and return the installed sink.
    pub fn take_stats_sink(&mut self) -> Option<Box<dyn StatsSink + Send>> {
        self.sink.take()
    }

    /// Report of the most recent commit, `None` before the first one.
    pub fn last_report(&self) -> Option<&TxnReport> {
        self.last_report.as_ref()
    }

    /// Id of the most recent commit ([`TxnId::BUILD`] before the first).
    pub fn last_txn(&self) -> TxnId {
        self.last_txn
    }

    /// Evaluations since creation, including the seeding evaluation of
    /// every derived node.
    pub fn total_evaluations(&self) -> u64 {
        self.total_evaluations
    }

    // ── Introspection ───────────────────────────────────────────

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of variable nodes.
    pub fn variable_count(&self) -> usize {
        self.arena.count_kind(NodeKind::Variable)
    }

    /// Number of derived nodes.
    pub fn derived_count(&self) -> usize {
        self.arena.count_kind(NodeKind::Derived)
    }

    /// Highest level of any node (0 for a graph of variables only).
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Kind of a node.
    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.arena.get(node).map(Node::kind)
    }

    /// Topological level of a node.
    pub fn level(&self, node: NodeId) -> Option<u32> {
        self.arena.get(node).map(|n| n.level)
    }

    /// Declared inputs of a node, in order. Empty for variables.
    pub fn inputs(&self, node: NodeId) -> Option<&[NodeId]> {
        self.arena.get(node).map(Node::inputs)
    }

    /// Derived nodes reading `node`, deduplicated, in creation order.
    pub fn dependents(&self, node: NodeId) -> Option<&[NodeId]> {
        self.arena.get(node).map(|n| n.dependents.as_slice())
    }

    /// Last transaction in which the node's value changed.
    pub fn changed_at(&self, node: NodeId) -> Option<TxnId> {
        self.arena.get(node).map(|n| n.changed_at)
    }

    /// Last transaction in which a derived node was evaluated.
    pub fn evaluated_at(&self, node: Derived) -> Option<TxnId> {
        self.arena.get(node.id()).map(|n| n.evaluated_at)
    }

    /// Approximate heap footprint of the node arena, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.arena.memory_bytes()
    }
}

impl<T: Clone + PartialEq> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.arena.len())
            .field("max_level", &self.max_level)
            .field("last_txn", &self.last_txn)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

// Compile-time assertion: a graph of `Send` values is itself `Send`.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Graph<bool>>();
    }
};
