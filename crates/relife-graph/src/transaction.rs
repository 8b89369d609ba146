//! Explicit transaction handle.
//!
//! A [`Transaction`] mutably borrows its graph, so no other transaction
//! and no node creation can happen while it is open. Writes are staged on
//! the handle and only reach the graph on [`commit`](Transaction::commit).
//! Until then every read, through the handle or otherwise, sees the
//! pre-transaction values.

use indexmap::IndexMap;
use relife_core::{GraphError, NodeId, TxnReport};

use crate::graph::Graph;
use crate::node::{NodeKind, Var};

/// A batch of staged variable writes over one graph.
///
/// Writing the same variable twice keeps the last value. Nested scopes
/// opened with [`nested`](Self::nested) stage into the same batch; only
/// the outermost handle commits.
///
/// Dropping a handle without committing discards the staged writes
/// (rollback); the graph is left exactly as it was.
pub struct Transaction<'g, T> {
    graph: &'g mut Graph<T>,
    staged: IndexMap<NodeId, T>,
    depth: u32,
    finished: bool,
}

impl<'g, T: Clone + PartialEq> Transaction<'g, T> {
    pub(crate) fn new(graph: &'g mut Graph<T>) -> Self {
        Self {
            graph,
            staged: IndexMap::new(),
            depth: 0,
            finished: false,
        }
    }

    /// Stage `value` for `var`, replacing any value staged earlier.
    ///
    /// # Panics
    ///
    /// Panics if `var` does not name a variable of this graph.
    pub fn write(&mut self, var: Var, value: T) {
        if let Err(e) = self.try_write(var.id(), value) {
            panic!("{e}");
        }
    }

    /// Stage `value` for the variable with id `node`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `node` does not exist, or
    /// [`GraphError::NotAVariable`] if it is a derived node.
    pub fn try_write(&mut self, node: NodeId, value: T) -> Result<(), GraphError> {
        match self.graph.kind(node) {
            Some(NodeKind::Variable) => {
                self.staged.insert(node, value);
                Ok(())
            }
            Some(NodeKind::Derived) => Err(GraphError::NotAVariable { node }),
            None => Err(GraphError::UnknownNode {
                node,
                node_count: u32::try_from(self.graph.node_count()).unwrap_or(u32::MAX),
            }),
        }
    }

    /// Pre-transaction value of a node. Staged writes are not visible.
    pub fn read(&self, node: impl Into<NodeId>) -> &T {
        self.graph.read(node)
    }

    /// Value currently staged for `var`, if any.
    pub fn staged(&self, var: Var) -> Option<&T> {
        self.staged.get(&var.id())
    }

    /// Number of distinct variables with a staged write.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Nesting depth: 0 for the outermost scope.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Run `body` as a nested transaction.
    ///
    /// The nested scope shares this handle's batch: its writes are
    /// absorbed into the enclosing transaction and committed with it.
    pub fn nested<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    /// Apply every staged write at once and propagate.
    pub fn commit(mut self) -> TxnReport {
        self.finished = true;
        let staged = std::mem::take(&mut self.staged);
        self.graph.commit_staged(staged)
    }

    /// Discard every staged write. Returns how many were dropped.
    pub fn rollback(mut self) -> usize {
        self.finished = true;
        let dropped = self.staged.len();
        self.staged.clear();
        log::debug!("transaction rolled back: {dropped} staged writes discarded");
        dropped
    }
}

impl<T> Drop for Transaction<'_, T> {
    fn drop(&mut self) {
        if !self.finished && !self.staged.is_empty() {
            log::debug!(
                "transaction dropped without commit: {} staged writes discarded",
                self.staged.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relife_core::TxnId;

    fn pair() -> (Graph<i32>, Var, Var, crate::Derived) {
        let mut g = Graph::new();
        let a = g.create_variable(1);
        let b = g.create_variable(2);
        let sum = g
            .create_derived(&[a.id(), b.id()], |v: &[i32]| v[0] + v[1])
            .unwrap();
        (g, a, b, sum)
    }

    #[test]
    fn reads_see_pre_transaction_values() {
        let (mut g, a, b, sum) = pair();
        let mut tx = g.transaction();
        tx.write(a, 10);
        assert_eq!(*tx.read(a), 1);
        assert_eq!(*tx.read(sum), 3);
        assert_eq!(tx.staged(a), Some(&10));
        assert_eq!(tx.staged(b), None);
        tx.commit();
        assert_eq!(*g.read(sum), 12);
    }

    #[test]
    fn last_write_wins() {
        let (mut g, a, _, sum) = pair();
        let report = g.run_transaction(|tx| {
            tx.write(a, 5);
            tx.write(a, 7);
            assert_eq!(tx.staged_len(), 1);
        });
        assert_eq!(report.writes, 1);
        assert_eq!(*g.read(a), 7);
        assert_eq!(*g.read(sum), 9);
    }

    #[test]
    fn write_back_to_original_value_is_no_change() {
        let (mut g, a, _, _) = pair();
        let report = g.run_transaction(|tx| {
            tx.write(a, 50);
            tx.write(a, 1);
        });
        assert_eq!(report.changed, 0);
        assert_eq!(report.evaluations, 0);
    }

    #[test]
    fn nested_scope_is_absorbed() {
        let (mut g, a, b, sum) = pair();
        let report = g.run_transaction(|tx| {
            tx.write(a, 100);
            tx.nested(|inner| {
                assert_eq!(inner.depth(), 1);
                inner.write(b, 200);
                inner.nested(|innermost| innermost.write(a, 300));
            });
            assert_eq!(tx.depth(), 0);
            // Nothing is visible before the outer commit.
            assert_eq!(*tx.read(sum), 3);
        });
        assert_eq!(report.txn, TxnId(1));
        assert_eq!(report.writes, 2);
        assert_eq!(report.evaluations, 1);
        assert_eq!(*g.read(sum), 500);
    }

    #[test]
    fn dropped_transaction_rolls_back() {
        let (mut g, a, _, sum) = pair();
        {
            let mut tx = g.transaction();
            tx.write(a, 99);
        }
        assert_eq!(*g.read(a), 1);
        assert_eq!(*g.read(sum), 3);
        assert_eq!(g.last_txn(), TxnId::BUILD);
    }

    #[test]
    fn explicit_rollback_reports_dropped_writes() {
        let (mut g, a, b, _) = pair();
        let mut tx = g.transaction();
        tx.write(a, 4);
        tx.write(b, 4);
        assert_eq!(tx.rollback(), 2);
        assert_eq!(*g.read(a), 1);
        assert!(g.last_report().is_none());
    }

    #[test]
    fn try_write_rejects_derived_and_unknown() {
        let (mut g, _, _, sum) = pair();
        let mut tx = g.transaction();
        assert_eq!(
            tx.try_write(sum.id(), 0),
            Err(GraphError::NotAVariable { node: sum.id() })
        );
        assert_eq!(
            tx.try_write(NodeId(40), 0),
            Err(GraphError::UnknownNode {
                node: NodeId(40),
                node_count: 3
            })
        );
        assert_eq!(tx.staged_len(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot be written")]
    fn write_through_forged_handle_panics() {
        let (mut g, _, _, sum) = pair();
        let forged = Var(sum.id());
        g.run_transaction(|tx| tx.write(forged, 0));
    }
}
