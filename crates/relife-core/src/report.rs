//! Per-commit propagation report.

use crate::id::TxnId;

/// Counters describing one committed transaction.
///
/// Produced by every commit, including commits with no staged writes.
/// `evaluations` is the number the automaton reports as "recalculated":
/// each derived node contributes at most one evaluation per commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxnReport {
    /// The transaction this report describes.
    pub txn: TxnId,
    /// Distinct variables written (after last-write-wins collapsing).
    pub writes: u32,
    /// Variables whose value actually changed.
    pub changed: u32,
    /// Derived node evaluations performed by the propagation pass.
    pub evaluations: u32,
    /// Evaluations whose result differed from the memoized value.
    pub derived_changed: u32,
}

impl TxnReport {
    /// Whether the commit left every node value untouched.
    pub fn is_quiescent(&self) -> bool {
        self.changed == 0 && self.evaluations == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report_is_quiescent() {
        let r = TxnReport::default();
        assert!(r.is_quiescent());
        assert_eq!(r.txn, TxnId(0));
    }

    #[test]
    fn writes_without_change_stay_quiescent() {
        let r = TxnReport {
            txn: TxnId(3),
            writes: 10,
            ..Default::default()
        };
        assert!(r.is_quiescent());
    }
}
