//! Per-tick metrics for the automaton.
//!
//! [`TickMetrics`] captures the propagation counters and timing of a
//! single [`tick()`](crate::GameBoard::tick), enabling a driver to print
//! statistics or decide when to stop.

use relife_core::{TickId, TxnReport};

/// Counters and timing collected during a single tick.
///
/// The board populates these fields after each `tick()` call;
/// consumers read them from the most recent tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// The tick these metrics describe.
    pub tick: TickId,
    /// Derived cells re-evaluated by the tick's transaction.
    pub recalculated: u32,
    /// Cell writes staged by the tick (always the cell count).
    pub writes: u32,
    /// Current-generation cells whose value actually changed.
    pub changed: u32,
    /// Next-generation cells whose value changed on re-evaluation.
    pub derived_changed: u32,
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Graph nodes backing the board.
    pub node_count: usize,
    /// Estimated heap footprint of the graph after the tick, in bytes.
    pub memory_bytes: usize,
}

impl TickMetrics {
    /// Fold a transaction report into tick metrics.
    pub(crate) fn from_report(tick: TickId, report: &TxnReport) -> Self {
        Self {
            tick,
            recalculated: report.evaluations,
            writes: report.writes,
            changed: report.changed,
            derived_changed: report.derived_changed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relife_core::TxnId;

    #[test]
    fn default_metrics_are_zero() {
        let m = TickMetrics::default();
        assert_eq!(m.tick, TickId(0));
        assert_eq!(m.recalculated, 0);
        assert_eq!(m.total_us, 0);
        assert_eq!(m.memory_bytes, 0);
    }

    #[test]
    fn from_report_copies_counters() {
        let report = TxnReport {
            txn: TxnId(4),
            writes: 400,
            changed: 12,
            evaluations: 70,
            derived_changed: 9,
        };
        let m = TickMetrics::from_report(TickId(3), &report);
        assert_eq!(m.tick, TickId(3));
        assert_eq!(m.recalculated, 70);
        assert_eq!(m.writes, 400);
        assert_eq!(m.changed, 12);
        assert_eq!(m.derived_changed, 9);
        assert_eq!(m.node_count, 0);
    }
}
