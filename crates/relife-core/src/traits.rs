//! Core abstraction traits for instrumentation and board reading.

use crate::report::TxnReport;

/// Receives one [`TxnReport`] per committed transaction.
///
/// Installed on a graph as an optional hook. Sinks observe; they never
/// influence propagation, so a graph with no sink computes exactly the
/// same values as one with a sink attached.
pub trait StatsSink {
    /// Record the counters of a committed transaction.
    fn record(&mut self, report: &TxnReport);
}

impl<F: FnMut(&TxnReport)> StatsSink for F {
    fn record(&mut self, report: &TxnReport) {
        self(report)
    }
}

/// Read-only access to a rectangular boolean board.
///
/// Renderers consume this trait; implemented by live boards and by
/// detached snapshots alike.
pub trait BoardView {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The cell at `(x, y)`, or `None` when out of range.
    fn cell(&self, x: u32, y: u32) -> Option<bool>;

    /// Number of live cells on the board.
    fn live_count(&self) -> usize {
        let mut n = 0;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.cell(x, y) == Some(true) {
                    n += 1;
                }
            }
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Diagonal(u32);

    impl BoardView for Diagonal {
        fn width(&self) -> u32 {
            self.0
        }
        fn height(&self) -> u32 {
            self.0
        }
        fn cell(&self, x: u32, y: u32) -> Option<bool> {
            (x < self.0 && y < self.0).then_some(x == y)
        }
    }

    #[test]
    fn default_live_count_walks_every_cell() {
        assert_eq!(Diagonal(5).live_count(), 5);
        assert_eq!(Diagonal(0).live_count(), 0);
    }

    #[test]
    fn closures_are_sinks() {
        let mut total = 0;
        {
            let mut sink = |r: &TxnReport| total += r.evaluations;
            sink.record(&TxnReport {
                evaluations: 4,
                ..Default::default()
            });
            sink.record(&TxnReport {
                evaluations: 2,
                ..Default::default()
            });
        }
        assert_eq!(total, 6);
    }
}
