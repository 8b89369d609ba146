//! The automaton: a toroidal board wired onto a dependency graph.
//!
//! [`GameBoard`] owns two boards of graph nodes over the same torus:
//!
//! - the *current* board, one variable per cell, holding the committed
//!   generation;
//! - the *next* board, one derived node per cell, computing the
//!   following generation from the cell and its eight neighbours.
//!
//! A [`tick()`](GameBoard::tick) is two-phase. It first reads every
//! next-board value, then writes them all onto the current board inside
//! one transaction. Because every write value is captured before any
//! write lands, no cell observes a half-updated neighbourhood.
//!
//! # Ownership model
//!
//! `GameBoard` is [`Send`] but not [`Sync`]. Every mutating method takes
//! `&mut self`; reads between ticks are plain shared borrows.

use std::fmt;
use std::time::Instant;

use relife_core::{BoardView, StatsSink, TickId};
use relife_graph::{Derived, Graph, Var};
use relife_space::Torus;

use crate::config::{BoardConfig, ConfigError};
use crate::metrics::TickMetrics;
use crate::rules;
use crate::snapshot::BoardSnapshot;

// Compile-time assertion: GameBoard is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GameBoard>();
    }
};

// ── BoardState ─────────────────────────────────────────────────────

/// Lifecycle of a [`GameBoard`].
///
/// `Constructed → Running → Stable`, or `Constructed → Stable` when the
/// seed is already a fixpoint. No transition leaves `Stable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardState {
    /// Built, not yet ticked.
    Constructed,
    /// Ticked at least once; the last tick re-evaluated some cells.
    Running,
    /// The last tick re-evaluated nothing. Further ticks are no-ops.
    Stable,
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Constructed => "constructed",
            Self::Running => "running",
            Self::Stable => "stable",
        })
    }
}

// ── GameBoard ──────────────────────────────────────────────────────

/// A Game of Life board evaluated incrementally.
pub struct GameBoard {
    torus: Torus,
    graph: Graph<bool>,
    current: Vec<Var>,
    next: Vec<Derived>,
    tick: TickId,
    recalculated: Option<u32>,
    state: BoardState,
    last_metrics: TickMetrics,
    /// Next-board values captured by phase one of a tick.
    staged: Vec<bool>,
}

impl GameBoard {
    /// Build a board from a configuration.
    ///
    /// Validates the configuration before creating any graph node, then
    /// creates one variable per cell (row-major) followed by one derived
    /// node per cell over that cell's neighbourhood.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the dimensions are invalid or `cells`
    /// does not hold exactly `width * height` values.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let torus = config.validate()?;
        let cells = torus.cell_count();

        let mut graph = Graph::with_capacity(cells * 2);
        let current: Vec<Var> = config
            .cells
            .into_iter()
            .map(|alive| graph.create_variable(alive))
            .collect();

        let mut next = Vec::with_capacity(cells);
        for i in 0..cells {
            let inputs = torus.neighbourhood(i).map(|j| current[j].id());
            next.push(graph.create_derived(&inputs, rules::transition)?);
        }

        log::debug!(
            "built {}x{} board: {} nodes, max level {}",
            torus.width(),
            torus.height(),
            graph.node_count(),
            graph.max_level(),
        );

        Ok(Self {
            torus,
            graph,
            current,
            next,
            tick: TickId(0),
            recalculated: None,
            state: BoardState::Constructed,
            last_metrics: TickMetrics::default(),
            staged: Vec::with_capacity(cells),
        })
    }

    // ── Ticking ─────────────────────────────────────────────────

    /// Advance one generation.
    ///
    /// Captures every next-board value, then writes them onto the current
    /// board in a single transaction. Only next-board cells with a changed
    /// input are re-evaluated; their count becomes
    /// [`recalculated()`](Self::recalculated).
    pub fn tick(&mut self) -> &TickMetrics {
        let start = Instant::now();

        self.staged.clear();
        for &cell in &self.next {
            self.staged.push(*self.graph.read(cell));
        }

        let current = &self.current;
        let staged = &self.staged;
        let report = self.graph.run_transaction(|tx| {
            for (&var, &alive) in current.iter().zip(staged) {
                tx.write(var, alive);
            }
        });

        self.tick = TickId(self.tick.0 + 1);
        self.recalculated = Some(report.evaluations);

        let was_stable = self.state == BoardState::Stable;
        debug_assert!(
            !was_stable || report.evaluations == 0,
            "stable board re-evaluated {} cells",
            report.evaluations
        );
        self.state = if report.evaluations == 0 {
            BoardState::Stable
        } else {
            BoardState::Running
        };

        let mut metrics = TickMetrics::from_report(self.tick, &report);
        metrics.node_count = self.graph.node_count();
        metrics.memory_bytes = self.graph.memory_bytes();
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = metrics;

        log::trace!(
            "tick {}: {} cells changed, {} recalculated",
            self.tick,
            report.changed,
            report.evaluations,
        );
        if !was_stable && self.state == BoardState::Stable {
            log::info!("board stable after {} ticks", self.tick);
        }

        &self.last_metrics
    }

    // ── Cell reads ──────────────────────────────────────────────

    /// Displayed value of the cell at `(x, y)`.
    ///
    /// This is the next-board value: the generation after the last
    /// committed one. Before the first tick it is the successor of the
    /// seed.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the board.
    pub fn current_value(&self, x: u32, y: u32) -> bool {
        *self.graph.read(self.next[self.torus.index(x, y)])
    }

    /// Displayed value of the cell at `(x, y)`, or `None` outside the board.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        let i = self.torus.try_index(x, y).ok()?;
        Some(*self.graph.read(self.next[i]))
    }

    /// Committed value of the cell at `(x, y)`: the generation the
    /// displayed board was computed from.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the board.
    pub fn committed_value(&self, x: u32, y: u32) -> bool {
        *self.graph.read(self.current[self.torus.index(x, y)])
    }

    /// Copy of the displayed board.
    pub fn snapshot(&self) -> BoardSnapshot {
        let cells = self.next.iter().map(|&d| *self.graph.read(d)).collect();
        BoardSnapshot::new(self.tick, self.torus.width(), self.torus.height(), cells)
    }

    /// Copy of the committed board.
    pub fn committed_snapshot(&self) -> BoardSnapshot {
        let cells = self.current.iter().map(|&v| *self.graph.read(v)).collect();
        BoardSnapshot::new(self.tick, self.torus.width(), self.torus.height(), cells)
    }

    // ── Status ──────────────────────────────────────────────────

    /// Cells re-evaluated by the last tick, `None` before the first tick.
    pub fn recalculated(&self) -> Option<u32> {
        self.recalculated
    }

    /// True iff the last tick re-evaluated no cell.
    ///
    /// Always false before the first tick.
    pub fn is_stable(&self) -> bool {
        self.recalculated == Some(0)
    }

    /// Lifecycle state.
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Number of ticks executed.
    pub fn generation(&self) -> u64 {
        self.tick.0
    }

    /// Id of the last tick (`TickId(0)` before the first).
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Metrics of the last tick (all zero before the first).
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }

    // ── Shape and internals ─────────────────────────────────────

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.torus.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.torus.height()
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.torus.cell_count()
    }

    /// The board topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// The backing dependency graph, for inspection.
    pub fn graph(&self) -> &Graph<bool> {
        &self.graph
    }

    /// Install a sink receiving the report of every tick's transaction.
    ///
    /// Returns the previously installed sink, if any.
    pub fn set_stats_sink(
        &mut self,
        sink: Box<dyn StatsSink + Send>,
    ) -> Option<Box<dyn StatsSink + Send>> {
        self.graph.set_stats_sink(sink)
    }

    /// Remove and return the installed sink.
    pub fn take_stats_sink(&mut self) -> Option<Box<dyn StatsSink + Send>> {
        self.graph.take_stats_sink()
    }
}

impl BoardView for GameBoard {
    fn width(&self) -> u32 {
        self.torus.width()
    }

    fn height(&self) -> u32 {
        self.torus.height()
    }

    fn cell(&self, x: u32, y: u32) -> Option<bool> {
        self.get(x, y)
    }
}

impl fmt::Debug for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameBoard")
            .field("width", &self.torus.width())
            .field("height", &self.torus.height())
            .field("tick", &self.tick)
            .field("state", &self.state)
            .field("recalculated", &self.recalculated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relife_core::TxnReport;
    use std::sync::{Arc, Mutex};

    fn blinker() -> GameBoard {
        GameBoard::new(BoardConfig::with_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)])).unwrap()
    }

    #[test]
    fn construction_wires_two_nodes_per_cell() {
        let board = blinker();
        let g = board.graph();
        assert_eq!(g.variable_count(), 25);
        assert_eq!(g.derived_count(), 25);
        assert_eq!(g.max_level(), 1);
        assert_eq!(board.cell_count(), 25);
    }

    #[test]
    fn fresh_board_has_no_count() {
        let board = blinker();
        assert_eq!(board.state(), BoardState::Constructed);
        assert_eq!(board.recalculated(), None);
        assert!(!board.is_stable());
        assert_eq!(board.generation(), 0);
        assert_eq!(board.last_metrics(), &TickMetrics::default());
    }

    #[test]
    fn displayed_board_leads_committed_board() {
        let board = blinker();
        // Committed: horizontal. Displayed: its successor, vertical.
        assert!(board.committed_value(1, 2));
        assert!(!board.committed_value(2, 1));
        assert!(board.current_value(2, 1));
        assert!(board.current_value(2, 3));
        assert!(!board.current_value(1, 2));
    }

    #[test]
    fn tick_commits_displayed_board() {
        let mut board = blinker();
        let before = board.snapshot();
        board.tick();
        assert!(board.committed_snapshot().same_board(&before));
        assert_eq!(board.state(), BoardState::Running);
        assert_eq!(board.generation(), 1);
        assert!(board.recalculated().unwrap() > 0);
    }

    #[test]
    fn metrics_follow_transaction() {
        let mut board = blinker();
        let m = board.tick().clone();
        assert_eq!(m.tick, TickId(1));
        assert_eq!(m.writes, 25);
        // Two cells die, two are born.
        assert_eq!(m.changed, 4);
        assert_eq!(Some(m.recalculated), board.recalculated());
        assert_eq!(m.node_count, 50);
        assert!(m.memory_bytes > 0);
    }

    #[test]
    fn empty_board_stabilises_on_first_tick() {
        let mut board = GameBoard::new(BoardConfig::empty(4, 4)).unwrap();
        board.tick();
        assert_eq!(board.recalculated(), Some(0));
        assert_eq!(board.state(), BoardState::Stable);
        board.tick();
        assert_eq!(board.state(), BoardState::Stable);
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = GameBoard::new(BoardConfig::new(5, 5, vec![false; 24])).unwrap_err();
        assert!(matches!(err, ConfigError::ShapeMismatch { expected: 25, actual: 24 }));
    }

    #[test]
    fn get_is_bounds_checked() {
        let board = blinker();
        assert_eq!(board.get(2, 1), Some(true));
        assert_eq!(board.get(5, 0), None);
        assert_eq!(board.cell(0, 5), None);
    }

    #[test]
    #[should_panic(expected = "outside 5x5 torus")]
    fn current_value_out_of_range_panics() {
        blinker().current_value(5, 0);
    }

    #[test]
    fn sink_sees_every_tick() {
        let seen: Arc<Mutex<Vec<TxnReport>>> = Arc::default();
        let recorded = Arc::clone(&seen);
        let mut board = blinker();
        board.set_stats_sink(Box::new(move |r: &TxnReport| recorded.lock().unwrap().push(*r)));
        board.tick();
        board.tick();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].evaluations, board.recalculated().unwrap());
        drop(seen);
        assert!(board.take_stats_sink().is_some());
    }

    #[test]
    fn state_display() {
        assert_eq!(BoardState::Stable.to_string(), "stable");
    }
}
