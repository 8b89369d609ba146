//! relife: Conway's Game of Life evaluated by an incremental dependency graph.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! relife sub-crates. For most users, adding `relife` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use relife::prelude::*;
//!
//! // A 2×2 block on an 8×8 torus is a still life.
//! let config = BoardConfig::with_live_cells(8, 8, &[(3, 3), (4, 3), (3, 4), (4, 4)]);
//! let mut board = GameBoard::new(config).unwrap();
//! assert_eq!(board.recalculated(), None);
//!
//! board.tick();
//! assert_eq!(board.recalculated(), Some(0));
//! assert!(board.is_stable());
//! assert_eq!(board.snapshot().live_count(), 4);
//! ```
//!
//! The graph engine is usable on its own:
//!
//! ```rust
//! use relife::prelude::*;
//!
//! let mut g = Graph::new();
//! let a = g.create_variable(2);
//! let b = g.create_variable(3);
//! let sum = g.create_derived(&[a.id(), b.id()], |v: &[i32]| v[0] + v[1]).unwrap();
//!
//! let report = g.run_transaction(|tx| {
//!     tx.write(a, 10);
//!     tx.write(b, 20);
//! });
//! assert_eq!(*g.read(sum), 30);
//! assert_eq!(report.evaluations, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `relife-core` | IDs, error types, transaction reports, core traits |
//! | [`graph`] | `relife-graph` | Dependency graph, node handles, transactions |
//! | [`space`] | `relife-space` | Toroidal grid topology |
//! | [`engine`] | `relife-engine` | Game of Life board, rule, configuration, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`relife-core`).
///
/// Contains [`types::GraphError`], [`types::TxnReport`], and the
/// [`types::StatsSink`] and [`types::BoardView`] traits.
pub use relife_core as types;

/// Incremental dependency graph (`relife-graph`).
///
/// [`graph::Graph`] holds variables and derived nodes; writes go through
/// a [`graph::Transaction`].
pub use relife_graph as graph;

/// Toroidal grid topology (`relife-space`).
pub use relife_space as space;

/// The Game of Life automaton (`relife-engine`).
///
/// [`engine::GameBoard`] is the main entry point.
pub use relife_engine as engine;

/// Common imports for typical relife usage.
///
/// ```rust
/// use relife::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use relife_core::{BoardView, GraphError, StatsSink, TickId, TxnId, TxnReport};

    // Graph
    pub use relife_graph::{Derived, Graph, Transaction, Var};

    // Space
    pub use relife_space::{SpaceError, Torus};

    // Engine
    pub use relife_engine::{
        BoardConfig, BoardSnapshot, BoardState, ConfigError, GameBoard, TickMetrics,
    };
}
