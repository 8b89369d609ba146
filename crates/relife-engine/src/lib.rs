//! Game of Life automaton driven by an incremental dependency graph.
//!
//! [`GameBoard`] wires a toroidal grid onto a [`relife_graph::Graph`]:
//! one variable per cell holds the current generation, one derived node
//! per cell computes the next generation from the cell and its eight
//! neighbours. Each [`tick()`](GameBoard::tick) reads every next value,
//! then writes them all back in a single transaction; only cells whose
//! neighbourhood changed are re-evaluated.
//!
//! # Example
//!
//! ```
//! use relife_engine::{BoardConfig, BoardState, GameBoard};
//!
//! // A horizontal blinker on a 5×5 torus.
//! let config = BoardConfig::with_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]);
//! let mut board = GameBoard::new(config).unwrap();
//!
//! // The displayed board is one generation ahead: vertical.
//! assert!(board.current_value(2, 1));
//! assert!(board.committed_value(1, 2));
//!
//! board.tick();
//! assert!(board.current_value(1, 2));
//! assert!(!board.current_value(2, 1));
//! assert_eq!(board.state(), BoardState::Running);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod metrics;
pub mod rules;
pub mod snapshot;

pub use board::{BoardState, GameBoard};
pub use config::{BoardConfig, ConfigError};
pub use metrics::TickMetrics;
pub use snapshot::BoardSnapshot;
