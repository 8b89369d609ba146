//! Core types and traits for the relife reactive automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the graph engine and the grid automaton:
//! node and transaction identifiers, graph error types, the per-commit
//! [`TxnReport`], and the [`StatsSink`] / [`BoardView`] traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod report;
pub mod traits;

pub use error::GraphError;
pub use id::{NodeId, TickId, TxnId};
pub use report::TxnReport;
pub use traits::{BoardView, StatsSink};
