//! Incremental dependency graph for the relife automaton.
//!
//! A [`Graph`] owns two kinds of node:
//!
//! - **Variables** ([`Var`]): source values written only inside a
//!   [`Transaction`].
//! - **Derived nodes** ([`Derived`]): pure functions of an ordered list of
//!   input nodes, evaluated once at creation and afterwards only when an
//!   input value actually changes.
//!
//! Nodes live in an index arena and are never removed. Every node is
//! assigned a level when it is created (variables are level 0, a derived
//! node sits one level above its highest input), and propagation always
//! drains dirty nodes in `(level, id)` order. Since the graph never
//! changes shape after creation, that order is a fixed topological order:
//! each derived node is evaluated at most once per commit, after all of
//! its inputs hold their final values.
//!
//! # Example
//!
//! ```
//! use relife_graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.create_variable(2);
//! let b = graph.create_variable(3);
//! let sum = graph
//!     .create_derived(&[a.id(), b.id()], |v: &[i32]| v[0] + v[1])
//!     .unwrap();
//! assert_eq!(*graph.read(sum), 5);
//!
//! let report = graph.run_transaction(|tx| {
//!     tx.write(a, 10);
//!     tx.write(b, 20);
//! });
//! assert_eq!(*graph.read(sum), 30);
//! assert_eq!(report.evaluations, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod arena;
pub mod graph;
pub mod node;
mod order;
pub mod transaction;

pub use graph::Graph;
pub use node::{Derived, NodeKind, Var};
pub use transaction::Transaction;

pub use relife_core::{GraphError, NodeId, StatsSink, TxnId, TxnReport};
