//! Toroidal grid topology for the relife automaton.
//!
//! [`Torus`] maps `(x, y)` coordinates to flat row-major cell indices and
//! back, and resolves the 8-connected (Moore) neighbourhood with periodic
//! wrap on both axes, so every cell has exactly eight neighbours.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod torus;

pub use error::SpaceError;
pub use torus::{Torus, NEIGHBOUR_OFFSETS};
