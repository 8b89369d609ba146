//! Board configuration, validation, and error types.
//!
//! [`BoardConfig`] is the builder-input for a [`GameBoard`](crate::GameBoard).
//! [`validate()`](BoardConfig::validate) checks the dimensions and the
//! shape of the initial cell sequence before any graph node is created.

use std::error::Error;
use std::fmt;

use relife_core::GraphError;
use relife_space::{SpaceError, Torus};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`BoardConfig`] or building the
/// board's dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial cell sequence does not hold exactly `width * height` values.
    ShapeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied cell sequence.
        actual: usize,
    },
    /// The dimensions do not describe a valid torus.
    Space(SpaceError),
    /// The dependency graph rejected a node during construction.
    Graph(GraphError),
    /// The board needs more graph nodes than a node id can address.
    TooLarge {
        /// Number of cells requested.
        cells: usize,
        /// Largest supported cell count (two nodes per cell).
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "initial state has {actual} cells, board needs {expected}"
                )
            }
            Self::Space(e) => write!(f, "invalid board dimensions: {e}"),
            Self::Graph(e) => write!(f, "graph construction failed: {e}"),
            Self::TooLarge { cells, max } => {
                write!(f, "board of {cells} cells exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<GraphError> for ConfigError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

// ── BoardConfig ────────────────────────────────────────────────────

/// Dimensions and initial state of a board.
///
/// `cells` is row-major: the cell at `(x, y)` lives at `x + y * width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Initial liveness of every cell, row-major.
    pub cells: Vec<bool>,
}

impl BoardConfig {
    /// Largest cell count a board supports: two graph nodes per cell.
    pub const MAX_CELLS: usize = (u32::MAX / 2) as usize;

    /// Configuration from an explicit row-major cell sequence.
    pub fn new(width: u32, height: u32, cells: Vec<bool>) -> Self {
        Self {
            width,
            height,
            cells,
        }
    }

    /// All-dead board of the given size.
    ///
    /// Dimensions past [`MAX_CELLS`](Self::MAX_CELLS) allocate nothing;
    /// [`validate()`](Self::validate) then reports the dimension error.
    pub fn empty(width: u32, height: u32) -> Self {
        let len = u64::from(width) * u64::from(height);
        let cells = match usize::try_from(len) {
            Ok(len) if len <= Self::MAX_CELLS => vec![false; len],
            _ => Vec::new(),
        };
        Self::new(width, height, cells)
    }

    /// Board with the listed cells alive and every other cell dead.
    ///
    /// Coordinates wrap around the torus, so `(-1, 0)` is the last
    /// column of the first row. On a zero-sized or oversized board the
    /// list is ignored and [`validate()`](Self::validate) reports the
    /// dimensions.
    pub fn with_live_cells(width: u32, height: u32, live: &[(i64, i64)]) -> Self {
        let mut config = Self::empty(width, height);
        if config.cells.is_empty() {
            return config;
        }
        let (w, h) = (i64::from(width), i64::from(height));
        for &(x, y) in live {
            let i = x.rem_euclid(w) + y.rem_euclid(h) * w;
            if let Some(cell) = usize::try_from(i).ok().and_then(|i| config.cells.get_mut(i)) {
                *cell = true;
            }
        }
        config
    }

    /// Number of live cells in the initial state.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Check the configuration and return the board topology.
    ///
    /// Fails with [`ConfigError::Space`] on zero or oversized dimensions,
    /// [`ConfigError::TooLarge`] if the graph could not address every
    /// node, and [`ConfigError::ShapeMismatch`] if `cells` does not hold
    /// exactly `width * height` values.
    pub fn validate(&self) -> Result<Torus, ConfigError> {
        let torus = Torus::new(self.width, self.height)?;
        let expected = torus.cell_count();
        if expected > Self::MAX_CELLS {
            return Err(ConfigError::TooLarge {
                cells: expected,
                max: Self::MAX_CELLS,
            });
        }
        if self.cells.len() != expected {
            return Err(ConfigError::ShapeMismatch {
                expected,
                actual: self.cells.len(),
            });
        }
        Ok(torus)
    }
}
