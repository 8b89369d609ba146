//! Error types for space operations.

use std::fmt;

/// Errors arising from torus construction or coordinate lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a space with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum supported value.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The value that was requested.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height` does not fit the cell index range.
    TooManyCells {
        /// The requested cell count.
        cells: u64,
        /// The largest accepted cell count.
        max: u64,
    },
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// Column of the offending coordinate.
        x: u32,
        /// Row of the offending coordinate.
        y: u32,
        /// Width of the space.
        width: u32,
        /// Height of the space.
        height: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { cells, max } => {
                write!(f, "{cells} cells exceeds maximum {max}")
            }
            Self::CoordOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
                )
            }
        }
    }
}

impl std::error::Error for SpaceError {}
