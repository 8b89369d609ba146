//! Detached copies of the displayed board.

use std::fmt;

use relife_core::{BoardView, TickId};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// An owned, read-only copy of a board at one tick.
///
/// Snapshots do not observe later ticks. Two boards that went through
/// the same ticks from the same seed produce equal snapshots with equal
/// [`hash()`](Self::hash)es.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    tick: TickId,
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl BoardSnapshot {
    /// Build a snapshot from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn new(tick: TickId, width: u32, height: u32, cells: Vec<bool>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "snapshot of {width}x{height} needs {} cells",
            width as usize * height as usize
        );
        Self {
            tick,
            width,
            height,
            cells,
        }
    }

    /// The tick at which the snapshot was taken.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Row-major cell values.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| ((i % w) as u32, (i / w) as u32))
    }

    /// FNV-1a hash over the dimensions and every cell.
    ///
    /// The tick is not folded in: equal boards hash equal regardless of
    /// when they were taken, which makes the hash usable for cycle checks.
    pub fn hash(&self) -> u64 {
        let mut hash = FNV_OFFSET;
        hash = fnv1a_u32(hash, self.width);
        hash = fnv1a_u32(hash, self.height);
        for &c in &self.cells {
            hash = fnv1a_byte(hash, c as u8);
        }
        hash
    }

    /// True when both snapshots hold the same cells, ignoring the tick.
    pub fn same_board(&self, other: &BoardSnapshot) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl BoardView for BoardSnapshot {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cell(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(x as usize + y as usize * self.width as usize)
            .copied()
    }

    fn live_count(&self) -> usize {
        BoardSnapshot::live_count(self)
    }
}

/// Rows of `O` (live) and `.` (dead), one line per row.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width as usize) {
            for &alive in row {
                f.write_str(if alive { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardSnapshot")
            .field("tick", &self.tick)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("live", &self.live_count())
            .finish()
    }
}
