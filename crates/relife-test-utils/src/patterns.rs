//! Canonical seeds written as text rows.
//!
//! Rows use `O` (or `#`) for a live cell and `.` (or `_`) for a dead one,
//! matching the board's display glyphs.

/// A parsed seed: dimensions plus row-major cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<bool>,
}

impl Seed {
    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> Vec<(u32, u32)> {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(i, _)| ((i % w) as u32, (i / w) as u32))
            .collect()
    }

    /// The same seed placed in the top-left corner of a larger field.
    ///
    /// # Panics
    ///
    /// Panics if the field is smaller than the seed.
    pub fn padded(&self, width: u32, height: u32) -> Seed {
        assert!(width >= self.width && height >= self.height, "field smaller than seed");
        let mut cells = vec![false; width as usize * height as usize];
        for (x, y) in self.live_cells() {
            cells[x as usize + y as usize * width as usize] = true;
        }
        Seed {
            width,
            height,
            cells,
        }
    }
}

/// Parse equal-length text rows into a seed.
///
/// # Panics
///
/// Panics on ragged rows or an unknown glyph.
pub fn parse_rows(rows: &[&str]) -> Seed {
    let width = rows.first().map_or(0, |r| r.len());
    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "row {y} has {} cells, expected {width}", row.len());
        for c in row.chars() {
            cells.push(match c {
                'O' | '#' => true,
                '.' | '_' => false,
                other => panic!("unknown glyph {other:?} in row {y}"),
            });
        }
    }
    Seed {
        width: width as u32,
        height: rows.len() as u32,
        cells,
    }
}

/// 2×2 still life inside a 4×4 field.
pub fn block() -> Seed {
    parse_rows(&["....", ".OO.", ".OO.", "...."])
}

/// Period-2 oscillator, horizontal phase, inside a 5×5 field.
pub fn blinker() -> Seed {
    parse_rows(&[".....", ".....", ".OOO.", ".....", "....."])
}

/// Six-cell still life inside a 6×5 field.
pub fn beehive() -> Seed {
    parse_rows(&["......", "..OO..", ".O..O.", "..OO..", "......"])
}

/// South-east glider in the top-left corner of a 5×5 field.
pub fn glider() -> Seed {
    parse_rows(&[".O...", "..O..", "OOO..", ".....", "....."])
}

/// The 20×20 demonstration seed: a glider, a blinker, a beehive and
/// a block.
pub fn demo_seed() -> Seed {
    parse_rows(&[
        "....................",
        ".O.O................",
        "..OO.....OOO........",
        "..O.............O...",
        "...............O.O..",
        "...............O.O..",
        "................O...",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        ".OO.................",
        ".OO.................",
        "....................",
        "....................",
    ])
}
