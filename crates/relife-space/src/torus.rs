//! 2D toroidal grid with 8-connected neighbourhood.

use crate::error::SpaceError;

/// The eight neighbour offsets `(dx, dy)` in reading order:
/// top-left, top, top-right, left, right, bottom-left, bottom, bottom-right.
pub const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wrap `val` into `[0, len)`.
#[inline]
fn wrap_axis(val: i64, len: u32) -> u32 {
    // rem_euclid of a positive modulus is in [0, len), which fits u32.
    val.rem_euclid(i64::from(len)) as u32
}

/// A `width × height` grid whose edges wrap on both axes.
///
/// Cell `(x, y)` has flat index `x + y * width` (row-major). Neighbour
/// coordinates are taken modulo the dimensions, so edge and corner cells
/// have the same eight neighbours as interior cells. On grids narrower
/// than three cells a neighbour may coincide with another neighbour or
/// with the cell itself; the neighbourhood still lists eight entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Torus {
    width: u32,
    height: u32,
}

impl Torus {
    /// Largest accepted width or height.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Largest accepted cell count: flat indices must fit a `u32`.
    pub const MAX_CELLS: u64 = u32::MAX as u64;

    /// Create a torus of `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(SpaceError::TooManyCells)` if
    /// the product exceeds [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let cells = u64::from(width) * u64::from(height);
        if cells > Self::MAX_CELLS {
            return Err(SpaceError::TooManyCells {
                cells,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Flat index of `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range. Wrapped coordinates are
    /// always in range, so a panic here is a caller bug.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({x}, {y}) outside {}x{} torus",
            self.width,
            self.height
        );
        x as usize + y as usize * self.width as usize
    }

    /// Flat index of `(x, y)`, or `CoordOutOfBounds`.
    pub fn try_index(&self, x: u32, y: u32) -> Result<usize, SpaceError> {
        if x < self.width && y < self.height {
            Ok(x as usize + y as usize * self.width as usize)
        } else {
            Err(SpaceError::CoordOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Coordinate of a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    #[inline]
    pub fn coord(&self, index: usize) -> (u32, u32) {
        assert!(
            index < self.cell_count(),
            "cell index {index} outside torus of {} cells",
            self.cell_count()
        );
        let w = self.width as usize;
        // Both quotients are bounded by the dimensions, which are u32.
        ((index % w) as u32, (index / w) as u32)
    }

    /// Wrap an arbitrary signed coordinate onto the torus.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> (u32, u32) {
        (wrap_axis(x, self.width), wrap_axis(y, self.height))
    }

    /// The eight wrapped neighbours of `(x, y)`, in
    /// [`NEIGHBOUR_OFFSETS`] order.
    pub fn neighbours(&self, x: u32, y: u32) -> [(u32, u32); 8] {
        let (x, y) = (i64::from(x), i64::from(y));
        NEIGHBOUR_OFFSETS.map(|(dx, dy)| self.wrap(x + dx, y + dy))
    }

    /// Flat indices of the eight neighbours of the cell at `index`.
    pub fn neighbour_indices(&self, index: usize) -> [usize; 8] {
        let (x, y) = self.coord(index);
        self.neighbours(x, y).map(|(nx, ny)| self.index(nx, ny))
    }

    /// The cell followed by its eight neighbours: the nine inputs of a
    /// cell's transition, self first.
    pub fn neighbourhood(&self, index: usize) -> [usize; 9] {
        let n = self.neighbour_indices(index);
        [index, n[0], n[1], n[2], n[3], n[4], n[5], n[6], n[7]]
    }

    /// All coordinates in row-major order: `(0,0), (1,0), ..., (w-1,h-1)`.
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn zero_dimension_is_empty() {
        assert_eq!(Torus::new(0, 5), Err(SpaceError::EmptySpace));
        assert_eq!(Torus::new(5, 0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Torus::new(big, 1),
            Err(SpaceError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Torus::new(1, big),
            Err(SpaceError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn rejects_cell_count_overflow() {
        assert!(matches!(
            Torus::new(1 << 16, 1 << 16),
            Err(SpaceError::TooManyCells { .. })
        ));
    }

    // ── Index mapping ───────────────────────────────────────────

    #[test]
    fn index_is_row_major() {
        let t = Torus::new(4, 3).unwrap();
        assert_eq!(t.index(0, 0), 0);
        assert_eq!(t.index(3, 0), 3);
        assert_eq!(t.index(0, 1), 4);
        assert_eq!(t.index(3, 2), 11);
        assert_eq!(t.coord(6), (2, 1));
    }

    #[test]
    fn try_index_reports_bounds() {
        let t = Torus::new(4, 3).unwrap();
        assert_eq!(t.try_index(1, 1), Ok(5));
        assert_eq!(
            t.try_index(4, 0),
            Err(SpaceError::CoordOutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "outside 4x3 torus")]
    fn index_out_of_range_panics() {
        Torus::new(4, 3).unwrap().index(0, 3);
    }

    #[test]
    fn coords_cover_grid_in_order() {
        let t = Torus::new(3, 2).unwrap();
        let all: Vec<_> = t.coords().collect();
        assert_eq!(all.len(), 6);
        for (i, &(x, y)) in all.iter().enumerate() {
            assert_eq!(t.index(x, y), i);
        }
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn interior_neighbours_in_reading_order() {
        let t = Torus::new(5, 5).unwrap();
        assert_eq!(
            t.neighbours(2, 2),
            [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)]
        );
    }

    #[test]
    fn corner_wraps_on_both_axes() {
        let t = Torus::new(5, 4).unwrap();
        let n = t.neighbours(0, 0);
        assert_eq!(n[0], (4, 3)); // top-left wraps both
        assert_eq!(n[1], (0, 3)); // top wraps y
        assert_eq!(n[3], (4, 0)); // left wraps x
        assert_eq!(n[7], (1, 1));
    }

    #[test]
    fn single_cell_is_its_own_neighbour() {
        let t = Torus::new(1, 1).unwrap();
        assert!(t.neighbours(0, 0).iter().all(|&c| c == (0, 0)));
        assert_eq!(t.neighbourhood(0), [0; 9]);
    }

    #[test]
    fn neighbourhood_puts_self_first() {
        let t = Torus::new(4, 4).unwrap();
        let i = t.index(1, 2);
        let hood = t.neighbourhood(i);
        assert_eq!(hood[0], i);
        assert_eq!(&hood[1..], &t.neighbour_indices(i)[..]);
    }

    #[test]
    fn wrap_handles_far_offsets() {
        let t = Torus::new(7, 3).unwrap();
        assert_eq!(t.wrap(-1, -1), (6, 2));
        assert_eq!(t.wrap(-15, 10), (6, 1));
        assert_eq!(t.wrap(7, 3), (0, 0));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_match_modular_definition(
            w in 3u32..12,
            h in 3u32..12,
            x in 0u32..12,
            y in 0u32..12,
        ) {
            let (x, y) = (x % w, y % h);
            let t = Torus::new(w, h).unwrap();
            let n = t.neighbours(x, y);
            let mut expected = Vec::new();
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if (dx, dy) == (0, 0) {
                        continue;
                    }
                    let ex = (i64::from(x) + dx).rem_euclid(i64::from(w)) as u32;
                    let ey = (i64::from(y) + dy).rem_euclid(i64::from(h)) as u32;
                    expected.push((ex, ey));
                }
            }
            let mut got = n.to_vec();
            got.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn neighbours_symmetric(
            w in 1u32..10,
            h in 1u32..10,
            x in 0u32..10,
            y in 0u32..10,
        ) {
            let (x, y) = (x % w, y % h);
            let t = Torus::new(w, h).unwrap();
            for (nx, ny) in t.neighbours(x, y) {
                prop_assert!(t.neighbours(nx, ny).contains(&(x, y)));
            }
        }

        #[test]
        fn index_coord_bijection(w in 1u32..40, h in 1u32..40, i in 0usize..1600) {
            let t = Torus::new(w, h).unwrap();
            let i = i % t.cell_count();
            let (x, y) = t.coord(i);
            prop_assert!(x < w && y < h);
            prop_assert_eq!(t.index(x, y), i);
        }
    }
}
