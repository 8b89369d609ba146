//! Naive reference stepper.
//!
//! Recomputes every cell from scratch each generation, reading only the
//! previous board. Incremental boards are checked against it.

use relife_space::Torus;

/// One simultaneous Game of Life step over a row-major torus.
///
/// # Panics
///
/// Panics if the dimensions are invalid or `cells.len() != width * height`.
pub fn naive_step(width: u32, height: u32, cells: &[bool]) -> Vec<bool> {
    let torus = match Torus::new(width, height) {
        Ok(t) => t,
        Err(e) => panic!("invalid reference board: {e}"),
    };
    assert_eq!(cells.len(), torus.cell_count(), "reference board shape");
    (0..cells.len())
        .map(|i| {
            let live = torus
                .neighbour_indices(i)
                .iter()
                .filter(|&&j| cells[j])
                .count();
            if cells[i] {
                live == 2 || live == 3
            } else {
                live == 3
            }
        })
        .collect()
}

/// `generations` successive naive steps.
pub fn naive_run(width: u32, height: u32, cells: &[bool], generations: usize) -> Vec<bool> {
    let mut board = cells.to_vec();
    for _ in 0..generations {
        board = naive_step(width, height, &board);
    }
    board
}

/// Cells whose 9-cell neighbourhood (the cell and its eight neighbours)
/// contains at least one cell that differs between `before` and `after`.
///
/// On a board of width and height at least 3 this is exactly the set of
/// derived nodes an incremental step must re-evaluate.
pub fn affected_cells(width: u32, height: u32, before: &[bool], after: &[bool]) -> Vec<usize> {
    let torus = match Torus::new(width, height) {
        Ok(t) => t,
        Err(e) => panic!("invalid reference board: {e}"),
    };
    (0..before.len())
        .filter(|&i| {
            torus
                .neighbourhood(i)
                .iter()
                .any(|&j| before[j] != after[j])
        })
        .collect()
}
