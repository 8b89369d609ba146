//! Neighbourhood invariants over every cell of small and degenerate tori.
//!
//! For each `W×H` with `W, H ≥ 1`, every cell must list exactly eight
//! neighbours, all in range, equal to the set
//! `{(x+dx mod W, y+dy mod H) : (dx, dy) ≠ (0, 0)}`. On tori of at least
//! 3×3 the eight neighbours are also pairwise distinct and never the
//! cell itself.

use std::collections::BTreeSet;

use relife_space::{Torus, NEIGHBOUR_OFFSETS};

fn expected_neighbours(t: &Torus, x: u32, y: u32) -> Vec<(u32, u32)> {
    NEIGHBOUR_OFFSETS
        .iter()
        .map(|&(dx, dy)| {
            (
                (i64::from(x) + dx).rem_euclid(i64::from(t.width())) as u32,
                (i64::from(y) + dy).rem_euclid(i64::from(t.height())) as u32,
            )
        })
        .collect()
}

#[test]
fn every_cell_has_eight_in_range_neighbours() {
    for w in 1..=6u32 {
        for h in 1..=6u32 {
            let t = Torus::new(w, h).unwrap();
            for (x, y) in t.coords() {
                let n = t.neighbours(x, y);
                assert_eq!(n.to_vec(), expected_neighbours(&t, x, y), "{w}x{h} at ({x},{y})");
                for &(nx, ny) in &n {
                    assert!(nx < w && ny < h);
                }
                for i in t.neighbour_indices(t.index(x, y)) {
                    assert!(i < t.cell_count());
                }
            }
        }
    }
}

#[test]
fn neighbours_distinct_on_tori_of_three_or_more() {
    for w in 3..=7u32 {
        for h in 3..=7u32 {
            let t = Torus::new(w, h).unwrap();
            for (x, y) in t.coords() {
                let set: BTreeSet<_> = t.neighbours(x, y).into_iter().collect();
                assert_eq!(set.len(), 8, "{w}x{h} at ({x},{y})");
                assert!(!set.contains(&(x, y)));
            }
        }
    }
}

#[test]
fn every_cell_is_neighbour_of_exactly_eight_slots() {
    // On a torus each cell appears in eight neighbour lists (counting
    // multiplicity), which is what makes the dependency fan-out uniform.
    let t = Torus::new(5, 4).unwrap();
    let mut hits = vec![0usize; t.cell_count()];
    for i in 0..t.cell_count() {
        for n in t.neighbour_indices(i) {
            hits[n] += 1;
        }
    }
    assert!(hits.iter().all(|&h| h == 8));
}
