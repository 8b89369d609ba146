//! Benchmark profiles for the relife automaton.
//!
//! - [`soup_profile`]: square torus seeded with a deterministic random soup
//! - [`still_profile`]: square torus tiled with blocks, stable from the start
//! - [`demo_profile`]: the 20×20 demonstration seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use relife_engine::BoardConfig;
use relife_test_utils::{patterns, random_soup};

/// Live-cell density of benchmark soups, in percent.
pub const SOUP_DENSITY: u8 = 35;

/// `side`×`side` torus with a random soup at [`SOUP_DENSITY`].
pub fn soup_profile(side: u32, seed: u64) -> BoardConfig {
    BoardConfig::new(side, side, random_soup(side, side, SOUP_DENSITY, seed))
}

/// `side`×`side` torus tiled with 2×2 blocks on a 4-cell pitch.
///
/// Every tick recalculates nothing, so this measures the fixed cost of
/// staging and diffing a full board of writes.
pub fn still_profile(side: u32) -> BoardConfig {
    let mut live = Vec::new();
    for y in (1..side.saturating_sub(2)).step_by(4) {
        for x in (1..side.saturating_sub(2)).step_by(4) {
            let (x, y) = (i64::from(x), i64::from(y));
            live.extend([(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]);
        }
    }
    BoardConfig::with_live_cells(side, side, &live)
}

/// The 20×20 demonstration seed.
pub fn demo_profile() -> BoardConfig {
    let seed = patterns::demo_seed();
    BoardConfig::new(seed.width, seed.height, seed.cells)
}
