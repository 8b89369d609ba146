//! Deterministic pseudo-random seeds.
//!
//! A 64-bit linear congruential generator (Knuth's MMIX constants) keeps
//! soups reproducible from a single `u64` seed without pulling in an RNG
//! crate.

const MUL: u64 = 6364136223846793005;
const INC: u64 = 1442695040888963407;

/// Row-major random board of `width * height` cells.
///
/// Each cell is live with probability `density_percent / 100`. The same
/// `seed` always yields the same board.
pub fn random_soup(width: u32, height: u32, density_percent: u8, seed: u64) -> Vec<bool> {
    let mut state = seed;
    (0..width as usize * height as usize)
        .map(|_| {
            state = state.wrapping_mul(MUL).wrapping_add(INC);
            // High bits of an LCG are the well-mixed ones.
            ((state >> 33) % 100) < u64::from(density_percent)
        })
        .collect()
}
