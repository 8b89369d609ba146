//! The Game of Life transition rule.

/// Next state of a cell from its own state and its live-neighbour count.
///
/// - A live cell survives with 2 or 3 live neighbours, and dies of
///   isolation (fewer) or overcrowding (more).
/// - A dead cell becomes live with exactly 3 live neighbours.
#[inline]
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,
    }
}

/// Transition over a cell's neighbourhood: `inputs[0]` is the cell,
/// `inputs[1..]` its eight neighbours.
///
/// This is the evaluation function of every derived cell node.
pub fn transition(inputs: &[bool]) -> bool {
    match inputs.split_first() {
        Some((&alive, neighbours)) => {
            let live = neighbours.iter().filter(|&&n| n).count();
            next_state(alive, u8::try_from(live).unwrap_or(u8::MAX))
        }
        None => false,
    }
}
