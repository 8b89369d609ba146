//! Reactive Game of Life: runs the demonstration seed to a fixpoint.
//!
//! Prints every generation with the number of cells the dependency graph
//! had to recalculate, and stops once a tick recalculates nothing (or
//! after the generation cap given as the first argument, default 500).
//!
//! Run with: `cargo run --example reactive_life -- 200`
//! Set `RUST_LOG=debug` to see board construction and stabilisation.

use std::process::ExitCode;

use relife_engine::{BoardConfig, GameBoard};
use relife_test_utils::patterns;

const DEFAULT_CAP: u64 = 500;

fn seed_config() -> BoardConfig {
    let seed = patterns::demo_seed();
    BoardConfig::new(seed.width, seed.height, seed.cells)
}

fn main() -> ExitCode {
    env_logger::init();

    let cap = match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        None => DEFAULT_CAP,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid generation cap: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut board = match GameBoard::new(seed_config()) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("cannot build board: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Dedicated to John Horton Conway");
    println!("(26 December 1937 - 11 April 2020)");
    println!();

    loop {
        let generation = board.generation();
        print!("{}", board.snapshot());
        println!("Generation: {generation}");
        match board.recalculated() {
            Some(n) => println!("Recalculated nodes: {n}"),
            None => println!("Recalculated nodes: -"),
        }
        println!();

        if board.is_stable() {
            println!("Stable after {generation} generations.");
            break;
        }
        if generation >= cap {
            println!("Stopped at generation cap {cap}.");
            break;
        }
        board.tick();
    }

    let m = board.last_metrics();
    println!(
        "nodes: {}  graph memory: {} bytes  last tick: {} us",
        m.node_count, m.memory_bytes, m.total_us
    );
    ExitCode::SUCCESS
}
