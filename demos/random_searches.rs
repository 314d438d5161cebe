//! Random start/goal searches on the 20x20 map, all on one engine.
//!
//! Run: cargo run --bin random-searches -- [COUNT] [SEED]

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use stepstar::SearchState;
use stepstar_demos::{FrameBudget, MAP_HEIGHT, MAP_WIDTH, demo_terrain};
use stepstar_grid::{GridPathfinder, Position};

fn arg_or<T: std::str::FromStr>(index: usize, default: T) -> Result<T, String> {
    match std::env::args().nth(index) {
        Some(s) => s.parse().map_err(|_| format!("invalid argument: {s}")),
        None => Ok(default),
    }
}

fn random_position(rng: &mut StdRng) -> Position {
    Position::new(rng.random_range(0..MAP_WIDTH), rng.random_range(0..MAP_HEIGHT))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let count: usize = arg_or(1, 10)?;
    let seed: u64 = arg_or(2, 42)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pf = GridPathfinder::with_terrain(demo_terrain()?)?;
    let budget = FrameBudget::default();
    let mut found = 0;

    for i in 0..count {
        let start = random_position(&mut rng);
        let goal = random_position(&mut rng);
        pf.begin(start, goal)?;
        let report = budget.drive(|n| pf.step_budget(n));

        match report.state {
            SearchState::Succeeded => {
                found += 1;
                // The start cell is not a step.
                let steps = pf.path().count().saturating_sub(1);
                println!(
                    "Search {i}: {start} -> {goal}: found, {steps} solution steps, {} search steps",
                    pf.step_count()
                );
            }
            state => println!(
                "Search {i}: {start} -> {goal}: {state} after {} search steps",
                pf.step_count()
            ),
        }
        pf.release();
    }

    let stats = pf.stats();
    println!("{found} of {count} searches found a path");
    println!(
        "High water: nodes {}, open {}, closed {}, successors {}",
        stats.nodes_high_water,
        stats.open_high_water,
        stats.closed_high_water,
        stats.successor_high_water
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
