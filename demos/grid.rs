//! Terrain grid demo: one search on the 20x20 map.
//!
//! Run: cargo run --bin grid -- [--trace-lists] [SX SY GX GY]
//!
//! Without coordinates the search goes from (0, 0) to (2, 4). With
//! `--trace-lists` the open and closed lists are printed after every step;
//! otherwise the search is driven a frame at a time.

use stepstar::SearchState;
use stepstar_demos::{FrameBudget, PathDisplay, demo_terrain};
use stepstar_grid::{GridPathfinder, Position};

struct Args {
    trace_lists: bool,
    start: Position,
    goal: Position,
}

fn parse_args() -> Result<Args, String> {
    let mut trace_lists = false;
    let mut coords = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--trace-lists" {
            trace_lists = true;
            continue;
        }
        let n: i32 = arg
            .parse()
            .map_err(|_| format!("not a coordinate: {arg}"))?;
        coords.push(n);
    }
    let (start, goal) = match coords[..] {
        [] => (Position::new(0, 0), Position::new(2, 4)),
        [sx, sy, gx, gy] => (Position::new(sx, sy), Position::new(gx, gy)),
        _ => return Err("expected four coordinates: SX SY GX GY".to_string()),
    };
    Ok(Args {
        trace_lists,
        start,
        goal,
    })
}

fn print_lists(pf: &GridPathfinder) {
    println!("Steps:{}", pf.step_count());
    println!("Open:");
    let mut len = 0;
    for (p, f) in pf.open_cells() {
        println!(" {p} f={f}");
        len += 1;
    }
    println!("Open list has {len} nodes");
    println!("Closed:");
    len = 0;
    for (p, f) in pf.closed_cells() {
        println!(" {p} f={f}");
        len += 1;
    }
    println!("Closed list has {len} nodes");
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut pf = GridPathfinder::with_terrain(demo_terrain()?)?;
    pf.begin(args.start, args.goal)?;

    let state = if args.trace_lists {
        loop {
            let state = pf.step();
            print_lists(&pf);
            if state != SearchState::Searching {
                break state;
            }
        }
    } else {
        let report = FrameBudget::default().drive(|n| pf.step_budget(n));
        println!("Search took {} frames", report.frames);
        if report.state == SearchState::Searching {
            pf.cancel();
            pf.step()
        } else {
            report.state
        }
    };

    match state {
        SearchState::Succeeded => {
            let path = PathDisplay(pf.path().collect());
            println!("Solution path length: {}", path.0.len());
            println!("Solution: {path}");
            if let Some(cost) = pf.path_cost() {
                println!("Solution cost: {cost}");
            }
        }
        SearchState::Failed => println!("Pathfind FAILED!"),
        other => println!("Search stopped: {other}"),
    }
    println!("SearchSteps: {}", pf.step_count());
    pf.release();
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
