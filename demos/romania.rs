//! Shortest road route from a city to Bucharest.
//!
//! Run: cargo run --bin romania -- [CITY]
//!
//! The start city defaults to Arad. An unknown name exits with status 1.

use stepstar::{AStarSearch, SearchConfig, SearchState};
use stepstar_demos::romania::{City, RoadMap};

fn main() {
    let start = match std::env::args().nth(1) {
        Some(name) => match name.parse::<City>() {
            Ok(city) => city,
            Err(_) => {
                println!("There is no city named {name} in the map!");
                std::process::exit(1);
            }
        },
        None => City::Arad,
    };

    let mut map = RoadMap::romania();
    let mut search = match AStarSearch::new(SearchConfig::new(256)) {
        Ok(search) => search,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    search.begin_search(&map, start, City::Bucharest);
    let mut state = SearchState::Searching;
    while state == SearchState::Searching {
        state = search.step(&mut map);
    }

    if state == SearchState::Succeeded {
        println!("Search found the goal state");
        println!("Displaying solution");
        let mut steps = 0;
        if let Some(city) = search.solution_start() {
            println!(" {city}");
        }
        while let Some(city) = search.solution_next() {
            println!(" {city}");
            steps += 1;
        }
        println!("Solution steps {steps}");
        if let Some(km) = search.solution_cost() {
            println!("Distance {km} km");
        }
        search.release_nodes();
    } else {
        println!("Search terminated. Did not find goal state");
    }
    println!("SearchSteps : {}", search.step_count());
}
