//! The road map of Romania as a search domain.
//!
//! Twenty cities joined by roads with distances in kilometres. The
//! heuristic is the straight-line distance to Bucharest, so it is only
//! informative when Bucharest is the goal; for any other goal it is 0.

use std::fmt;
use std::str::FromStr;

use stepstar::{Cost, SearchDomain, Successors};

/// A city on the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Arad,
    Bucharest,
    Craiova,
    Drobeta,
    Eforie,
    Fagaras,
    Giurgiu,
    Hirsova,
    Iasi,
    Lugoj,
    Mehadia,
    Neamt,
    Oradea,
    Pitesti,
    RimnicuVilcea,
    Sibiu,
    Timisoara,
    Urziceni,
    Vaslui,
    Zerind,
}

const CITY_COUNT: usize = 20;

impl City {
    pub const ALL: [City; CITY_COUNT] = [
        City::Arad,
        City::Bucharest,
        City::Craiova,
        City::Drobeta,
        City::Eforie,
        City::Fagaras,
        City::Giurgiu,
        City::Hirsova,
        City::Iasi,
        City::Lugoj,
        City::Mehadia,
        City::Neamt,
        City::Oradea,
        City::Pitesti,
        City::RimnicuVilcea,
        City::Sibiu,
        City::Timisoara,
        City::Urziceni,
        City::Vaslui,
        City::Zerind,
    ];

    pub fn name(self) -> &'static str {
        match self {
            City::Arad => "Arad",
            City::Bucharest => "Bucharest",
            City::Craiova => "Craiova",
            City::Drobeta => "Drobeta",
            City::Eforie => "Eforie",
            City::Fagaras => "Fagaras",
            City::Giurgiu => "Giurgiu",
            City::Hirsova => "Hirsova",
            City::Iasi => "Iasi",
            City::Lugoj => "Lugoj",
            City::Mehadia => "Mehadia",
            City::Neamt => "Neamt",
            City::Oradea => "Oradea",
            City::Pitesti => "Pitesti",
            City::RimnicuVilcea => "RimnicuVilcea",
            City::Sibiu => "Sibiu",
            City::Timisoara => "Timisoara",
            City::Urziceni => "Urziceni",
            City::Vaslui => "Vaslui",
            City::Zerind => "Zerind",
        }
    }

    /// Straight-line distance to Bucharest.
    pub fn distance_to_bucharest(self) -> Cost {
        match self {
            City::Arad => 366.0,
            City::Bucharest => 0.0,
            City::Craiova => 160.0,
            City::Drobeta => 242.0,
            City::Eforie => 161.0,
            City::Fagaras => 176.0,
            City::Giurgiu => 77.0,
            City::Hirsova => 151.0,
            City::Iasi => 226.0,
            City::Lugoj => 244.0,
            City::Mehadia => 241.0,
            City::Neamt => 234.0,
            City::Oradea => 380.0,
            City::Pitesti => 100.0,
            City::RimnicuVilcea => 193.0,
            City::Sibiu => 253.0,
            City::Timisoara => 329.0,
            City::Urziceni => 80.0,
            City::Vaslui => 199.0,
            City::Zerind => 374.0,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that is not on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCity(pub String);

impl fmt::Display for UnknownCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "there is no city named {} on the map", self.0)
    }
}

impl std::error::Error for UnknownCity {}

impl FromStr for City {
    type Err = UnknownCity;

    /// Exact, case-sensitive match on [`City::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCity(s.to_string()))
    }
}

/// Roads between cities. Each road is stored per direction.
#[derive(Debug, Clone)]
pub struct RoadMap {
    roads: [[Option<Cost>; CITY_COUNT]; CITY_COUNT],
}

impl RoadMap {
    /// A map with no roads.
    pub fn empty() -> Self {
        Self {
            roads: [[None; CITY_COUNT]; CITY_COUNT],
        }
    }

    /// The Romania map.
    pub fn romania() -> Self {
        use City::*;

        let mut map = Self::empty();
        let roads: [(City, &[(City, Cost)]); CITY_COUNT] = [
            (Arad, &[(Sibiu, 140.0), (Zerind, 75.0), (Timisoara, 118.0)]),
            (
                Bucharest,
                &[
                    (Giurgiu, 90.0),
                    (Urziceni, 85.0),
                    (Fagaras, 211.0),
                    (Pitesti, 101.0),
                ],
            ),
            (
                Craiova,
                &[(Drobeta, 120.0), (RimnicuVilcea, 146.0), (Pitesti, 138.0)],
            ),
            (Drobeta, &[(Craiova, 120.0), (Mehadia, 75.0)]),
            (Eforie, &[(Hirsova, 75.0)]),
            (Fagaras, &[(Bucharest, 211.0), (Sibiu, 99.0)]),
            (Giurgiu, &[(Bucharest, 90.0)]),
            (Hirsova, &[(Eforie, 86.0), (Urziceni, 98.0)]),
            (Iasi, &[(Vaslui, 92.0), (Neamt, 87.0)]),
            (Lugoj, &[(Timisoara, 111.0), (Mehadia, 70.0)]),
            (Mehadia, &[(Lugoj, 70.0), (Drobeta, 75.0)]),
            (Neamt, &[(Iasi, 87.0)]),
            (Oradea, &[(Zerind, 71.0), (Sibiu, 151.0)]),
            (
                Pitesti,
                &[(Bucharest, 101.0), (RimnicuVilcea, 97.0), (Craiova, 138.0)],
            ),
            (
                RimnicuVilcea,
                &[(Pitesti, 97.0), (Craiova, 146.0), (Sibiu, 80.0)],
            ),
            (
                Sibiu,
                &[
                    (RimnicuVilcea, 80.0),
                    (Fagaras, 99.0),
                    (Oradea, 151.0),
                    (Arad, 140.0),
                ],
            ),
            (Timisoara, &[(Arad, 118.0), (Lugoj, 111.0)]),
            (
                Urziceni,
                &[(Bucharest, 85.0), (Hirsova, 98.0), (Vaslui, 142.0)],
            ),
            (Vaslui, &[(Urziceni, 142.0), (Iasi, 92.0)]),
            (Zerind, &[(Arad, 75.0), (Oradea, 71.0)]),
        ];
        for (from, list) in roads {
            for &(to, km) in list {
                map.add_road(from, to, km);
            }
        }
        map
    }

    /// Add a one-way road.
    pub fn add_road(&mut self, from: City, to: City, km: Cost) {
        self.roads[from.index()][to.index()] = Some(km);
    }

    /// Length of the road from `from` to `to`, if there is one.
    pub fn road(&self, from: City, to: City) -> Option<Cost> {
        self.roads[from.index()][to.index()]
    }

    /// Cities reachable by one road from `from`, in map order.
    pub fn neighbours(&self, from: City) -> impl Iterator<Item = City> + '_ {
        City::ALL
            .into_iter()
            .filter(move |&to| self.road(from, to).is_some())
    }
}

impl Default for RoadMap {
    fn default() -> Self {
        Self::romania()
    }
}

impl SearchDomain for RoadMap {
    type State = City;

    fn heuristic(&self, candidate: &City, goal: &City) -> Cost {
        if *goal == City::Bucharest {
            candidate.distance_to_bucharest()
        } else {
            0.0
        }
    }

    fn is_goal(&self, candidate: &City, goal: &City) -> bool {
        candidate == goal
    }

    fn generate_successors(
        &mut self,
        current: &City,
        parent: Option<&City>,
        successors: &mut Successors<'_, City>,
    ) -> bool {
        for to in self.neighbours(*current) {
            if Some(&to) == parent {
                continue;
            }
            if successors.add_successor(to).is_err() {
                break;
            }
        }
        true
    }

    fn edge_cost(&self, from: &City, to: &City) -> Cost {
        self.road(*from, *to).unwrap_or(Cost::INFINITY)
    }

    fn states_equal(&self, a: &City, b: &City) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use stepstar::{AStarSearch, SearchConfig, SearchState};

    use super::*;

    /// Plain Dijkstra over the road map.
    fn shortest(map: &RoadMap, from: City, to: City) -> Option<Cost> {
        let mut dist = [Cost::INFINITY; CITY_COUNT];
        let mut done = [false; CITY_COUNT];
        dist[from.index()] = 0.0;
        loop {
            let next = City::ALL
                .into_iter()
                .filter(|c| !done[c.index()] && dist[c.index()].is_finite())
                .min_by(|a, b| dist[a.index()].total_cmp(&dist[b.index()]))?;
            if next == to {
                return Some(dist[to.index()]);
            }
            done[next.index()] = true;
            for n in map.neighbours(next) {
                let d = dist[next.index()] + map.edge_cost(&next, &n);
                if d < dist[n.index()] {
                    dist[n.index()] = d;
                }
            }
        }
    }

    #[test]
    fn arad_to_bucharest() {
        let mut map = RoadMap::romania();
        let mut search = AStarSearch::new(SearchConfig::new(256)).unwrap();
        search.begin_search(&map, City::Arad, City::Bucharest);
        while search.step(&mut map) == SearchState::Searching {}

        assert_eq!(search.state(), SearchState::Succeeded);
        assert_eq!(search.solution_cost(), Some(418.0));
        let route: Vec<_> = search.solution().copied().collect();
        assert_eq!(
            route,
            vec![
                City::Arad,
                City::Sibiu,
                City::RimnicuVilcea,
                City::Pitesti,
                City::Bucharest
            ]
        );
    }

    #[test]
    fn every_city_reaches_bucharest_optimally() {
        let mut map = RoadMap::romania();
        let mut search = AStarSearch::new(SearchConfig::new(512)).unwrap();
        for city in City::ALL {
            search.begin_search(&map, city, City::Bucharest);
            while search.step(&mut map) == SearchState::Searching {}
            assert_eq!(search.state(), SearchState::Succeeded, "from {city}");
            assert_eq!(
                search.solution_cost(),
                shortest(&map, city, City::Bucharest),
                "from {city}"
            );
        }
    }

    #[test]
    fn other_goals_use_a_zero_estimate() {
        let mut map = RoadMap::romania();
        assert_eq!(map.heuristic(&City::Arad, &City::Iasi), 0.0);
        let mut search = AStarSearch::new(SearchConfig::new(512)).unwrap();
        let route = search.find_path(&mut map, City::Timisoara, City::Iasi).unwrap();
        assert_eq!(route.first(), Some(&City::Timisoara));
        assert_eq!(route.last(), Some(&City::Iasi));
    }

    #[test]
    fn parses_city_names() {
        assert_eq!("RimnicuVilcea".parse::<City>(), Ok(City::RimnicuVilcea));
        let err = "Cluj".parse::<City>().unwrap_err();
        assert_eq!(err.to_string(), "there is no city named Cluj on the map");
        assert!("arad".parse::<City>().is_err());
    }

    #[test]
    fn roads_are_directed() {
        let mut map = RoadMap::empty();
        map.add_road(City::Arad, City::Zerind, 75.0);
        assert_eq!(map.road(City::Arad, City::Zerind), Some(75.0));
        assert_eq!(map.road(City::Zerind, City::Arad), None);
        let mut search = AStarSearch::default();
        assert!(search.find_path(&mut map, City::Zerind, City::Arad).is_err());
    }
}
