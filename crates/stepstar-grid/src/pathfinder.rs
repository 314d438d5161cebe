use log::debug;
use stepstar::{AStarSearch, Cost, SearchConfig, SearchError, SearchState, SearchStats};

use crate::config::GridConfig;
use crate::domain::GridDomain;
use crate::error::GridError;
use crate::geom::Position;
use crate::pool::StateId;
use crate::terrain::TerrainGrid;

/// An engine and a [`GridDomain`] bundled for position-based searching.
///
/// Both are sized once at construction; searches after the first one do
/// not allocate (unless the open or closed list outgrows its reservation).
pub struct GridPathfinder {
    search: AStarSearch<StateId>,
    domain: GridDomain,
}

impl GridPathfinder {
    pub fn new(
        terrain: TerrainGrid,
        grid: GridConfig,
        search: SearchConfig,
    ) -> Result<Self, GridError> {
        Ok(Self {
            search: AStarSearch::new(search)?,
            domain: GridDomain::new(terrain, grid)?,
        })
    }

    /// A pathfinder with default grid settings and the default node
    /// capacity. The open and closed lists are reserved for every cell of
    /// `terrain`, so no search on it reallocates them.
    pub fn with_terrain(terrain: TerrainGrid) -> Result<Self, GridError> {
        let cells = terrain.bounds().len();
        let search = SearchConfig::default()
            .with_open_capacity(cells)
            .with_closed_capacity(cells);
        Self::new(terrain, GridConfig::default(), search)
    }

    /// Start a search. The previous search, if any, is released.
    pub fn begin(&mut self, start: Position, goal: Position) -> Result<SearchState, GridError> {
        let (start, goal) = self.intern_endpoints(start, goal)?;
        Ok(self.search.begin_search(&self.domain, start, goal))
    }

    /// Expand one node.
    #[inline]
    pub fn step(&mut self) -> SearchState {
        self.search.step(&mut self.domain)
    }

    /// Expand up to `max_steps` nodes.
    #[inline]
    pub fn step_budget(&mut self, max_steps: usize) -> SearchState {
        self.search.step_budget(&mut self.domain, max_steps)
    }

    /// Stop the current search at the next step.
    pub fn cancel(&mut self) {
        self.search.cancel();
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.search.state()
    }

    /// Positions of the found path, start first. Empty unless the search
    /// succeeded.
    pub fn path(&self) -> impl Iterator<Item = Position> + '_ {
        self.search.solution().map(move |id| self.domain.position(*id))
    }

    /// Replace the contents of `out` with the found path. Returns whether
    /// there was one.
    pub fn path_into(&self, out: &mut Vec<Position>) -> bool {
        out.clear();
        out.extend(self.path());
        !out.is_empty()
    }

    /// Cost of the found path.
    pub fn path_cost(&self) -> Option<Cost> {
        self.search.solution_cost()
    }

    /// Run a whole search and return the path.
    pub fn find_path(&mut self, start: Position, goal: Position) -> Result<Vec<Position>, GridError> {
        let (start, goal) = self.intern_endpoints(start, goal)?;
        let ids = self.search.find_path(&mut self.domain, start, goal)?;
        let path: Vec<_> = ids.iter().map(|id| self.domain.position(*id)).collect();
        debug!("grid path of {} cells", path.len());
        Ok(path)
    }

    /// Open cells with their `f` values, cheapest first.
    pub fn open_cells(&self) -> impl Iterator<Item = (Position, Cost)> + '_ {
        self.search
            .open_nodes()
            .map(move |n| (self.domain.position(*n.state()), n.f()))
    }

    /// Closed cells with their `f` values.
    pub fn closed_cells(&self) -> impl Iterator<Item = (Position, Cost)> + '_ {
        self.search
            .closed_nodes()
            .map(move |n| (self.domain.position(*n.state()), n.f()))
    }

    /// Release the engine's nodes and the domain's states.
    pub fn release(&mut self) {
        self.search.release_nodes();
        self.domain.reset();
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.search.stats()
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.search.step_count()
    }

    #[inline]
    pub fn domain(&self) -> &GridDomain {
        &self.domain
    }

    /// Mutable domain access. Terrain changes take effect on the next search.
    #[inline]
    pub fn domain_mut(&mut self) -> &mut GridDomain {
        &mut self.domain
    }

    #[inline]
    pub fn search(&self) -> &AStarSearch<StateId> {
        &self.search
    }

    fn intern_endpoints(
        &mut self,
        start: Position,
        goal: Position,
    ) -> Result<(StateId, StateId), GridError> {
        let bounds = self.domain.terrain().bounds();
        for p in [start, goal] {
            if !bounds.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        self.release();
        // In bounds and the pool holds at least two states.
        match (self.domain.state(start), self.domain.state(goal)) {
            (Some(s), Some(g)) => Ok((s, g)),
            _ => Err(GridError::Search(SearchError::OutOfMemory)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CostModel, Movement};
    use crate::distance::Heuristic;

    fn pathfinder(rows: &[&str]) -> GridPathfinder {
        GridPathfinder::with_terrain(TerrainGrid::from_rows(rows).unwrap()).unwrap()
    }

    #[test]
    fn straight_line_in_three_expansions() {
        let mut pf = pathfinder(&[
            "111", //
            "111", //
            "111", //
        ]);
        assert_eq!(
            pf.begin(Position::new(0, 0), Position::new(2, 0)),
            Ok(SearchState::Searching)
        );
        let state = pf.step_budget(3);
        assert_eq!(state, SearchState::Succeeded);
        assert!(pf.step_count() <= 3);
        let path: Vec<_> = pf.path().collect();
        assert_eq!(
            path,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(pf.path_cost(), Some(2.0));
    }

    #[test]
    fn walled_in_goal_fails() {
        let mut pf = pathfinder(&[
            "11111", //
            "11911", //
            "19191", //
            "11911", //
            "11111", //
        ]);
        pf.begin(Position::new(0, 0), Position::new(2, 2)).unwrap();
        while pf.step() == SearchState::Searching {}
        assert_eq!(pf.state(), SearchState::Failed);
        assert_eq!(pf.path().count(), 0);
        assert_eq!(
            pf.find_path(Position::new(0, 0), Position::new(2, 2)),
            Err(GridError::Search(SearchError::NoPath))
        );
    }

    #[test]
    fn impassable_goal_cell_fails() {
        let mut pf = pathfinder(&["119"]);
        assert_eq!(
            pf.find_path(Position::new(0, 0), Position::new(2, 0)),
            Err(GridError::Search(SearchError::NoPath))
        );
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let mut pf = pathfinder(&["11", "11"]);
        assert_eq!(
            pf.begin(Position::new(0, 0), Position::new(2, 0)),
            Err(GridError::OutOfBounds(Position::new(2, 0)))
        );
        assert_eq!(
            pf.find_path(Position::new(-1, 0), Position::new(1, 1)),
            Err(GridError::OutOfBounds(Position::new(-1, 0)))
        );
        assert_eq!(pf.state(), SearchState::NotInitialized);
    }

    #[test]
    fn routes_around_expensive_terrain() {
        let mut pf = pathfinder(&[
            "1711", //
            "1711", //
            "1111", //
        ]);
        let path = pf
            .find_path(Position::new(0, 0), Position::new(2, 0))
            .unwrap();
        assert_eq!(path.len(), 7);
        assert!(!path.contains(&Position::new(1, 0)));
        assert!(!path.contains(&Position::new(1, 1)));
    }

    #[test]
    fn free_cells_keep_the_default_heuristic_optimal() {
        let mut pf = pathfinder(&[
            "0110", //
            "0000", //
        ]);
        let (start, goal) = (Position::new(0, 0), Position::new(3, 0));
        pf.begin(start, goal).unwrap();
        while pf.step() == SearchState::Searching {}
        assert_eq!(pf.path_cost(), Some(0.0));
        assert!(!pf.path().any(|p| p == Position::new(1, 0)));
    }

    #[test]
    fn with_terrain_reserves_lists_for_every_cell() {
        let pf = GridPathfinder::with_terrain(TerrainGrid::new(20, 20, 1)).unwrap();
        let config = pf.search().config();
        assert_eq!(config.open_capacity, 400);
        assert_eq!(config.closed_capacity, 400);
        assert_eq!(config.node_capacity, SearchConfig::DEFAULT_NODE_CAPACITY);
    }

    #[test]
    fn overestimating_eight_way_config_is_rejected() {
        let result = GridPathfinder::new(
            TerrainGrid::new(4, 4, 1),
            GridConfig::default()
                .with_movement(Movement::EightWay)
                .with_heuristic(Heuristic::Euclidean),
            SearchConfig::default(),
        );
        assert!(matches!(result, Err(GridError::InvalidConfig { .. })));
    }

    #[test]
    fn small_pool_runs_out_of_memory() {
        let mut pf = GridPathfinder::new(
            TerrainGrid::new(10, 10, 1),
            GridConfig::default().with_state_capacity(5),
            SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(
            pf.find_path(Position::new(0, 0), Position::new(9, 9)),
            Err(GridError::Search(SearchError::OutOfMemory))
        );
        // A short hop still fits.
        assert!(pf.find_path(Position::new(0, 0), Position::new(1, 0)).is_ok());
    }

    #[test]
    fn small_arena_is_reported() {
        let mut pf = GridPathfinder::new(
            TerrainGrid::new(10, 10, 1),
            GridConfig::default(),
            SearchConfig::new(8),
        )
        .unwrap();
        assert_eq!(
            pf.find_path(Position::new(0, 0), Position::new(9, 9)),
            Err(GridError::Search(SearchError::ArenaExhausted { capacity: 8 }))
        );
    }

    #[test]
    fn eight_way_cuts_corners() {
        let mut pf = GridPathfinder::new(
            TerrainGrid::new(4, 4, 1),
            GridConfig::default()
                .with_movement(Movement::EightWay)
                .with_heuristic(Heuristic::Chebyshev),
            SearchConfig::default(),
        )
        .unwrap();
        let path = pf
            .find_path(Position::new(0, 0), Position::new(3, 3))
            .unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn leave_source_prices_the_start_cell() {
        let mut pf = GridPathfinder::new(
            TerrainGrid::from_rows(&["31"]).unwrap(),
            GridConfig::default().with_cost_model(CostModel::LeaveSource),
            SearchConfig::default(),
        )
        .unwrap();
        pf.begin(Position::new(0, 0), Position::new(1, 0)).unwrap();
        while pf.step() == SearchState::Searching {}
        assert_eq!(pf.path_cost(), Some(3.0));
    }

    #[test]
    fn inspection_between_steps() {
        let mut pf = pathfinder(&["111", "111"]);
        pf.begin(Position::new(0, 0), Position::new(2, 1)).unwrap();
        pf.step();
        let closed: Vec<_> = pf.closed_cells().map(|(p, _)| p).collect();
        assert_eq!(closed, vec![Position::new(0, 0)]);
        let open: Vec<_> = pf.open_cells().collect();
        assert_eq!(open.len(), 2);
        assert!(open.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn reuse_keeps_results_stable() {
        let mut pf = pathfinder(&[
            "1111", //
            "1991", //
            "1111", //
        ]);
        let mut out = Vec::new();
        for _ in 0..4 {
            pf.begin(Position::new(0, 1), Position::new(3, 1)).unwrap();
            while pf.step() == SearchState::Searching {}
            assert!(pf.path_into(&mut out));
            assert_eq!(out.len(), 6);
        }
        let high = pf.stats().nodes_high_water;
        pf.find_path(Position::new(0, 1), Position::new(3, 1)).unwrap();
        assert_eq!(pf.stats().nodes_high_water, high);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        fn arb_terrain() -> impl Strategy<Value = TerrainGrid> {
            (1i32..9, 1i32..9).prop_flat_map(|(w, h)| {
                prop::collection::vec(prop_oneof![3 => 0u8..5, 1 => Just(9u8)], (w * h) as usize)
                    .prop_map(move |cells| {
                        let mut t = TerrainGrid::new(w, h, 1);
                        for (p, c) in t.bounds().iter().zip(cells) {
                            t.set(p, c);
                        }
                        t
                    })
            })
        }

        fn cost_with(t: &TerrainGrid, grid: GridConfig, start: Position, goal: Position) -> Option<Cost> {
            let mut pf = GridPathfinder::new(t.clone(), grid, SearchConfig::new(2048)).unwrap();
            pf.begin(start, goal).unwrap();
            while pf.step() == SearchState::Searching {}
            pf.path_cost()
        }

        proptest! {
            #[test]
            fn heuristics_agree_with_dijkstra(
                t in arb_terrain(),
                sx in 0i32..8, sy in 0i32..8, gx in 0i32..8, gy in 0i32..8,
                eight_way in any::<bool>(),
                euclidean in any::<bool>(),
            ) {
                let start = Position::new(sx % t.width(), sy % t.height());
                let goal = Position::new(gx % t.width(), gy % t.height());
                let (movement, informed) = match (eight_way, euclidean) {
                    (true, _) => (Movement::EightWay, Heuristic::Chebyshev),
                    (false, true) => (Movement::Cardinal, Heuristic::Euclidean),
                    (false, false) => (Movement::Cardinal, Heuristic::Manhattan),
                };
                let base = GridConfig::default().with_movement(movement);

                let oracle = cost_with(&t, base.with_heuristic(Heuristic::Zero), start, goal);
                let found = cost_with(&t, base.with_heuristic(informed), start, goal);
                prop_assert_eq!(oracle.is_some(), found.is_some());
                if let (Some(a), Some(b)) = (oracle, found) {
                    prop_assert!((a - b).abs() < 1e-3, "zero {} informed {}", a, b);
                }
            }

            #[test]
            fn paths_are_connected_and_passable(
                t in arb_terrain(),
                gx in 0i32..8, gy in 0i32..8,
            ) {
                let goal = Position::new(gx % t.width(), gy % t.height());
                let mut pf = GridPathfinder::new(t.clone(), GridConfig::default(), SearchConfig::new(2048)).unwrap();
                if let Ok(path) = pf.find_path(Position::ZERO, goal) {
                    prop_assert_eq!(path[0], Position::ZERO);
                    prop_assert_eq!(*path.last().unwrap(), goal);
                    for w in path.windows(2) {
                        let d = w[1] - w[0];
                        prop_assert_eq!(d.x.abs() + d.y.abs(), 1);
                        prop_assert!(pf.domain().is_passable(w[1]));
                    }
                }
            }
        }
    }
}
